//! CLI commands for waypath

pub mod dispatch;
pub mod graph;
pub mod helpers;
pub mod init;
pub mod menu;
pub mod neighbors;
pub mod path;
