//! Waypath Core Library
//!
//! Road network model and shortest path search for the waypath CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod ingest;
pub mod logging;
pub mod registry;
pub mod report;
pub mod results;
