//! CLI argument parsing for waypath
//!
//! Supports global flags: --graph, --results, --format, --quiet, --verbose

pub mod parse;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use parse::parse_format;
use waypath_core::graph::Algorithm;
pub use waypath_core::format::OutputFormat;

/// Waypath - shortest paths over a road network
#[derive(Parser, Debug)]
#[command(name = "waypath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Edge-list file (overrides graph_file from waypath.toml)
    #[arg(long, global = true, env = "WAYPATH_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Result log file (overrides results_file from waypath.toml)
    #[arg(long, global = true)]
    pub results: Option<PathBuf>,

    /// Output format: human, json, or records
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directives (e.g. "debug", "waypath_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Defaults to the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every location and its outgoing roads
    Graph,

    /// List the direct neighbors of a location
    Neighbors {
        /// Location name (exact, case-sensitive)
        location: String,
    },

    /// Compute shortest paths between two locations
    Path {
        /// Source location
        from: String,

        /// Destination location
        to: String,

        /// Which search to run
        #[arg(long, short, value_enum, default_value = "both")]
        algorithm: AlgorithmChoice,

        /// Append both reports to the result log
        #[arg(long)]
        save: bool,
    },

    /// Start the interactive numbered menu
    Menu,

    /// Write the resolved settings to waypath.toml
    Init {
        /// Replace an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Search selection for the `path` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmChoice {
    Bfs,
    Dijkstra,
    Both,
}

impl AlgorithmChoice {
    pub fn algorithms(self) -> &'static [Algorithm] {
        match self {
            AlgorithmChoice::Bfs => &[Algorithm::Bfs],
            AlgorithmChoice::Dijkstra => &[Algorithm::Dijkstra],
            AlgorithmChoice::Both => &Algorithm::ALL,
        }
    }
}
