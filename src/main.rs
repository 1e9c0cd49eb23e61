//! Waypath - road network shortest paths
//!
//! Loads a tab-separated edge list of named locations and reports the
//! fewest-hop (BFS) and lightest (Dijkstra) path between two of them.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use cli::parse::parse_cli;
use cli::{Cli, OutputFormat};
use waypath_core::error::{ExitCode as WaypathExitCode, WaypathError};
use waypath_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match parse_cli() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{}", e.to_json());
            return e.exit_code().into();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let code = match commands::dispatch::run(&cli, start) {
        Ok(()) => WaypathExitCode::Success,
        Err(e) => {
            report_failure(&cli, &e);
            e.exit_code()
        }
    };

    tracing::debug!(elapsed = ?start.elapsed(), ?code, "finished");
    code.into()
}

/// Print a failed command's error in the requested output format
fn report_failure(cli: &Cli, error: &WaypathError) {
    match cli.format {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        _ if cli.quiet => {}
        _ => eprintln!("error: {}", error),
    }
}
