//! Command dispatch logic for waypath
use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{Cli, Commands, OutputFormat};
use crate::commands;
use waypath_core::bail_usage;
use waypath_core::config::RouteConfig;
use waypath_core::error::Result;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = RouteConfig::discover(&root)?
        .with_overrides(cli.graph.as_deref(), cli.results.as_deref());

    tracing::debug!(
        elapsed = ?start.elapsed(),
        graph_file = %config.graph_file,
        results_file = %config.results_file,
        "resolve_config"
    );

    match &cli.command {
        None | Some(Commands::Menu) => {
            if cli.format != OutputFormat::Human {
                bail_usage!("the interactive menu only supports --format human");
            }
            commands::menu::execute(config)
        }

        Some(Commands::Graph) => commands::graph::execute(cli, &config),

        Some(Commands::Neighbors { location }) => {
            commands::neighbors::execute(cli, &config, location)
        }

        Some(Commands::Path {
            from,
            to,
            algorithm,
            save,
        }) => commands::path::execute(cli, &config, from, to, *algorithm, *save),

        Some(Commands::Init { force }) => commands::init::execute(cli, &root, &config, *force),
    }
}
