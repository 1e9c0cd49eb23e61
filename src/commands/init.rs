//! `waypath init` - write the resolved settings to a config file
//!
//! The file records the graph and result paths after `--graph`/`--results`
//! overrides, so later runs in the same directory pick them up.

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use waypath_core::bail_usage;
use waypath_core::config::RouteConfig;
use waypath_core::error::Result;
use waypath_core::format::quote;

pub fn execute(cli: &Cli, root: &Path, config: &RouteConfig, force: bool) -> Result<()> {
    let path = RouteConfig::config_path(root);
    if path.exists() && !force {
        bail_usage!(format!(
            "{} already exists (use --force to replace it)",
            path.display()
        ));
    }

    config.save(&path)?;
    tracing::debug!(path = %path.display(), "wrote config");

    match cli.format {
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Wrote {}", path.display());
                println!("  graph_file = {}", config.graph_file);
                println!("  results_file = {}", config.results_file);
                println!("  distance_unit = {}", config.distance_unit);
            }
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "status": "ok",
                    "config": path.display().to_string(),
                    "settings": config,
                }))?
            );
        }
        OutputFormat::Records => {
            println!(
                "H waypath=1 records=1 mode=init config={} graph_file={} results_file={} distance_unit={} status=ok",
                quote(&path.display().to_string()),
                quote(&config.graph_file),
                quote(&config.results_file),
                quote(&config.distance_unit)
            );
        }
    }

    Ok(())
}
