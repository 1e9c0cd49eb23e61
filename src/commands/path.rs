//! `waypath path` - shortest paths between two locations
use std::path::Path;
use std::time::Instant;

use crate::cli::{AlgorithmChoice, Cli, OutputFormat};
use crate::commands::helpers::load_configured_graph;
use waypath_core::config::RouteConfig;
use waypath_core::error::Result;
use waypath_core::graph::{search, Algorithm};
use waypath_core::report::PathReport;
use waypath_core::results::ResultLog;
use waypath_core::{bail_usage, trace_time};

/// Execute the path command
pub fn execute(
    cli: &Cli,
    config: &RouteConfig,
    from: &str,
    to: &str,
    choice: AlgorithmChoice,
    save: bool,
) -> Result<()> {
    if save && choice != AlgorithmChoice::Both {
        bail_usage!("--save records both reports and cannot be combined with --algorithm");
    }

    let start = Instant::now();
    let graph = load_configured_graph(config)?;
    let source = graph.resolve(from)?;
    let destination = graph.resolve(to)?;
    trace_time!(start, "load_and_resolve");

    let reports: Vec<PathReport> = choice
        .algorithms()
        .iter()
        .map(|&algorithm| {
            let result = search(&graph, algorithm, source, destination);
            PathReport::from_result(&result, graph.registry())
        })
        .collect();
    trace_time!(start, "search", algorithms = reports.len());

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
        format => {
            for report in &reports {
                print!("{}", report.render(format, &config.distance_unit)?);
            }
        }
    }

    if save {
        let rendered = |algorithm: Algorithm| {
            reports
                .iter()
                .find(|r| r.algorithm == algorithm)
                .map(|r| r.render_human(&config.distance_unit))
                .unwrap_or_default()
        };
        let mut log = ResultLog::new();
        log.record(rendered(Algorithm::Bfs), rendered(Algorithm::Dijkstra));
        log.flush(Path::new(&config.results_file))?;
        if !cli.quiet {
            eprintln!("Saved results to {}", config.results_file);
        }
    }

    Ok(())
}
