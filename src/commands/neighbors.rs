//! `waypath neighbors` - direct roads out of one location
use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::load_configured_graph;
use waypath_core::config::RouteConfig;
use waypath_core::error::Result;
use waypath_core::format::quote;
use waypath_core::report::render_neighbors;

pub fn execute(cli: &Cli, config: &RouteConfig, location: &str) -> Result<()> {
    let graph = load_configured_graph(config)?;
    let id = graph.resolve(location)?;

    match cli.format {
        OutputFormat::Human => {
            if !cli.quiet {
                println!("{} (index {}) direct neighbors:", location, id);
            }
            let listing = render_neighbors(&graph, id, &config.distance_unit);
            if listing.is_empty() && !cli.quiet {
                println!("  No outgoing edges.");
            }
            print!("{}", listing);
        }
        OutputFormat::Json => {
            let neighbors: Vec<serde_json::Value> = graph
                .neighbors(id)
                .map(|edge| {
                    serde_json::json!({
                        "to": graph.name_of(edge.to),
                        "distance": edge.weight,
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "location": location,
                    "id": id,
                    "neighbors": neighbors,
                }))?
            );
        }
        OutputFormat::Records => {
            println!(
                "H waypath=1 records=1 mode=neighbors location={} id={}",
                quote(location),
                id
            );
            for edge in graph.neighbors(id) {
                println!(
                    "E {} {} {}",
                    quote(location),
                    quote(graph.name_of(edge.to)),
                    edge.weight
                );
            }
        }
    }

    Ok(())
}
