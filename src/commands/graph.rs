//! `waypath graph` - list every location and its roads
use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::load_configured_graph;
use waypath_core::config::RouteConfig;
use waypath_core::error::Result;
use waypath_core::format::quote;
use waypath_core::report::render_graph;

pub fn execute(cli: &Cli, config: &RouteConfig) -> Result<()> {
    let graph = load_configured_graph(config)?;

    match cli.format {
        OutputFormat::Human => print!("{}", render_graph(&graph, &config.distance_unit)),
        OutputFormat::Json => {
            let locations: Vec<serde_json::Value> = graph
                .registry()
                .names()
                .enumerate()
                .map(|(id, name)| {
                    let roads: Vec<serde_json::Value> = graph
                        .neighbors(id)
                        .map(|edge| {
                            serde_json::json!({
                                "to": graph.name_of(edge.to),
                                "distance": edge.weight,
                            })
                        })
                        .collect();
                    serde_json::json!({ "id": id, "name": name, "roads": roads })
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({ "locations": locations }))?
            );
        }
        OutputFormat::Records => {
            println!(
                "H waypath=1 records=1 mode=graph locations={} edges={}",
                graph.vertex_count(),
                graph.edge_count()
            );
            for (id, name) in graph.registry().names().enumerate() {
                println!("N {} {}", id, quote(name));
            }
            for id in 0..graph.vertex_count() {
                for edge in graph.neighbors(id) {
                    println!(
                        "E {} {} {}",
                        quote(graph.name_of(id)),
                        quote(graph.name_of(edge.to)),
                        edge.weight
                    );
                }
            }
        }
    }

    Ok(())
}
