//! Helper functions shared across commands

use std::path::Path;

use waypath_core::config::RouteConfig;
use waypath_core::error::{Result, WaypathError};
use waypath_core::graph::RoadGraph;
use waypath_core::ingest;

/// Load the configured graph file, rejecting a file with no edges
pub fn load_configured_graph(config: &RouteConfig) -> Result<RoadGraph> {
    let graph = ingest::load_graph(Path::new(&config.graph_file))?;
    if graph.is_empty() {
        return Err(WaypathError::GraphNotLoaded);
    }
    Ok(graph)
}
