//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Default edge-list input file
pub const DEFAULT_GRAPH_FILE: &str = "cities.txt";

/// Default result log file
pub const DEFAULT_RESULTS_FILE: &str = "shortest_distance.txt";

/// Default distance unit label
pub const DEFAULT_DISTANCE_UNIT: &str = "km";

/// Route configuration, read from `waypath.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Edge-list file loaded by `graph`, `neighbors`, `path` and menu option 1
    #[serde(default = "default_graph_file")]
    pub graph_file: String,

    /// Append-only log that receives saved path reports
    #[serde(default = "default_results_file")]
    pub results_file: String,

    /// Unit label printed after distances
    #[serde(default = "default_distance_unit")]
    pub distance_unit: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            graph_file: default_graph_file(),
            results_file: default_results_file(),
            distance_unit: default_distance_unit(),
        }
    }
}

fn default_graph_file() -> String {
    DEFAULT_GRAPH_FILE.to_string()
}

fn default_results_file() -> String {
    DEFAULT_RESULTS_FILE.to_string()
}

fn default_distance_unit() -> String {
    DEFAULT_DISTANCE_UNIT.to_string()
}
