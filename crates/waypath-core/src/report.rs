//! Path and graph rendering
//!
//! A [`PathReport`] is the owned, name-resolved form of a [`SearchResult`].
//! Human rendering walks from the destination back to the source:
//!
//! ```text
//! Shortest path from A to C using Dijkstra:
//! C <- B <- A
//! Distance: 15km
//! ```

use serde::Serialize;

use crate::error::Result;
use crate::format::{quote, OutputFormat};
use crate::graph::types::{Algorithm, Distance, LocationId, SearchResult};
use crate::graph::RoadGraph;
use crate::registry::LocationRegistry;

/// One traversed road segment of a reported path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathLeg {
    pub from: String,
    pub to: String,
    pub distance: Distance,
}

/// Name-resolved outcome of one search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathReport {
    pub algorithm: Algorithm,
    pub from: String,
    pub to: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<Distance>,
    pub hops: usize,
    /// Locations from source to destination; empty when not found
    pub path: Vec<String>,
    pub legs: Vec<PathLeg>,
}

impl PathReport {
    pub fn from_result(result: &SearchResult, registry: &LocationRegistry) -> Self {
        let ids: Vec<LocationId> = result.path().unwrap_or_default();
        let path = ids
            .iter()
            .map(|&id| registry.name_of(id).to_string())
            .collect();
        // leg length is the difference of accumulated distances
        let legs = ids
            .windows(2)
            .map(|pair| PathLeg {
                from: registry.name_of(pair[0]).to_string(),
                to: registry.name_of(pair[1]).to_string(),
                distance: result.distance_to(pair[1]) - result.distance_to(pair[0]),
            })
            .collect::<Vec<_>>();

        PathReport {
            algorithm: result.algorithm,
            from: registry.name_of(result.source).to_string(),
            to: registry.name_of(result.destination).to_string(),
            found: result.found(),
            distance: result.distance(),
            hops: legs.len(),
            path,
            legs,
        }
    }

    /// Human-readable report, as shown on screen and appended to the result log
    pub fn render_human(&self, unit: &str) -> String {
        let Some(distance) = self.distance.filter(|_| self.found) else {
            return format!(
                "No path found from {} to {} using {}.\n",
                self.from,
                self.to,
                self.algorithm.display_name()
            );
        };

        let mut out = format!(
            "Shortest path from {} to {} using {}:\n",
            self.from,
            self.to,
            self.algorithm.display_name()
        );
        let walk_back: Vec<&str> = self.path.iter().rev().map(String::as_str).collect();
        out.push_str(&walk_back.join(" <- "));
        out.push('\n');
        out.push_str(&format!("Distance: {}\n", format_distance(distance, unit)));
        out
    }

    /// Line-oriented records: one `H` header, `N` per location, `E` per leg
    pub fn render_records(&self) -> String {
        let mut lines = Vec::with_capacity(1 + self.path.len() + self.legs.len());
        let distance = self
            .distance
            .map(|d| d.to_string())
            .unwrap_or_else(|| "none".to_string());
        lines.push(format!(
            "H waypath=1 records=1 mode=path algorithm={} from={} to={} found={} distance={} hops={}",
            self.algorithm,
            quote(&self.from),
            quote(&self.to),
            self.found,
            distance,
            self.hops
        ));
        for (step, name) in self.path.iter().enumerate() {
            lines.push(format!("N {} {}", step, quote(name)));
        }
        for leg in &self.legs {
            lines.push(format!(
                "E {} {} {}",
                quote(&leg.from),
                quote(&leg.to),
                leg.distance
            ));
        }
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    pub fn render(&self, format: OutputFormat, unit: &str) -> Result<String> {
        match format {
            OutputFormat::Human => Ok(self.render_human(unit)),
            OutputFormat::Json => {
                let mut out = serde_json::to_string_pretty(self)?;
                out.push('\n');
                Ok(out)
            }
            OutputFormat::Records => Ok(self.render_records()),
        }
    }
}

/// Distance with its unit label, e.g. `15km`
pub fn format_distance(distance: Distance, unit: &str) -> String {
    format!("{}{}", distance, unit)
}

/// Full listing of every location and its outgoing roads
pub fn render_graph(graph: &RoadGraph, unit: &str) -> String {
    let mut out = String::new();
    for (id, name) in graph.registry().names().enumerate() {
        out.push_str(&format!("From {}:\n", name));
        let mut any = false;
        for edge in graph.neighbors(id) {
            any = true;
            out.push_str(&format!(
                "  To {}, Distance: {}\n",
                graph.name_of(edge.to),
                format_distance(edge.weight.into(), unit)
            ));
        }
        if !any {
            out.push_str("  No outgoing edges.\n");
        }
        out.push('\n');
    }
    out
}

/// Direct neighbors of one location, one per line
pub fn render_neighbors(graph: &RoadGraph, id: LocationId, unit: &str) -> String {
    graph
        .neighbors(id)
        .map(|edge| {
            format!(
                "{} ({})\n",
                graph.name_of(edge.to),
                format_distance(edge.weight.into(), unit)
            )
        })
        .collect()
}
