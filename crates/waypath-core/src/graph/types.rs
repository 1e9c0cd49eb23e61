use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::WaypathError;

/// Dense location identifier issued by the registry
pub type LocationId = usize;

/// Weight of a single road segment (kilometers by default)
pub type Weight = u32;

/// Accumulated distance along a path
pub type Distance = u64;

/// Distance of a location no search has reached
pub const INFINITY: Distance = Distance::MAX;

/// Directed, weighted connection to another location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub to: LocationId,
    pub weight: Weight,
}

/// Search strategy used to compute a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Fewest hops; reports the summed weight of that path
    Bfs,
    /// Minimum summed weight
    Dijkstra,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Bfs, Algorithm::Dijkstra];

    /// Lowercase identifier used in records and JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dijkstra => "dijkstra",
        }
    }

    /// Name used in human-readable report headers
    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dijkstra => "Dijkstra",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = WaypathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            other => Err(WaypathError::invalid_value("algorithm", other)),
        }
    }
}

/// Per-run working arrays, allocated fresh for every search
#[derive(Debug, Clone)]
pub(crate) struct SearchState {
    pub distances: Vec<Distance>,
    pub visited: Vec<bool>,
    pub parents: Vec<Option<LocationId>>,
}

impl SearchState {
    pub fn new(vertex_count: usize, source: LocationId) -> Self {
        let mut distances = vec![INFINITY; vertex_count];
        distances[source] = 0;
        Self {
            distances,
            visited: vec![false; vertex_count],
            parents: vec![None; vertex_count],
        }
    }
}

/// Outcome of one search run from `source`, queried for `destination`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub algorithm: Algorithm,
    pub source: LocationId,
    pub destination: LocationId,
    distances: Vec<Distance>,
    visited: Vec<bool>,
    parents: Vec<Option<LocationId>>,
}

impl SearchResult {
    pub(crate) fn new(
        algorithm: Algorithm,
        source: LocationId,
        destination: LocationId,
        state: SearchState,
    ) -> Self {
        Self {
            algorithm,
            source,
            destination,
            distances: state.distances,
            visited: state.visited,
            parents: state.parents,
        }
    }

    /// Whether the destination was reached.
    ///
    /// BFS answers from its visited set. The weighted search never settles
    /// its last vertex, so it answers from the tentative distance instead.
    pub fn found(&self) -> bool {
        match self.algorithm {
            Algorithm::Bfs => self.visited[self.destination],
            Algorithm::Dijkstra => self.distances[self.destination] != INFINITY,
        }
    }

    /// Raw distance to any location, `INFINITY` if unreached
    pub fn distance_to(&self, id: LocationId) -> Distance {
        self.distances[id]
    }

    pub fn is_visited(&self, id: LocationId) -> bool {
        self.visited[id]
    }

    pub fn parent_of(&self, id: LocationId) -> Option<LocationId> {
        self.parents[id]
    }

    /// Distance to the destination, `None` when it was not reached
    pub fn distance(&self) -> Option<Distance> {
        self.found().then(|| self.distances[self.destination])
    }

    /// Parent chain above the destination, nearest ancestor first
    pub fn ancestors(&self) -> Vec<LocationId> {
        super::algos::shared::ancestor_chain(&self.parents, self.destination)
    }

    /// Path from source to destination, `None` when it was not reached
    pub fn path(&self) -> Option<Vec<LocationId>> {
        if !self.found() {
            return None;
        }
        let mut path = self.ancestors();
        path.reverse();
        path.push(self.destination);
        Some(path)
    }
}
