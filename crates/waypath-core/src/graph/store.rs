use crate::error::{Result, WaypathError};
use crate::graph::types::{Edge, LocationId, Weight};
use crate::registry::LocationRegistry;

/// Directed, weighted road network over registry identifiers
///
/// Edges are kept per source location. Iteration yields the most recently
/// added edge first, and parallel edges are all retained.
#[derive(Debug, Clone, Default)]
pub struct RoadGraph {
    registry: LocationRegistry,
    // stored in insertion order, read back reversed
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a location and make room for its outgoing edges
    pub fn add_location(&mut self, name: &str) -> LocationId {
        let id = self.registry.register(name);
        if id == self.adjacency.len() {
            self.adjacency.push(Vec::new());
        }
        id
    }

    /// Insert a directed edge between two registered locations.
    ///
    /// # Panics
    /// If either identifier was not issued by this graph's registry.
    pub fn add_edge(&mut self, source: LocationId, destination: LocationId, weight: Weight) {
        for (end, id) in [("source", source), ("destination", destination)] {
            assert!(
                id < self.adjacency.len(),
                "edge {} {} is not a registered location",
                end,
                id
            );
        }
        self.adjacency[source].push(Edge {
            to: destination,
            weight,
        });
        self.edge_count += 1;
    }

    /// Register both endpoints by name, then insert the edge
    pub fn connect(
        &mut self,
        source: &str,
        destination: &str,
        weight: Weight,
    ) -> (LocationId, LocationId) {
        let from = self.add_location(source);
        let to = self.add_location(destination);
        self.add_edge(from, to, weight);
        (from, to)
    }

    /// Outgoing edges of `id`, most recently added first
    pub fn neighbors(&self, id: LocationId) -> impl Iterator<Item = &Edge> + '_ {
        self.adjacency[id].iter().rev()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn lookup(&self, name: &str) -> Option<LocationId> {
        self.registry.lookup(name)
    }

    /// Like [`RoadGraph::lookup`], but unknown names become an error
    pub fn resolve(&self, name: &str) -> Result<LocationId> {
        self.lookup(name).ok_or_else(|| WaypathError::not_found(name))
    }

    pub fn name_of(&self, id: LocationId) -> &str {
        self.registry.name_of(id)
    }

    pub fn registry(&self) -> &LocationRegistry {
        &self.registry
    }
}
