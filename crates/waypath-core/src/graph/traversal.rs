use crate::graph::store::RoadGraph;
use crate::graph::types::{Edge, LocationId};

/// Trait for providing graph adjacency to the search algorithms
pub trait GraphProvider {
    fn vertex_count(&self) -> usize;
    /// Outgoing edges in traversal order
    fn outbound_edges(&self, id: LocationId) -> Vec<Edge>;
}

impl GraphProvider for RoadGraph {
    fn vertex_count(&self) -> usize {
        RoadGraph::vertex_count(self)
    }

    fn outbound_edges(&self, id: LocationId) -> Vec<Edge> {
        self.neighbors(id).copied().collect()
    }
}
