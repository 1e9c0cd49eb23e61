//! Road network storage and path-finding operations
//!
//! Provides the graph store and the two searches over it:
//! - BFS for fewest-hop paths
//! - Dijkstra (linear-scan selection) for minimum-weight paths
//! - Graph provider trait for pluggable adjacency sources

pub mod algos;
pub mod store;
pub mod traversal;
pub mod types;

pub use algos::{bfs_search, dijkstra_search, search};
pub use store::RoadGraph;
pub use traversal::GraphProvider;
pub use types::{Algorithm, Distance, Edge, LocationId, SearchResult, Weight, INFINITY};
