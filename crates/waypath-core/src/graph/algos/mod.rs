//! Graph algorithm implementations
//!
//! - `bfs`: Breadth-first search, fewest hops
//! - `dijkstra`: Weighted shortest path
//! - `shared`: Parent-chain walking used by both

pub mod bfs;
pub mod dijkstra;
pub mod shared;

pub use bfs::bfs_search;
pub use dijkstra::dijkstra_search;

use crate::graph::types::{Algorithm, LocationId, SearchResult};
use crate::graph::GraphProvider;

/// Run the given algorithm from `source`, reporting on `destination`
pub fn search(
    provider: &dyn GraphProvider,
    algorithm: Algorithm,
    source: LocationId,
    destination: LocationId,
) -> SearchResult {
    match algorithm {
        Algorithm::Bfs => bfs_search(provider, source, destination),
        Algorithm::Dijkstra => dijkstra_search(provider, source, destination),
    }
}
