use crate::graph::types::{Algorithm, Distance, LocationId, SearchResult, SearchState};
use crate::graph::GraphProvider;
use std::collections::VecDeque;

/// Fewest-hop search from `source`.
///
/// Locations are marked visited when enqueued, so each is expanded at most
/// once. The recorded distance is the summed weight along the discovery
/// path, which is not necessarily the lightest path to that location.
#[tracing::instrument(skip(provider), fields(vertices = provider.vertex_count()))]
pub fn bfs_search(
    provider: &dyn GraphProvider,
    source: LocationId,
    destination: LocationId,
) -> SearchResult {
    let mut state = SearchState::new(provider.vertex_count(), source);
    let mut queue: VecDeque<LocationId> = VecDeque::new();

    state.visited[source] = true;
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        for edge in provider.outbound_edges(current) {
            if state.visited[edge.to] {
                continue;
            }
            state.visited[edge.to] = true;
            state.distances[edge.to] =
                state.distances[current].saturating_add(Distance::from(edge.weight));
            state.parents[edge.to] = Some(current);
            queue.push_back(edge.to);
        }
    }

    let result = SearchResult::new(Algorithm::Bfs, source, destination, state);
    tracing::debug!(found = result.found(), distance = ?result.distance(), "bfs_search");
    result
}
