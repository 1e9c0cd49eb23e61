use crate::graph::types::{Algorithm, Distance, LocationId, SearchResult, SearchState};
use crate::graph::GraphProvider;

/// Pick the unvisited location with the smallest tentative distance.
/// Scans in identifier order; on ties the lowest identifier wins.
fn select_min_unvisited(state: &SearchState) -> Option<LocationId> {
    let mut best: Option<LocationId> = None;
    for (id, &distance) in state.distances.iter().enumerate() {
        if state.visited[id] {
            continue;
        }
        match best {
            Some(current) if state.distances[current] <= distance => {}
            _ => best = Some(id),
        }
    }
    best
}

/// Minimum-weight search from `source` using a linear-scan selection.
///
/// Runs `vertex_count - 1` settle-and-relax rounds. The last selected
/// location is never marked visited, so reachability is read from the
/// tentative distance rather than the visited set.
#[tracing::instrument(skip(provider), fields(vertices = provider.vertex_count()))]
pub fn dijkstra_search(
    provider: &dyn GraphProvider,
    source: LocationId,
    destination: LocationId,
) -> SearchResult {
    let vertex_count = provider.vertex_count();
    let mut state = SearchState::new(vertex_count, source);

    for _ in 0..vertex_count.saturating_sub(1) {
        let Some(current) = select_min_unvisited(&state) else {
            break;
        };
        state.visited[current] = true;

        // INFINITY saturates, so unreached locations never relax anything
        let base = state.distances[current];
        for edge in provider.outbound_edges(current) {
            let candidate = base.saturating_add(Distance::from(edge.weight));
            if !state.visited[edge.to] && candidate < state.distances[edge.to] {
                state.distances[edge.to] = candidate;
                state.parents[edge.to] = Some(current);
            }
        }
    }

    let result = SearchResult::new(Algorithm::Dijkstra, source, destination, state);
    tracing::debug!(found = result.found(), distance = ?result.distance(), "dijkstra_search");
    result
}
