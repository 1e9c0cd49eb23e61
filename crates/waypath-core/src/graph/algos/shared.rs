use crate::graph::types::LocationId;

/// Walk parent pointers upward from `start`, nearest ancestor first.
/// The chain ends at the first location without a parent.
pub fn ancestor_chain(parents: &[Option<LocationId>], start: LocationId) -> Vec<LocationId> {
    let mut chain = Vec::new();
    let mut current = parents[start];
    while let Some(parent) = current {
        chain.push(parent);
        current = parents[parent];
    }
    chain
}
