//! Location registry
//!
//! Maps location names to dense identifiers assigned in first-seen order.
//! Identifiers are never reused or reassigned.

use crate::graph::types::LocationId;

/// Name <-> identifier mapping for every location in a graph
#[derive(Debug, Clone, Default)]
pub struct LocationRegistry {
    names: Vec<String>,
}

impl LocationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name`, returning its existing identifier if already present
    pub fn register(&mut self, name: &str) -> LocationId {
        if let Some(id) = self.lookup(name) {
            return id;
        }
        let id = self.names.len();
        self.names.push(name.to_string());
        tracing::trace!(name, id, "registered location");
        id
    }

    /// Exact, case-sensitive lookup
    pub fn lookup(&self, name: &str) -> Option<LocationId> {
        self.names.iter().position(|n| n == name)
    }

    /// Name of a registered location.
    ///
    /// # Panics
    /// If `id` was not issued by this registry.
    pub fn name_of(&self, id: LocationId) -> &str {
        &self.names[id]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Registered names in identifier order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
