//! Read-only catalog source.
//!
//! The catalog is owned and updated outside the engine. The engine
//! takes a fresh snapshot on every candidate request instead of
//! caching, so additions, removals and price changes between calls are
//! always reflected.

use crate::catalog::Part;
use crate::ids::PartId;

/// A read-only supplier of the current catalog.
///
/// Implementations may be backed by a static list, a database or a live
/// feed; the engine only ever pulls snapshots.
pub trait CatalogSource {
    /// Current catalog snapshot, in catalog order.
    fn parts(&self) -> Vec<Part>;

    /// Look up a part by ID in the current snapshot.
    fn find(&self, id: &PartId) -> Option<Part> {
        self.parts().into_iter().find(|p| &p.id == id)
    }
}

/// An in-memory catalog, useful as the default source and in tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    parts: Vec<Part>,
}

impl InMemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from an initial list of parts.
    pub fn with_parts(parts: Vec<Part>) -> Self {
        Self { parts }
    }

    /// Add a part to the end of the catalog.
    pub fn push(&mut self, part: Part) {
        self.parts.push(part);
    }

    /// Replace the whole catalog, modelling an external refresh.
    pub fn replace(&mut self, parts: Vec<Part>) {
        self.parts = parts;
    }

    /// Remove a part by ID. Returns true if a part was removed.
    pub fn remove(&mut self, id: &PartId) -> bool {
        let len_before = self.parts.len();
        self.parts.retain(|p| &p.id != id);
        self.parts.len() < len_before
    }

    /// Number of parts in the catalog.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl CatalogSource for InMemoryCatalog {
    fn parts(&self) -> Vec<Part> {
        self.parts.clone()
    }
}
