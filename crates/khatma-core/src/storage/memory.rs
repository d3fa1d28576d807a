//! In-memory snapshot store.

use std::collections::HashMap;

use super::SnapshotStore;
use crate::error::Result;

/// A [`SnapshotStore`] backed by a `HashMap`, not persisted across
/// restarts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    documents: HashMap<String, String>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one document.
    pub fn with_document(key: &str, document: impl Into<String>) -> Self {
        let mut storage = Self::default();
        storage.documents.insert(key.to_string(), document.into());
        storage
    }

    /// The raw document stored under `key`.
    pub fn document(&self, key: &str) -> Option<&str> {
        self.documents.get(key).map(String::as_str)
    }

    /// Number of `save` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl SnapshotStore for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.documents.get(key).cloned())
    }

    fn save(&mut self, key: &str, document: &str) -> Result<()> {
        self.documents.insert(key.to_string(), document.to_string());
        self.writes += 1;
        Ok(())
    }
}
