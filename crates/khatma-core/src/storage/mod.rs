//! Persistence port for the plan collection.
//!
//! The store keeps the whole collection in memory and hands a serialized
//! snapshot to a [`SnapshotStore`] after every mutation. Implementations
//! only need to load and overwrite one document per key:
//!
//! - [`crate::db::Database`]: durable SQLite-backed blob store
//! - [`MemoryStorage`]: in-process map, for tests and dry runs

use serde::{Deserialize, Serialize};

use crate::{error::Result, models::ReadingPlan};

pub mod memory;

pub use memory::MemoryStorage;

/// Fixed key the plan collection is stored under.
pub const STORAGE_KEY: &str = "reading-plan-storage";

/// A durable key-value store holding whole documents.
pub trait SnapshotStore {
    /// Returns the document stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the document stored under `key`.
    fn save(&mut self, key: &str, document: &str) -> Result<()>;
}

/// Serialized form of the plan collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlanDocument {
    #[serde(default)]
    pub plans: Vec<ReadingPlan>,
}

impl PlanDocument {
    /// Parses a stored document.
    pub fn from_json(document: &str) -> Result<Self> {
        Ok(serde_json::from_str(document)?)
    }

    /// Serializes borrowed plans in the document layout.
    pub fn encode(plans: &[ReadingPlan]) -> Result<String> {
        #[derive(Serialize)]
        struct Borrowed<'a> {
            plans: &'a [ReadingPlan],
        }

        Ok(serde_json::to_string(&Borrowed { plans })?)
    }
}
