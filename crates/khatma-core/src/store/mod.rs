//! The plan store: owns the plan collection and enforces its arithmetic.
//!
//! [`PlanStore`] keeps every [`ReadingPlan`] in memory, in creation order,
//! and writes the whole collection through a [`SnapshotStore`] after each
//! mutation. It is synchronous and single-threaded; mutations take
//! `&mut self`.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Front ends    │    │   PlanStore     │    │  SnapshotStore  │
//! │  (CLI, tests)   │───▶│ (plan_ops,      │───▶│ (Database,      │
//! │                 │    │  progress_ops)  │    │  MemoryStorage) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Operations on a plan or participant that does not exist are no-ops and
//! return `Ok(None)`.
//!
//! # Example
//!
//! ```rust
//! use khatma_core::{
//!     models::BookKind,
//!     params::{CreatePlan, UpdateProgress},
//!     storage::MemoryStorage,
//!     PlanStore,
//! };
//!
//! let mut store = PlanStore::open(MemoryStorage::new())?;
//! let plan = store.create_plan(&CreatePlan {
//!     book: BookKind::CustomWork { name: "Novel".to_string() },
//!     total_pages: Some(300),
//!     days: 10,
//!     participant_names: vec!["A".into(), "B".into(), "C".into()],
//!     owner_id: "u1".to_string(),
//!     start_date: None,
//! })?;
//!
//! let updated = store
//!     .update_progress(&UpdateProgress {
//!         plan_id: plan.id,
//!         participant_id: plan.participants[1].id,
//!         pages_read: 100,
//!     })?
//!     .expect("plan exists");
//! assert!((updated.progress - 33.33).abs() < 0.01);
//! # Ok::<(), khatma_core::KhatmaError>(())
//! ```

use log::{debug, warn};
use uuid::Uuid;

use crate::{
    error::{KhatmaError, Result},
    models::{plan::id_prefix, DashboardStats, PlanFilter, ReadingPlan},
    storage::{PlanDocument, SnapshotStore, STORAGE_KEY},
};

pub mod builder;
pub mod plan_ops;
pub mod progress_ops;


pub use builder::PlanStoreBuilder;

/// Repository of reading plans over a persistence port.
pub struct PlanStore<S: SnapshotStore> {
    storage: S,
    plans: Vec<ReadingPlan>,
}

impl<S: SnapshotStore> PlanStore<S> {
    /// Opens the store, loading the persisted collection.
    ///
    /// A missing document yields an empty store. A malformed one is logged
    /// and ignored; it is overwritten by the next mutation.
    pub fn open(storage: S) -> Result<Self> {
        let plans = match storage.load(STORAGE_KEY)? {
            None => Vec::new(),
            Some(raw) => match PlanDocument::from_json(&raw) {
                Ok(document) => document.plans,
                Err(e) => {
                    warn!("Ignoring unreadable plan snapshot: {e}");
                    Vec::new()
                }
            },
        };

        debug!("Loaded {} plan(s)", plans.len());
        Ok(Self { storage, plans })
    }

    /// All plans, in creation order.
    pub fn plans(&self) -> &[ReadingPlan] {
        &self.plans
    }

    /// Retrieves a plan by its ID.
    pub fn get_plan(&self, id: Uuid) -> Option<&ReadingPlan> {
        self.plans.iter().find(|plan| plan.id == id)
    }

    /// Plans passing the filter, in creation order.
    pub fn list_plans(&self, filter: &PlanFilter) -> Vec<&ReadingPlan> {
        self.plans.iter().filter(|plan| filter.matches(plan)).collect()
    }

    /// Dashboard statistics over one owner's plans.
    pub fn dashboard(&self, owner_id: &str) -> DashboardStats {
        DashboardStats::from_plans(self.plans.iter().filter(|plan| plan.created_by == owner_id))
    }

    /// Resolves a plan reference: a full id or a unique id prefix.
    ///
    /// # Errors
    ///
    /// Returns `KhatmaError::InvalidInput` when a prefix matches more than
    /// one plan.
    pub fn resolve_plan_id(&self, reference: &str) -> Result<Option<Uuid>> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Ok(None);
        }

        if let Ok(id) = reference.parse::<Uuid>() {
            return Ok(self.get_plan(id).map(|plan| plan.id));
        }

        let Some(prefix) = id_prefix(reference) else {
            return Ok(None);
        };
        let matches: Vec<Uuid> = self
            .plans
            .iter()
            .map(|plan| plan.id)
            .filter(|id| id.simple().to_string().starts_with(&prefix))
            .collect();

        match matches.as_slice() {
            [] => Ok(None),
            [id] => Ok(Some(*id)),
            _ => Err(KhatmaError::invalid_input("plan").with_reason(format!(
                "'{reference}' matches {} plans; use a longer id",
                matches.len()
            ))),
        }
    }

    /// The underlying persistence port.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consumes the store, returning the persistence port.
    pub fn into_storage(self) -> S {
        self.storage
    }

    pub(crate) fn plan_mut(&mut self, id: Uuid) -> Option<&mut ReadingPlan> {
        self.plans.iter_mut().find(|plan| plan.id == id)
    }

    /// Writes the whole collection through to storage.
    pub(crate) fn persist(&mut self) -> Result<()> {
        let document = PlanDocument::encode(&self.plans)?;
        self.storage.save(STORAGE_KEY, &document)
    }
}
