//! Core library for Khatma, a shared reading plan tracker.
//!
//! A reading plan divides a book (the Quran, or any custom book) among a
//! group of participants. Each participant receives a contiguous page range
//! and a daily quota; progress is recorded per participant and averaged into
//! the plan's progress, which completes the plan when it reaches 100%.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): plain data with serde derives and
//!   [`std::fmt::Display`] impls
//! - **Display Wrappers** ([`display`]): cards, details, dashboard and
//!   operation results, localized through [`locale::Language`]
//! - **Terminal Rendering**: markdown output rendered by the CLI
//!
//! # Quick Start
//!
//! ```rust
//! use khatma_core::{
//!     models::{BookKind, PlanFilter, PlanStatus},
//!     params::{CreatePlan, UpdateProgress},
//!     MemoryStorage, PlanStore,
//! };
//!
//! let mut store = PlanStore::open(MemoryStorage::new())?;
//!
//! let plan = store.create_plan(&CreatePlan {
//!     book: BookKind::FixedWork,
//!     total_pages: None,
//!     days: 30,
//!     participant_names: vec!["Amina".to_string(), "Bilal".to_string()],
//!     owner_id: "1".to_string(),
//!     start_date: None,
//! })?;
//! assert_eq!(plan.participants[1].end_page, 602);
//!
//! for participant in &plan.participants {
//!     store.update_progress(&UpdateProgress {
//!         plan_id: plan.id,
//!         participant_id: participant.id,
//!         pages_read: participant.range_width(),
//!     })?;
//! }
//!
//! let completed = store.list_plans(&PlanFilter::for_owner("1", Some(PlanStatus::Completed)));
//! assert_eq!(completed.len(), 1);
//! # Ok::<(), khatma_core::KhatmaError>(())
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod locale;
pub mod models;
pub mod params;
pub mod schedule;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    ArchiveResult, CreateResult, DashboardView, DeleteResult, OperationStatus, PlanCards,
    PlanDetails, ProgressResult,
};
pub use error::{KhatmaError, Result};
pub use locale::Language;
pub use models::{BookKind, DashboardStats, Participant, PlanFilter, PlanStatus, ReadingPlan};
pub use params::{CreatePlan, DeletePlan, Id, ListPlans, UpdateProgress};
pub use storage::{MemoryStorage, SnapshotStore};
pub use store::{PlanStore, PlanStoreBuilder};
