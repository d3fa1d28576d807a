//! Data models for reading plans and participants.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping presentation apart from the data.
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use khatma_core::models::{BookKind, Participant, PlanStatus, ReadingPlan};
//! use uuid::Uuid;
//!
//! let plan = ReadingPlan {
//!     id: Uuid::new_v4(),
//!     book: BookKind::FixedWork,
//!     total_pages: 602,
//!     participants: vec![Participant {
//!         id: Uuid::new_v4(),
//!         name: "Amina".to_string(),
//!         start_page: 1,
//!         end_page: 602,
//!         pages_per_day: 21,
//!         progress: 0.0,
//!     }],
//!     start_date: date(2024, 3, 1),
//!     end_date: date(2024, 3, 31),
//!     created_by: "1".to_string(),
//!     status: PlanStatus::Active,
//!     progress: 0.0,
//! };
//! assert_eq!(plan.days_remaining(date(2024, 3, 21)), 10);
//! ```

pub mod book;
pub mod filters;
pub mod participant;
pub mod plan;
pub mod status;
pub mod summary;

#[cfg(test)]
mod tests;

pub use book::{BookKind, FIXED_WORK_PAGES};
pub use filters::PlanFilter;
pub use participant::Participant;
pub use plan::ReadingPlan;
pub use status::PlanStatus;
pub use summary::DashboardStats;
