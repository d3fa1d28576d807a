//! Display formatting for plans and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly; newtype wrappers
//! add context such as the display [`Language`](crate::locale::Language) and
//! the date that "days remaining" is counted from. All output is markdown,
//! rendered by the CLI's terminal renderer.
//!
//! - [`models`]: `PlanCard`, `PlanDetails` and per-model impls
//! - [`collections`]: `PlanCards` lists and the `DashboardView`
//! - [`results`]: create/progress/archive/delete confirmations
//! - [`status`]: one-line `OperationStatus` messages
//! - [`datetime`]: calendar date formatting

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

#[cfg(test)]
mod tests;

pub use collections::{DashboardView, PlanCards};
pub use datetime::{today, CalendarDate};
pub use models::{Countdown, ParticipantLine, PlanCard, PlanDetails};
pub use results::{ArchiveResult, CreateResult, DeleteResult, ProgressResult};
pub use status::OperationStatus;
