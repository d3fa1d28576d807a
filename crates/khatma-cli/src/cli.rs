//! Command-line argument wrappers using clap
//!
//! Each subcommand has its own clap `Args` struct that converts into the
//! matching core parameter type, so the core stays free of clap derives:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → PlanStore
//! ```
//!
//! Plans and participants are referenced by string on the command line (a
//! full id, an id prefix, or a participant name). Those references are
//! resolved by the handlers, not here.

use clap::{Args, Subcommand, ValueEnum};
use jiff::civil::Date;
use khatma_core::{
    models::{BookKind, PlanStatus},
    params::{CreatePlan, ListPlans},
};

/// Which kind of book a plan covers
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BookArg {
    /// The Quran (602 pages unless --pages is given)
    Quran,
    /// Any other book; requires --name and --pages
    Custom,
}

/// Plan status filter
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Active,
    Completed,
    Archived,
}

impl From<StatusArg> for PlanStatus {
    fn from(val: StatusArg) -> Self {
        match val {
            StatusArg::Active => PlanStatus::Active,
            StatusArg::Completed => PlanStatus::Completed,
            StatusArg::Archived => PlanStatus::Archived,
        }
    }
}

/// Create a new reading plan
///
/// Pages are split evenly in the order participants are given; the last
/// participant also takes any remainder.
#[derive(Args)]
pub struct CreatePlanArgs {
    #[arg(long, value_enum, default_value_t = BookArg::Quran)]
    pub book: BookArg,
    /// Name of the book (custom books only)
    #[arg(short, long)]
    pub name: Option<String>,
    /// Total number of pages to divide
    #[arg(long)]
    pub pages: Option<u32>,
    /// Number of days to finish the book in
    #[arg(long)]
    pub days: u32,
    /// Participant names as a comma-separated list
    #[arg(long, value_delimiter = ',', required = true)]
    pub participants: Vec<String>,
    /// First day of the plan (YYYY-MM-DD), today by default
    #[arg(long)]
    pub start: Option<Date>,
}

impl CreatePlanArgs {
    /// Convert to core parameters on behalf of `owner_id`.
    pub fn into_params(self, owner_id: String) -> CreatePlan {
        let book = match self.book {
            BookArg::Quran => BookKind::FixedWork,
            BookArg::Custom => BookKind::CustomWork {
                name: self.name.unwrap_or_default(),
            },
        };

        CreatePlan {
            book,
            total_pages: self.pages,
            days: self.days,
            participant_names: self.participants,
            owner_id,
            start_date: self.start,
        }
    }
}

/// List your plans
///
/// Shows active plans by default. Use --status to pick a status, or --all
/// to list every plan.
#[derive(Args)]
pub struct ListPlansArgs {
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,
    /// List plans in every status
    #[arg(long)]
    pub all: bool,
}

impl ListPlansArgs {
    pub fn into_params(self, owner_id: String) -> ListPlans {
        ListPlans {
            owner: Some(owner_id),
            status: self.status.map(PlanStatus::from),
            all: self.all,
        }
    }
}

/// A plan reference
#[derive(Args)]
pub struct PlanRefArgs {
    /// Plan ID or a unique prefix of it
    pub plan: String,
}

/// Delete a plan permanently
#[derive(Args)]
pub struct DeletePlanArgs {
    /// Plan ID or a unique prefix of it
    pub plan: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

/// Record reading progress
///
/// Progress is the number of pages read within the participant's own range.
/// Values past the end of the range count as finished.
#[derive(Args)]
pub struct ProgressArgs {
    /// Plan ID or a unique prefix of it
    pub plan: String,
    /// Participant name, ID, or a unique ID prefix
    pub participant: String,
    /// Pages read so far within the participant's range
    pub pages_read: u32,
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a new reading plan
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// List your plans
    #[command(aliases = ["l", "ls"])]
    List(ListPlansArgs),
    /// Show a plan and its participants
    #[command(alias = "s")]
    Show(PlanRefArgs),
    /// Archive a plan
    #[command(alias = "a")]
    Archive(PlanRefArgs),
    /// Delete a plan permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePlanArgs),
}
