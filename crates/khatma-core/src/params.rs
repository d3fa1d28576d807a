//! Parameter structures for khatma operations
//!
//! These structures are shared by every front end and carry no
//! framework-specific derives. The CLI defines its own clap wrappers and
//! converts them with `From` impls:
//!
//! ```text
//! CLI Args (clap) → Core Params → PlanStore
//! ```

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::{KhatmaError, Result},
    models::{BookKind, PlanStatus},
};

/// Generic parameters for operations requiring just a plan ID.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the plan to operate on
    pub id: Uuid,
}

/// Parameters for creating a new reading plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlan {
    /// Which book to read. The name inside `CustomWork` is trimmed and
    /// must not be empty.
    pub book: BookKind,
    /// Total pages. Defaults to the book's fixed length when omitted.
    pub total_pages: Option<u32>,
    /// Number of days the plan runs for (at least 1)
    pub days: u32,
    /// Participant names in partition order; blank entries are dropped
    pub participant_names: Vec<String>,
    /// Identifier of the user creating the plan
    pub owner_id: String,
    /// First day of the plan, today when omitted
    #[serde(default)]
    pub start_date: Option<Date>,
}

/// Creation input after validation, ready to be partitioned.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedPlan {
    pub book: BookKind,
    pub total_pages: u32,
    pub days: u32,
    pub participant_names: Vec<String>,
    pub owner_id: String,
}

impl CreatePlan {
    /// Validate creation input and normalize it.
    ///
    /// # Errors
    ///
    /// Returns `KhatmaError::InvalidPlanSpec` naming the first offending
    /// field.
    ///
    /// ```rust
    /// use khatma_core::{models::BookKind, params::CreatePlan};
    ///
    /// let params = CreatePlan {
    ///     book: BookKind::FixedWork,
    ///     total_pages: None,
    ///     days: 30,
    ///     participant_names: vec![" Amina ".to_string(), "".to_string()],
    ///     owner_id: "1".to_string(),
    ///     start_date: None,
    /// };
    /// let validated = params.validate()?;
    /// assert_eq!(validated.total_pages, 602);
    /// assert_eq!(validated.participant_names, vec!["Amina".to_string()]);
    /// # Ok::<(), khatma_core::KhatmaError>(())
    /// ```
    pub fn validate(&self) -> Result<ValidatedPlan> {
        let book = match &self.book {
            BookKind::FixedWork => BookKind::FixedWork,
            BookKind::CustomWork { name } => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(KhatmaError::invalid_spec("book_name")
                        .with_reason("Book name is required for a custom book"));
                }
                BookKind::CustomWork {
                    name: name.to_string(),
                }
            }
        };

        let total_pages = self
            .total_pages
            .or_else(|| book.default_pages())
            .ok_or_else(|| {
                KhatmaError::invalid_spec("total_pages")
                    .with_reason("Total pages is required for a custom book")
            })?;
        if total_pages < 1 {
            return Err(
                KhatmaError::invalid_spec("total_pages").with_reason("Must be at least 1 page")
            );
        }

        if self.days < 1 {
            return Err(KhatmaError::invalid_spec("days").with_reason("Must be at least 1 day"));
        }

        let participant_names: Vec<String> = self
            .participant_names
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect();

        if participant_names.is_empty() {
            return Err(KhatmaError::invalid_spec("participant_names")
                .with_reason("At least one participant is required"));
        }

        if participant_names.len() > total_pages as usize {
            return Err(KhatmaError::invalid_spec("participant_names").with_reason(format!(
                "{} participants cannot share {total_pages} pages",
                participant_names.len()
            )));
        }

        Ok(ValidatedPlan {
            book,
            total_pages,
            days: self.days,
            participant_names,
            owner_id: self.owner_id.clone(),
        })
    }
}

/// Parameters for recording how far a participant has read.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UpdateProgress {
    /// Plan the participant belongs to
    pub plan_id: Uuid,
    /// Participant whose progress changes
    pub participant_id: Uuid,
    /// Pages read within the participant's range
    pub pages_read: u32,
}

/// Parameters for permanently deleting a plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeletePlan {
    /// The ID of the plan to delete
    pub id: Uuid,
    /// Explicit confirmation, required to proceed
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for listing plans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPlans {
    /// Only plans owned by this user
    #[serde(default)]
    pub owner: Option<String>,
    /// Only plans in this status
    #[serde(default)]
    pub status: Option<PlanStatus>,
    /// List every status when no status is given (otherwise active only)
    #[serde(default)]
    pub all: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(name: &str, pages: Option<u32>, days: u32, names: &[&str]) -> CreatePlan {
        CreatePlan {
            book: BookKind::CustomWork {
                name: name.to_string(),
            },
            total_pages: pages,
            days,
            participant_names: names.iter().map(|&n| n.to_string()).collect(),
            owner_id: "u1".to_string(),
            start_date: None,
        }
    }

    #[test]
    fn test_validate_custom_plan() {
        let validated = custom("  Novel ", Some(300), 10, &["A", " B ", "C"])
            .validate()
            .expect("valid plan");
        assert_eq!(
            validated.book,
            BookKind::CustomWork {
                name: "Novel".to_string()
            }
        );
        assert_eq!(validated.total_pages, 300);
        assert_eq!(validated.participant_names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_fixed_work_accepts_page_override() {
        let mut params = custom("", None, 30, &["A"]);
        params.book = BookKind::FixedWork;
        params.total_pages = Some(604);
        assert_eq!(params.validate().unwrap().total_pages, 604);
    }

    #[test]
    fn test_rejects_blank_custom_name() {
        let err = custom("   ", Some(10), 1, &["A"]).validate().unwrap_err();
        assert_eq!(err.field(), Some("book_name"));
    }

    #[test]
    fn test_rejects_missing_custom_pages() {
        let err = custom("Novel", None, 1, &["A"]).validate().unwrap_err();
        assert_eq!(err.field(), Some("total_pages"));
    }

    #[test]
    fn test_rejects_zero_pages_and_days() {
        let err = custom("Novel", Some(0), 1, &["A"]).validate().unwrap_err();
        assert_eq!(err.field(), Some("total_pages"));

        let err = custom("Novel", Some(10), 0, &["A"]).validate().unwrap_err();
        assert_eq!(err.field(), Some("days"));
    }

    #[test]
    fn test_rejects_empty_participants_after_trim() {
        let err = custom("Novel", Some(10), 1, &["", "  "]).validate().unwrap_err();
        assert_eq!(err.field(), Some("participant_names"));
    }

    #[test]
    fn test_rejects_more_participants_than_pages() {
        let err = custom("Pamphlet", Some(2), 1, &["A", "B", "C"])
            .validate()
            .unwrap_err();
        assert!(matches!(err, KhatmaError::InvalidPlanSpec { .. }));
        assert_eq!(err.field(), Some("participant_names"));
    }
}
