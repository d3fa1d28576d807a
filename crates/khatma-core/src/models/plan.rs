//! Reading plan model definition and related functionality.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{BookKind, Participant, PlanStatus};
use crate::{
    error::{KhatmaError, Result},
    locale::Language,
    schedule,
};

/// A book divided among participants over a fixed window of days.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReadingPlan {
    /// Unique identifier for the plan
    pub id: Uuid,

    /// Which book is being read
    #[serde(flatten)]
    pub book: BookKind,

    /// Total number of pages divided among participants
    pub total_pages: u32,

    /// Participants in partition order
    pub participants: Vec<Participant>,

    /// First day of the plan (local calendar date)
    pub start_date: Date,

    /// Last day of the plan, `start_date + days`
    pub end_date: Date,

    /// Identifier of the owning user
    pub created_by: String,

    /// Current status of the plan
    #[serde(default)]
    pub status: PlanStatus,

    /// Mean of participant progress, in `[0, 100]`
    pub progress: f64,
}

impl ReadingPlan {
    /// Heading for the plan in the given language.
    pub fn title(&self, lang: Language) -> String {
        self.book.title(lang)
    }

    /// Whole days between `today` and the end date. Zero or negative means
    /// the window has closed.
    pub fn days_remaining(&self, today: Date) -> i64 {
        today
            .until(self.end_date)
            .map(|span| i64::from(span.get_days()))
            .unwrap_or(0)
    }

    /// Length of the plan's window in days.
    pub fn duration_days(&self) -> i64 {
        self.start_date
            .until(self.end_date)
            .map(|span| i64::from(span.get_days()))
            .unwrap_or(0)
    }

    /// Looks up a participant by id.
    pub fn participant(&self, id: Uuid) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// Resolves a participant reference: a full id, a unique id prefix, or
    /// a case-insensitive name.
    ///
    /// Returns `Ok(None)` when nothing matches and an `InvalidInput` error
    /// when the reference matches more than one participant.
    pub fn find_participant(&self, reference: &str) -> Result<Option<Uuid>> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Ok(None);
        }

        if let Ok(id) = reference.parse::<Uuid>() {
            return Ok(self.participant(id).map(|p| p.id));
        }

        let by_name: Vec<Uuid> = self
            .participants
            .iter()
            .filter(|p| p.name.eq_ignore_ascii_case(reference))
            .map(|p| p.id)
            .collect();

        let candidates = if by_name.is_empty() {
            let Some(prefix) = id_prefix(reference) else {
                return Ok(None);
            };
            self.participants
                .iter()
                .filter(|p| p.id.simple().to_string().starts_with(&prefix))
                .map(|p| p.id)
                .collect()
        } else {
            by_name
        };

        match candidates.as_slice() {
            [] => Ok(None),
            [id] => Ok(Some(*id)),
            _ => Err(KhatmaError::invalid_input("participant").with_reason(format!(
                "'{reference}' matches {} participants; use a longer id",
                candidates.len()
            ))),
        }
    }

    /// Recomputes `progress` from the participants and promotes an active
    /// plan to `Completed` when it reaches exactly 100.
    ///
    /// Archived plans keep their status. A completed plan never reverts.
    pub(crate) fn recompute_progress(&mut self) {
        self.progress = schedule::mean_progress(self.participants.iter().map(|p| p.progress));

        if self.progress == 100.0 && self.status == PlanStatus::Active {
            self.status = PlanStatus::Completed;
        }
    }
}

/// Lowercase, unhyphenated form of an id prefix. `None` when nothing is left.
pub(crate) fn id_prefix(reference: &str) -> Option<String> {
    let prefix: String = reference
        .chars()
        .filter(|c| *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect();
    (!prefix.is_empty()).then_some(prefix)
}
