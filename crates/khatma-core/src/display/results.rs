//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use jiff::civil::Date;
use uuid::Uuid;

use super::{
    datetime::today,
    models::{percent, PlanDetails},
};
use crate::{
    locale::Language,
    models::{PlanStatus, ReadingPlan},
};

/// Wrapper type for displaying a newly created plan.
pub struct CreateResult<T> {
    pub resource: T,
    pub lang: Language,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            lang: Language::default(),
        }
    }

    pub fn in_language(mut self, lang: Language) -> Self {
        self.lang = lang;
        self
    }
}

impl fmt::Display for CreateResult<ReadingPlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: {}",
            self.lang.pick("Created plan with ID", "Plan créé avec l'ID"),
            self.resource.id
        )?;
        writeln!(f)?;
        write!(f, "{}", PlanDetails::new(&self.resource, today(), self.lang))
    }
}

/// Wrapper type for displaying a recorded progress update.
///
/// ```rust
/// use jiff::civil::date;
/// use khatma_core::{
///     display::ProgressResult,
///     models::{BookKind, Participant, PlanStatus, ReadingPlan},
/// };
/// use uuid::Uuid;
///
/// let participant = Participant {
///     id: Uuid::new_v4(),
///     name: "B".to_string(),
///     start_page: 101,
///     end_page: 200,
///     pages_per_day: 10,
///     progress: 100.0,
/// };
/// let plan = ReadingPlan {
///     id: Uuid::new_v4(),
///     book: BookKind::CustomWork { name: "Novel".to_string() },
///     total_pages: 200,
///     participants: vec![participant.clone()],
///     start_date: date(2024, 3, 1),
///     end_date: date(2024, 3, 11),
///     created_by: "u1".to_string(),
///     status: PlanStatus::Completed,
///     progress: 100.0,
/// };
///
/// let output = ProgressResult::new(plan, participant.id).to_string();
/// assert!(output.contains("Recorded progress for B: 100%"));
/// assert!(output.contains("Plan completed!"));
/// ```
pub struct ProgressResult {
    pub plan: ReadingPlan,
    pub participant_id: Uuid,
    pub lang: Language,
    pub today: Date,
}

impl ProgressResult {
    pub fn new(plan: ReadingPlan, participant_id: Uuid) -> Self {
        Self {
            plan,
            participant_id,
            lang: Language::default(),
            today: today(),
        }
    }

    pub fn in_language(mut self, lang: Language) -> Self {
        self.lang = lang;
        self
    }
}

impl fmt::Display for ProgressResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lang = self.lang;

        if let Some(participant) = self.plan.participant(self.participant_id) {
            writeln!(
                f,
                "{} {}: {}%",
                lang.pick("Recorded progress for", "Progrès enregistré pour"),
                participant.name,
                percent(participant.progress)
            )?;
        }
        writeln!(
            f,
            "{}: {}%",
            lang.pick("Plan progress", "Progrès du plan"),
            percent(self.plan.progress)
        )?;
        if self.plan.status == PlanStatus::Completed {
            writeln!(f, "{}", lang.pick("Plan completed!", "Plan terminé !"))?;
        }
        writeln!(f)?;
        write!(f, "{}", PlanDetails::new(&self.plan, self.today, lang))
    }
}

/// Wrapper type for displaying the result of archive operations.
pub struct ArchiveResult {
    pub resource: ReadingPlan,
    pub lang: Language,
}

impl ArchiveResult {
    pub fn new(resource: ReadingPlan) -> Self {
        Self {
            resource,
            lang: Language::default(),
        }
    }

    pub fn in_language(mut self, lang: Language) -> Self {
        self.lang = lang;
        self
    }
}

impl fmt::Display for ArchiveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: {} ({})",
            self.lang.pick("Archived plan", "Plan archivé"),
            self.resource.title(self.lang),
            self.resource.id
        )
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
    pub lang: Language,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            lang: Language::default(),
        }
    }

    pub fn in_language(mut self, lang: Language) -> Self {
        self.lang = lang;
        self
    }
}

impl fmt::Display for DeleteResult<ReadingPlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: {} ({})",
            self.lang.pick("Deleted plan", "Plan supprimé"),
            self.resource.title(self.lang),
            self.resource.id
        )?;
        writeln!(
            f,
            "{} {} participants.",
            self.lang.pick("Removed", "Supprimés :"),
            self.resource.participants.len()
        )
    }
}
