//! Display implementations for domain models.
//!
//! Plans render in two shapes: a compact [`PlanCard`] for lists and the
//! dashboard, and a full [`PlanDetails`] with the participant list. Both
//! carry the display language and the date used for "days remaining".

use std::fmt;

use jiff::civil::Date;

use super::datetime::{today, CalendarDate};
use crate::{
    locale::Language,
    models::{BookKind, Participant, PlanStatus, ReadingPlan},
};

/// First eight hex digits of an id, enough to address it from the CLI.
pub fn short_id(id: &uuid::Uuid) -> String {
    id.simple().to_string()[..8].to_string()
}

/// Rounded percentage, as shown next to progress bars.
pub fn percent(progress: f64) -> i64 {
    progress.round() as i64
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for BookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Localized "N days remaining" / "Plan ended" line.
pub struct Countdown<'a> {
    pub plan: &'a ReadingPlan,
    pub today: Date,
    pub lang: Language,
}

impl fmt::Display for Countdown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days_left = self.plan.days_remaining(self.today);
        if days_left > 0 {
            write!(
                f,
                "{days_left} {}",
                self.lang.pick("days remaining", "jours restants")
            )
        } else {
            write!(f, "{}", self.lang.pick("Plan ended", "Plan terminé"))
        }
    }
}

/// Compact card for one plan.
pub struct PlanCard<'a> {
    pub plan: &'a ReadingPlan,
    pub today: Date,
    pub lang: Language,
}

impl<'a> PlanCard<'a> {
    pub fn new(plan: &'a ReadingPlan, today: Date, lang: Language) -> Self {
        Self { plan, today, lang }
    }
}

impl fmt::Display for PlanCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.plan;
        let lang = self.lang;

        writeln!(f, "### {} ({})", plan.title(lang), short_id(&plan.id))?;
        writeln!(f)?;
        writeln!(
            f,
            "- {} {}",
            lang.pick("Created on", "Créé le"),
            CalendarDate(&plan.start_date)
        )?;
        writeln!(f, "- {} participants", plan.participants.len())?;
        writeln!(
            f,
            "- {}: {}%",
            lang.pick("Progress", "Progrès"),
            percent(plan.progress)
        )?;
        if plan.status != PlanStatus::Active {
            writeln!(f, "- {}", plan.status.with_icon(lang))?;
        }
        writeln!(
            f,
            "- {}",
            Countdown {
                plan,
                today: self.today,
                lang,
            }
        )?;
        writeln!(f)?;

        Ok(())
    }
}

/// One participant line: name, range, quota and progress.
pub struct ParticipantLine<'a> {
    pub participant: &'a Participant,
    pub lang: Language,
}

impl fmt::Display for ParticipantLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.participant;
        write!(
            f,
            "- **{}** ({}): Pages {}-{} ({} {}), {}/{} {}, {}%",
            p.name,
            short_id(&p.id),
            p.start_page,
            p.end_page,
            p.pages_per_day,
            self.lang.pick("pages/day", "pages/jour"),
            p.pages_read_estimate(),
            p.range_width(),
            self.lang.pick("read", "lues"),
            percent(p.progress)
        )?;
        if p.is_finished() {
            write!(f, " ✓")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            ParticipantLine {
                participant: self,
                lang: Language::English,
            }
        )
    }
}

/// Full view of a plan with its participants.
pub struct PlanDetails<'a> {
    pub plan: &'a ReadingPlan,
    pub today: Date,
    pub lang: Language,
}

impl<'a> PlanDetails<'a> {
    pub fn new(plan: &'a ReadingPlan, today: Date, lang: Language) -> Self {
        Self { plan, today, lang }
    }
}

impl fmt::Display for PlanDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.plan;
        let lang = self.lang;

        writeln!(f, "# {}", plan.title(lang))?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", plan.id)?;
        writeln!(
            f,
            "- {}: {}",
            lang.pick("Status", "Statut"),
            plan.status.with_icon(lang)
        )?;
        writeln!(f, "- Pages: {}", plan.total_pages)?;
        writeln!(
            f,
            "- Dates: {} → {}",
            CalendarDate(&plan.start_date),
            CalendarDate(&plan.end_date)
        )?;
        writeln!(
            f,
            "- {}: {}%",
            lang.pick("Progress", "Progrès"),
            percent(plan.progress)
        )?;
        writeln!(
            f,
            "- {}",
            Countdown {
                plan,
                today: self.today,
                lang,
            }
        )?;

        writeln!(f, "\n## Participants")?;
        writeln!(f)?;
        for participant in &plan.participants {
            write!(f, "{}", ParticipantLine { participant, lang })?;
        }

        Ok(())
    }
}

impl fmt::Display for ReadingPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", PlanDetails::new(self, today(), Language::English))
    }
}
