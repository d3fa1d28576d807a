//! Collection wrapper types for displaying lists of plans.

use std::fmt;

use jiff::civil::Date;

use super::models::{percent, PlanCard};
use crate::{
    locale::Language,
    models::{DashboardStats, ReadingPlan},
};

/// Newtype wrapper for a list of plans rendered as cards.
///
/// ```rust
/// use jiff::civil::date;
/// use khatma_core::{display::PlanCards, locale::Language};
///
/// let empty = PlanCards::new(Vec::new(), date(2024, 3, 1), Language::French);
/// assert_eq!(format!("{empty}"), "Aucun plan trouvé.\n");
/// ```
pub struct PlanCards<'a> {
    pub plans: Vec<&'a ReadingPlan>,
    pub today: Date,
    pub lang: Language,
}

impl<'a> PlanCards<'a> {
    pub fn new(plans: Vec<&'a ReadingPlan>, today: Date, lang: Language) -> Self {
        Self { plans, today, lang }
    }
}

impl fmt::Display for PlanCards<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.plans.is_empty() {
            return writeln!(f, "{}", self.lang.pick("No plans found.", "Aucun plan trouvé."));
        }

        for plan in &self.plans {
            write!(f, "{}", PlanCard::new(plan, self.today, self.lang))?;
        }
        Ok(())
    }
}

/// The dashboard: greeting, headline figures, then plans by status.
pub struct DashboardView<'a> {
    pub user: &'a str,
    pub stats: DashboardStats,
    pub active: Vec<&'a ReadingPlan>,
    pub completed: Vec<&'a ReadingPlan>,
    pub archived: Vec<&'a ReadingPlan>,
    pub today: Date,
    pub lang: Language,
}

impl DashboardView<'_> {
    fn section(
        &self,
        f: &mut fmt::Formatter<'_>,
        heading: &str,
        plans: &[&ReadingPlan],
    ) -> fmt::Result {
        writeln!(f, "## {heading}")?;
        writeln!(f)?;
        write!(f, "{}", PlanCards::new(plans.to_vec(), self.today, self.lang))?;
        writeln!(f)
    }
}

impl fmt::Display for DashboardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lang = self.lang;

        writeln!(f, "# {}", lang.pick("Dashboard", "Tableau de bord"))?;
        writeln!(f)?;
        writeln!(
            f,
            "{}, {}",
            lang.pick("Welcome back", "Bienvenue"),
            self.user
        )?;
        writeln!(f)?;

        writeln!(
            f,
            "- **{}**: {}",
            lang.pick("Active Plans", "Plans actifs"),
            self.stats.active_plans
        )?;
        writeln!(
            f,
            "- **{}**: {}",
            lang.pick("Total Participants", "Participants totaux"),
            self.stats.total_participants
        )?;
        writeln!(
            f,
            "- **{}**: {}%",
            lang.pick("Average Progress", "Progrès moyen"),
            percent(self.stats.average_progress)
        )?;
        writeln!(f)?;

        self.section(f, lang.pick("Active Plans", "Plans actifs"), &self.active)?;
        if !self.completed.is_empty() {
            self.section(f, lang.pick("Completed Plans", "Plans terminés"), &self.completed)?;
        }
        if !self.archived.is_empty() {
            self.section(f, lang.pick("Archived Plans", "Plans archivés"), &self.archived)?;
        }

        Ok(())
    }
}
