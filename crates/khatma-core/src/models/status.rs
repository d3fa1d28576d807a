//! Status enumeration for reading plans.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::locale::Language;

/// Type-safe enumeration of plan statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    /// Plan is being read
    #[default]
    Active,

    /// Every participant has finished their range
    Completed,

    /// Plan was put away by its owner
    Archived,
}

impl FromStr for PlanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(PlanStatus::Active),
            "completed" => Ok(PlanStatus::Completed),
            "archived" => Ok(PlanStatus::Archived),
            _ => Err(format!("Invalid plan status: {s}")),
        }
    }
}

impl PlanStatus {
    /// Convert to storage string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Active => "active",
            PlanStatus::Completed => "completed",
            PlanStatus::Archived => "archived",
        }
    }

    /// Status with icon, localized for display.
    ///
    /// ```rust
    /// use khatma_core::{locale::Language, models::PlanStatus};
    ///
    /// assert_eq!(PlanStatus::Completed.with_icon(Language::English), "✓ Completed");
    /// assert_eq!(PlanStatus::Archived.with_icon(Language::French), "▣ Archivé");
    /// ```
    pub fn with_icon(&self, lang: Language) -> &'static str {
        match self {
            PlanStatus::Active => lang.pick("➤ Active", "➤ Actif"),
            PlanStatus::Completed => lang.pick("✓ Completed", "✓ Terminé"),
            PlanStatus::Archived => lang.pick("▣ Archived", "▣ Archivé"),
        }
    }
}
