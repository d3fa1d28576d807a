//! Aggregate statistics over a user's plans.

use serde::{Deserialize, Serialize};

use super::{PlanStatus, ReadingPlan};
use crate::schedule;

/// Dashboard figures for one owner.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Number of plans in `Active` status
    pub active_plans: u32,
    /// Number of plans in `Completed` status
    pub completed_plans: u32,
    /// Number of plans in `Archived` status
    pub archived_plans: u32,
    /// Participants summed over all of the owner's plans
    pub total_participants: u32,
    /// Mean plan progress, `0.0` when the owner has no plans
    pub average_progress: f64,
}

impl DashboardStats {
    /// Builds statistics from an owner's plans.
    pub fn from_plans<'a, I>(plans: I) -> Self
    where
        I: IntoIterator<Item = &'a ReadingPlan>,
    {
        let mut stats = Self::default();
        let mut progress = Vec::new();

        for plan in plans {
            match plan.status {
                PlanStatus::Active => stats.active_plans += 1,
                PlanStatus::Completed => stats.completed_plans += 1,
                PlanStatus::Archived => stats.archived_plans += 1,
            }
            stats.total_participants += plan.participants.len() as u32;
            progress.push(plan.progress);
        }

        stats.average_progress = schedule::mean_progress(progress);
        stats
    }

    /// Total number of plans counted.
    pub fn total_plans(&self) -> u32 {
        self.active_plans + self.completed_plans + self.archived_plans
    }
}
