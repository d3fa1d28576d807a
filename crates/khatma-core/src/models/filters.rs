//! Filter types for querying plans.

use super::{PlanStatus, ReadingPlan};

/// Filter options for listing plans.
#[derive(Debug, Clone, Default)]
pub struct PlanFilter {
    /// Only plans created by this user
    pub owner: Option<String>,

    /// Only plans in this status. `None` matches every status.
    pub status: Option<PlanStatus>,
}

impl PlanFilter {
    /// Filter for one owner's plans in the given status.
    ///
    /// ```rust
    /// use khatma_core::models::{PlanFilter, PlanStatus};
    ///
    /// let filter = PlanFilter::for_owner("u1", Some(PlanStatus::Archived));
    /// assert_eq!(filter.owner.as_deref(), Some("u1"));
    /// assert_eq!(filter.status, Some(PlanStatus::Archived));
    /// ```
    pub fn for_owner(owner: impl Into<String>, status: Option<PlanStatus>) -> Self {
        Self {
            owner: Some(owner.into()),
            status,
        }
    }

    /// Whether a plan passes the filter.
    pub fn matches(&self, plan: &ReadingPlan) -> bool {
        self.owner
            .as_deref()
            .map_or(true, |owner| plan.created_by == owner)
            && self.status.map_or(true, |status| plan.status == status)
    }
}

impl From<&crate::params::ListPlans> for PlanFilter {
    /// Convert ListPlans parameters to a PlanFilter.
    ///
    /// Without an explicit status, `all = false` narrows the list to active
    /// plans, which is what the dashboard shows by default.
    fn from(params: &crate::params::ListPlans) -> Self {
        let status = match (params.status, params.all) {
            (Some(status), _) => Some(status),
            (None, true) => None,
            (None, false) => Some(PlanStatus::Active),
        };

        Self {
            owner: params.owner.clone(),
            status,
        }
    }
}
