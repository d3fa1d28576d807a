//! Progress recording.

use log::{debug, warn};

use super::PlanStore;
use crate::{
    error::Result,
    models::{PlanStatus, ReadingPlan},
    params::UpdateProgress,
    schedule,
    storage::SnapshotStore,
};

impl<S: SnapshotStore> PlanStore<S> {
    /// Records how many pages a participant has read.
    ///
    /// The participant's progress becomes `min(100, pages_read / width *
    /// 100)` and the plan's progress is recomputed as the mean over all
    /// participants. An active plan whose mean reaches exactly 100 becomes
    /// `Completed`. Re-applying the same value leaves the same state.
    ///
    /// Returns the updated plan, or `None` (without writing anything) when
    /// the plan or the participant does not exist.
    pub fn update_progress(&mut self, params: &UpdateProgress) -> Result<Option<ReadingPlan>> {
        let Some(plan) = self.plan_mut(params.plan_id) else {
            warn!("Progress ignored: plan {} not found", params.plan_id);
            return Ok(None);
        };

        let Some(participant) = plan
            .participants
            .iter_mut()
            .find(|p| p.id == params.participant_id)
        else {
            warn!(
                "Progress ignored: participant {} not in plan {}",
                params.participant_id, params.plan_id
            );
            return Ok(None);
        };

        participant.progress =
            schedule::progress_percent(params.pages_read, participant.range_width());
        debug!(
            "Participant {} read {} of {} pages ({:.2}%)",
            participant.id,
            params.pages_read,
            participant.range_width(),
            participant.progress
        );

        let was = plan.status;
        plan.recompute_progress();
        if was != PlanStatus::Completed && plan.status == PlanStatus::Completed {
            debug!("Plan {} completed", plan.id);
        }

        let updated = plan.clone();
        self.persist()?;
        Ok(Some(updated))
    }
}
