//! Plan lifecycle operations: create, archive, delete.

use jiff::{civil::Date, ToSpan, Zoned};
use log::{info, warn};
use uuid::Uuid;

use super::PlanStore;
use crate::{
    error::{KhatmaError, Result},
    models::{Participant, PlanStatus, ReadingPlan},
    params::{CreatePlan, DeletePlan, Id},
    schedule,
    storage::SnapshotStore,
};

impl<S: SnapshotStore> PlanStore<S> {
    /// Creates a plan, partitioning its pages across the participants.
    ///
    /// Participant `i` gets pages `i*per + 1 ..= (i+1)*per` where
    /// `per = floor(total_pages / count)`; the last participant runs to
    /// `total_pages`. Each daily quota is `ceil(width / days)`. The plan
    /// starts today unless `start_date` is given and ends `days` later.
    ///
    /// # Errors
    ///
    /// Returns `KhatmaError::InvalidPlanSpec` for rejected input, or a
    /// storage error if the write-through fails (the plan is then not kept).
    pub fn create_plan(&mut self, params: &CreatePlan) -> Result<ReadingPlan> {
        let validated = params.validate()?;
        let start_date = params.start_date.unwrap_or_else(|| Zoned::now().date());
        let end_date = plan_end_date(start_date, validated.days)?;

        let ranges =
            schedule::partition_pages(validated.total_pages, validated.participant_names.len());
        let participants = validated
            .participant_names
            .into_iter()
            .zip(ranges)
            .map(|(name, range)| Participant {
                id: Uuid::new_v4(),
                name,
                start_page: range.start_page,
                end_page: range.end_page,
                pages_per_day: schedule::pages_per_day(range.width(), validated.days),
                progress: 0.0,
            })
            .collect();

        let plan = ReadingPlan {
            id: Uuid::new_v4(),
            book: validated.book,
            total_pages: validated.total_pages,
            participants,
            start_date,
            end_date,
            created_by: validated.owner_id,
            status: PlanStatus::Active,
            progress: 0.0,
        };

        self.plans.push(plan.clone());
        if let Err(e) = self.persist() {
            self.plans.pop();
            return Err(e);
        }

        info!(
            "Created plan {} ({} pages, {} participants, {} days)",
            plan.id,
            plan.total_pages,
            plan.participants.len(),
            validated.days
        );
        Ok(plan)
    }

    /// Archives a plan regardless of its current status.
    ///
    /// Returns the archived plan, or `None` if no plan has this id.
    pub fn archive_plan(&mut self, params: &Id) -> Result<Option<ReadingPlan>> {
        let Some(plan) = self.plan_mut(params.id) else {
            warn!("Archive ignored: plan {} not found", params.id);
            return Ok(None);
        };

        plan.status = PlanStatus::Archived;
        let archived = plan.clone();
        self.persist()?;

        info!("Archived plan {}", archived.id);
        Ok(Some(archived))
    }

    /// Permanently deletes a plan and its participants.
    ///
    /// Requires explicit confirmation via the `confirmed` field. Returns the
    /// removed plan, or `None` if no plan has this id, so repeating a
    /// deletion is harmless.
    ///
    /// # Errors
    ///
    /// Returns `KhatmaError::InvalidInput` if `confirmed` is false.
    pub fn delete_plan(&mut self, params: &DeletePlan) -> Result<Option<ReadingPlan>> {
        if !params.confirmed {
            return Err(KhatmaError::invalid_input("confirmed").with_reason(
                "Plan deletion requires explicit confirmation. Set 'confirmed' to true to proceed with permanent deletion.",
            ));
        }

        let Some(index) = self.plans.iter().position(|plan| plan.id == params.id) else {
            warn!("Delete ignored: plan {} not found", params.id);
            return Ok(None);
        };

        let removed = self.plans.remove(index);
        self.persist()?;

        info!("Deleted plan {}", removed.id);
        Ok(Some(removed))
    }
}

/// `start_date + days`, rejecting dates past the calendar's range.
fn plan_end_date(start_date: Date, days: u32) -> Result<Date> {
    start_date.checked_add(i64::from(days).days()).map_err(|e| {
        KhatmaError::invalid_spec("days").with_reason(format!("End date out of range: {e}"))
    })
}
