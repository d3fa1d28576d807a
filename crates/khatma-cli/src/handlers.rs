//! Command handlers: run one operation against the store and render it.

use std::fmt::Display;

use anyhow::{Context, Result};
use jiff::civil::Date;
use khatma_core::{
    display::{
        today, ArchiveResult, CreateResult, DashboardView, DeleteResult, OperationStatus,
        PlanCards, PlanDetails, ProgressResult,
    },
    models::{PlanFilter, PlanStatus},
    params::{DeletePlan, Id, UpdateProgress},
    Database, Language, PlanStore,
};
use log::debug;
use uuid::Uuid;

use crate::{
    cli::{CreatePlanArgs, DeletePlanArgs, ListPlansArgs, PlanCommands, PlanRefArgs, ProgressArgs},
    renderer::TerminalRenderer,
    session::Session,
};

/// One CLI invocation: the opened store plus how to present results.
pub struct Cli {
    store: PlanStore<Database>,
    renderer: TerminalRenderer,
    lang: Language,
    session: Session,
    today: Date,
}

impl Cli {
    pub fn new(
        store: PlanStore<Database>,
        renderer: TerminalRenderer,
        lang: Language,
        session: Session,
    ) -> Self {
        Self {
            store,
            renderer,
            lang,
            session,
            today: today(),
        }
    }

    pub fn handle_plan_command(&mut self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => self.create_plan(args),
            PlanCommands::List(args) => self.list_plans(args),
            PlanCommands::Show(args) => self.show_plan(&args),
            PlanCommands::Archive(args) => self.archive_plan(&args),
            PlanCommands::Delete(args) => self.delete_plan(&args),
        }
    }

    fn create_plan(&mut self, args: CreatePlanArgs) -> Result<()> {
        let params = args.into_params(self.session.user_id.clone());
        let plan = self
            .store
            .create_plan(&params)
            .context("Failed to create plan")?;

        self.render(&CreateResult::new(plan).in_language(self.lang))
    }

    fn list_plans(&self, args: ListPlansArgs) -> Result<()> {
        let params = args.into_params(self.session.user_id.clone());
        let plans = self.store.list_plans(&PlanFilter::from(&params));

        self.render(&PlanCards::new(plans, self.today, self.lang))
    }

    fn show_plan(&self, args: &PlanRefArgs) -> Result<()> {
        let plan = self
            .resolve_plan(&args.plan)?
            .and_then(|id| self.store.get_plan(id));

        match plan {
            Some(plan) => self.render(&PlanDetails::new(plan, self.today, self.lang)),
            None => self.plan_not_found(&args.plan),
        }
    }

    fn archive_plan(&mut self, args: &PlanRefArgs) -> Result<()> {
        let Some(id) = self.resolve_plan(&args.plan)? else {
            return self.plan_not_found(&args.plan);
        };

        match self
            .store
            .archive_plan(&Id { id })
            .context("Failed to archive plan")?
        {
            Some(plan) => self.render(&ArchiveResult::new(plan).in_language(self.lang)),
            None => self.plan_not_found(&args.plan),
        }
    }

    fn delete_plan(&mut self, args: &DeletePlanArgs) -> Result<()> {
        let Some(id) = self.resolve_plan(&args.plan)? else {
            return self.plan_not_found(&args.plan);
        };

        let params = DeletePlan {
            id,
            confirmed: args.confirm,
        };
        match self
            .store
            .delete_plan(&params)
            .context("Failed to delete plan")?
        {
            Some(plan) => self.render(&DeleteResult::new(plan).in_language(self.lang)),
            None => self.plan_not_found(&args.plan),
        }
    }

    /// Records progress for one participant.
    pub fn record_progress(&mut self, args: &ProgressArgs) -> Result<()> {
        let Some(plan_id) = self.resolve_plan(&args.plan)? else {
            return self.plan_not_found(&args.plan);
        };

        let participant_id = match self.store.get_plan(plan_id) {
            Some(plan) => plan
                .find_participant(&args.participant)
                .context("Failed to resolve participant")?,
            None => None,
        };
        let Some(participant_id) = participant_id else {
            return self.render(
                &OperationStatus::failure(format!(
                    "{}: {}",
                    self.lang.pick("Participant not found", "Participant introuvable"),
                    args.participant
                ))
                .in_language(self.lang),
            );
        };

        let params = UpdateProgress {
            plan_id,
            participant_id,
            pages_read: args.pages_read,
        };
        debug!("record_progress: {params:?}");

        match self
            .store
            .update_progress(&params)
            .context("Failed to record progress")?
        {
            Some(plan) => self.render(&ProgressResult {
                plan,
                participant_id,
                lang: self.lang,
                today: self.today,
            }),
            None => self.plan_not_found(&args.plan),
        }
    }

    /// Shows the current user's statistics and plans by status.
    pub fn dashboard(&self) -> Result<()> {
        let owner = self.session.user_id.as_str();
        let by_status = |status| {
            self.store
                .list_plans(&PlanFilter::for_owner(owner, Some(status)))
        };
        let user = self.session.display_name();

        self.render(&DashboardView {
            user: &user,
            stats: self.store.dashboard(owner),
            active: by_status(PlanStatus::Active),
            completed: by_status(PlanStatus::Completed),
            archived: by_status(PlanStatus::Archived),
            today: self.today,
            lang: self.lang,
        })
    }

    fn resolve_plan(&self, reference: &str) -> Result<Option<Uuid>> {
        self.store
            .resolve_plan_id(reference)
            .context("Failed to resolve plan")
    }

    fn plan_not_found(&self, reference: &str) -> Result<()> {
        self.render(
            &OperationStatus::failure(format!(
                "{}: {reference}",
                self.lang.pick("Plan not found", "Plan introuvable")
            ))
            .in_language(self.lang),
        )
    }

    fn render(&self, content: &impl Display) -> Result<()> {
        self.renderer.render(&content.to_string())
    }
}
