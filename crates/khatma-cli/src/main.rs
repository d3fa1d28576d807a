//! Khatma CLI Application
//!
//! Command-line interface for shared reading plans.

mod args;
mod cli;
mod handlers;
mod renderer;
mod session;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use handlers::Cli;
use khatma_core::PlanStoreBuilder;
use log::info;
use renderer::TerminalRenderer;
use session::Session;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        lang,
        user,
        command,
    } = Args::parse();

    let store = PlanStoreBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to open plan store")?;

    let session = Session::sign_in(user);
    info!("Khatma started for user {}", session.user_id);

    let mut cli = Cli::new(store, TerminalRenderer::new(!no_color), lang, session);

    match command {
        Some(Plan { command }) => cli.handle_plan_command(command),
        Some(Progress(args)) => cli.record_progress(&args),
        Some(Dashboard) | None => cli.dashboard(),
    }
}
