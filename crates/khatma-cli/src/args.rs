use std::path::PathBuf;

use clap::{Parser, Subcommand};
use khatma_core::Language;

use crate::cli::{PlanCommands, ProgressArgs};

/// Shared reading plans for groups
///
/// Khatma divides a book among a group of readers. Each reader gets a
/// contiguous page range and a daily quota; recorded progress is averaged
/// into the plan, which completes once every range is read.
#[derive(Parser)]
#[command(version, about, name = "khatma")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/khatma/khatma.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Display language (en or fr)
    #[arg(long, global = true, default_value = "en")]
    pub lang: Language,

    /// Identifier of the signed-in user
    #[arg(long, global = true, env = "KHATMA_USER", default_value = "1")]
    pub user: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without one, the dashboard is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage reading plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Record how many pages a participant has read
    #[command(alias = "r")]
    Progress(ProgressArgs),
    /// Show the dashboard for the current user
    #[command(alias = "d")]
    Dashboard,
}
