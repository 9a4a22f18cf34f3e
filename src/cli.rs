//! CLI interface for placement-prep.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::storage::FileStore;
use crate::utils::Settings;

pub mod analyze;
pub mod checklist;
pub mod config;
pub mod formatting;
pub mod help;
pub mod history;
pub mod proof;
pub mod skills;
pub mod status;

/// placement-prep: job-description analysis and placement readiness tracking.
#[derive(Parser)]
#[command(name = "placement-prep")]
#[command(about = "Job-description analysis and placement readiness tracking", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding saved analyses and progress (overrides settings).
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// The main command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Main command categories.
#[derive(Subcommand)]
pub enum Commands {
    /// Analyzes a job description and saves the report.
    Analyze(analyze::AnalyzeCommand),
    /// Saved analyses.
    History(history::HistoryCommand),
    /// Skill confidence for a saved analysis.
    Skills(skills::SkillsCommand),
    /// Pre-ship verification checklist.
    Checklist(checklist::ChecklistCommand),
    /// Shows whether shipping is unlocked.
    Ship(checklist::ShipCommand),
    /// Final submission links and proof of work.
    Proof(proof::ProofCommand),
    /// Overview of readiness, history and ship status.
    Status(status::StatusCommand),
    /// Configuration information.
    Config(config::ConfigCommand),
    /// Displays comprehensive help for all commands.
    #[command(name = "help-all")]
    HelpAll(help::HelpCommand),
}

/// Resolved runtime context shared by every command.
pub struct CliContext {
    /// Loaded settings.
    pub settings: Settings,
    /// Store for all persisted state.
    pub store: FileStore,
}

impl CliContext {
    /// Loads settings and opens the store, honouring an explicit directory.
    pub fn load(data_dir: Option<PathBuf>) -> Result<Self> {
        let settings = Settings::load()?;
        let root = settings.resolve_data_dir(data_dir.as_deref())?;
        tracing::debug!(root = %root.display(), "Using data directory");
        Ok(Self {
            settings,
            store: FileStore::new(root),
        })
    }

    /// Context over an explicit store, without reading settings.
    pub fn with_store(store: FileStore) -> Self {
        Self {
            settings: Settings::default(),
            store,
        }
    }
}

impl Cli {
    /// Executes the CLI command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            // Help needs no settings or store.
            Commands::HelpAll(help_cmd) => help_cmd.execute(),
            command => {
                let ctx = CliContext::load(self.data_dir)?;
                command.execute(&ctx)
            }
        }
    }
}

impl Commands {
    /// Executes the command against a resolved context.
    pub fn execute(self, ctx: &CliContext) -> Result<()> {
        match self {
            Self::Analyze(cmd) => cmd.execute(ctx),
            Self::History(cmd) => cmd.execute(ctx),
            Self::Skills(cmd) => cmd.execute(ctx),
            Self::Checklist(cmd) => cmd.execute(ctx),
            Self::Ship(cmd) => cmd.execute(ctx),
            Self::Proof(cmd) => cmd.execute(ctx),
            Self::Status(cmd) => cmd.execute(ctx),
            Self::Config(cmd) => cmd.execute(ctx),
            Self::HelpAll(cmd) => cmd.execute(),
        }
    }
}
