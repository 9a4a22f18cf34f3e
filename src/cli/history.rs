//! History commands: list, show, delete, clear and export saved analyses.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use super::analyze::{render, OutputFormat};
use super::formatting::history_line;
use super::CliContext;
use crate::data::{export_text, AnalysisResult, ExportSection};
use crate::storage::History;

/// History operations.
#[derive(Parser)]
pub struct HistoryCommand {
    /// History subcommand to execute.
    #[command(subcommand)]
    pub command: HistorySubcommands,
}

/// History subcommands.
#[derive(Subcommand)]
pub enum HistorySubcommands {
    /// Lists saved analyses, newest first.
    List,
    /// Shows one saved analysis.
    Show(ShowCommand),
    /// Deletes one saved analysis.
    Delete(IdArg),
    /// Deletes every saved analysis.
    Clear,
    /// Exports part of an analysis as plain text.
    Export(ExportCommand),
}

/// Identifies a saved analysis.
#[derive(Parser)]
pub struct IdArg {
    /// Analysis id, or "latest".
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Show command options.
#[derive(Parser)]
pub struct ShowCommand {
    /// Analysis id, or "latest".
    #[arg(value_name = "ID", default_value = "latest")]
    pub id: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Export command options.
#[derive(Parser)]
pub struct ExportCommand {
    /// Analysis id, or "latest".
    #[arg(value_name = "ID", default_value = "latest")]
    pub id: String,

    /// Section to export.
    #[arg(long, value_enum, default_value_t = ExportSection::All)]
    pub section: ExportSection,

    /// Writes to this file instead of stdout.
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl HistoryCommand {
    /// Executes the history command.
    pub fn execute(self, ctx: &CliContext) -> Result<()> {
        let mut history = History::load(&ctx.store);

        match self.command {
            HistorySubcommands::List => {
                if history.is_empty() {
                    println!("No saved analyses yet. Run `placement-prep analyze` first.");
                }
                for entry in history.entries() {
                    println!("{}", history_line(entry));
                }
            }
            HistorySubcommands::Show(cmd) => {
                let entry = find(&history, &cmd.id)?;
                println!("{}", render(entry, cmd.format)?);
            }
            HistorySubcommands::Delete(arg) => {
                let id = find(&history, &arg.id)?.id.clone();
                history.delete(&id)?;
                println!("\u{1f5d1}\u{fe0f}  Deleted analysis {id}");
            }
            HistorySubcommands::Clear => {
                let count = history.entries().len();
                history.clear()?;
                println!("\u{1f5d1}\u{fe0f}  Cleared {count} saved analyses");
            }
            HistorySubcommands::Export(cmd) => {
                let text = export_text(find(&history, &cmd.id)?, cmd.section);
                match cmd.output {
                    Some(path) => {
                        fs::write(&path, &text)
                            .with_context(|| format!("Failed to write {}", path.display()))?;
                        println!("\u{2705} Exported to {}", path.display());
                    }
                    None => print!("{text}"),
                }
            }
        }
        Ok(())
    }
}

/// Resolves an id argument, where "latest" means the newest entry.
pub(crate) fn find<'h>(history: &'h History<'_>, id: &str) -> Result<&'h AnalysisResult> {
    let found = if id == "latest" {
        history.latest()
    } else {
        history.get(id)
    };
    found.with_context(|| {
        if history.is_empty() {
            "No saved analyses yet".to_string()
        } else {
            format!("No saved analysis with id {id}")
        }
    })
}
