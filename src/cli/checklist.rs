//! Pre-ship checklist and ship gate commands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use super::formatting::checkbox;
use super::CliContext;
use crate::storage::{FinalSubmission, KeyValueStore, TestChecklist, CHECKLIST_ITEMS};

/// Checklist operations.
#[derive(Parser)]
pub struct ChecklistCommand {
    /// Checklist subcommand to execute.
    #[command(subcommand)]
    pub command: ChecklistSubcommands,
}

/// Checklist subcommands.
#[derive(Subcommand)]
pub enum ChecklistSubcommands {
    /// Lists every item with its state and hint.
    List,
    /// Checks or unchecks one item.
    Toggle(ToggleCommand),
    /// Unchecks every item.
    Reset,
}

/// Toggle command options.
#[derive(Parser)]
pub struct ToggleCommand {
    /// Item id as shown by `checklist list`.
    #[arg(value_name = "ITEM")]
    pub item: String,
}

/// Ship gate status.
#[derive(Parser)]
pub struct ShipCommand {}

impl ChecklistCommand {
    /// Executes the checklist command.
    pub fn execute(self, ctx: &CliContext) -> Result<()> {
        let mut checklist = TestChecklist::load(&ctx.store);

        match self.command {
            ChecklistSubcommands::List => {
                println!("Tests Passed: {}", progress(&checklist));
                for item in &CHECKLIST_ITEMS {
                    println!(
                        "{} {:<20} {}\n    {}",
                        checkbox(checklist.is_checked(item.id)),
                        item.id,
                        item.label,
                        item.hint
                    );
                }
                if !checklist.is_complete() {
                    println!("\n\u{26a0}\u{fe0f}  Fix issues before shipping.");
                }
            }
            ChecklistSubcommands::Toggle(cmd) => {
                let checked = checklist
                    .toggle(&cmd.item)
                    .with_context(|| format!("Failed to toggle checklist item {:?}", cmd.item))?;
                sync_ship_status(&ctx.store, &checklist)?;
                println!(
                    "{} {}  ({})",
                    checkbox(checked),
                    cmd.item,
                    progress(&checklist)
                );
            }
            ChecklistSubcommands::Reset => {
                checklist.reset().context("Failed to reset checklist")?;
                sync_ship_status(&ctx.store, &checklist)?;
                println!("Checklist reset ({})", progress(&checklist));
            }
        }
        Ok(())
    }
}

impl ShipCommand {
    /// Executes the ship command.
    pub fn execute(self, ctx: &CliContext) -> Result<()> {
        let checklist = TestChecklist::load(&ctx.store);
        println!("{}", ship_gate_text(&checklist));
        Ok(())
    }
}

fn progress(checklist: &TestChecklist<'_>) -> String {
    format!("{} / {}", checklist.passed_count(), checklist.total())
}

/// Lock or unlock message for the ship gate.
pub(crate) fn ship_gate_text(checklist: &TestChecklist<'_>) -> String {
    if checklist.is_complete() {
        "\u{1f680} Ready to Ship: all tests passed.".to_string()
    } else {
        format!(
            "\u{1f512} Shipping locked: {} tests passed. \
             Complete the checklist with `placement-prep checklist toggle`.",
            progress(checklist)
        )
    }
}

/// Unchecking an item must also revoke a shipped submission.
fn sync_ship_status(store: &dyn KeyValueStore, checklist: &TestChecklist<'_>) -> Result<()> {
    let mut submission = FinalSubmission::load(store);
    let shipped = checklist.is_complete() && submission.links.are_valid();
    if submission.is_shipped != shipped {
        submission
            .refresh(store, checklist.is_complete())
            .context("Failed to update submission status")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStore, SubmissionLinks};
    use tempfile::TempDir;

    fn toggle(ctx: &CliContext, item: &str) -> Result<()> {
        ChecklistCommand {
            command: ChecklistSubcommands::Toggle(ToggleCommand {
                item: item.to_string(),
            }),
        }
        .execute(ctx)
    }

    fn links() -> SubmissionLinks {
        SubmissionLinks {
            lovable: "https://lovable.dev/p".to_string(),
            github: "https://github.com/a/b".to_string(),
            deployed: "https://b.example.com".to_string(),
        }
    }

    #[test]
    fn gate_text_locked_and_unlocked() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = CliContext::with_store(FileStore::new(temp_dir.path()));
        assert!(ship_gate_text(&TestChecklist::load(&ctx.store)).contains("0 / 10"));

        for item in &CHECKLIST_ITEMS {
            toggle(&ctx, item.id).unwrap();
        }
        assert!(ship_gate_text(&TestChecklist::load(&ctx.store)).contains("Ready to Ship"));
    }

    #[test]
    fn unknown_item_fails() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = CliContext::with_store(FileStore::new(temp_dir.path()));
        assert!(toggle(&ctx, "not-an-item").is_err());
    }

    #[test]
    fn unchecking_revokes_shipped_submission() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = CliContext::with_store(FileStore::new(temp_dir.path()));
        for item in &CHECKLIST_ITEMS {
            toggle(&ctx, item.id).unwrap();
        }
        FinalSubmission::load(&ctx.store)
            .update(&ctx.store, links(), true)
            .unwrap();
        assert!(FinalSubmission::load(&ctx.store).is_shipped);

        toggle(&ctx, "history-saves").unwrap();
        assert!(!FinalSubmission::load(&ctx.store).is_shipped);

        toggle(&ctx, "history-saves").unwrap();
        assert!(FinalSubmission::load(&ctx.store).is_shipped);
    }

    #[test]
    fn reset_revokes_shipped_submission() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = CliContext::with_store(FileStore::new(temp_dir.path()));
        for item in &CHECKLIST_ITEMS {
            toggle(&ctx, item.id).unwrap();
        }
        FinalSubmission::load(&ctx.store)
            .update(&ctx.store, links(), true)
            .unwrap();

        ChecklistCommand {
            command: ChecklistSubcommands::Reset,
        }
        .execute(&ctx)
        .unwrap();
        assert!(!FinalSubmission::load(&ctx.store).is_shipped);
        assert_eq!(TestChecklist::load(&ctx.store).passed_count(), 0);
    }
}
