//! Proof-of-work commands: build steps, submission links and final text.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use super::formatting::checkbox;
use super::CliContext;
use crate::storage::{FinalSubmission, SubmissionLinks, TestChecklist};

/// Proof operations.
#[derive(Parser)]
pub struct ProofCommand {
    /// Proof subcommand to execute.
    #[command(subcommand)]
    pub command: ProofSubcommands,
}

/// Proof subcommands.
#[derive(Subcommand)]
pub enum ProofSubcommands {
    /// Shows build steps, links and ship status.
    Status,
    /// Records one or more submission links.
    Set(SetCommand),
    /// Prints the final submission text once shipped.
    Copy,
}

/// Set command options. Omitted links keep their stored value.
#[derive(Parser)]
pub struct SetCommand {
    /// Hosted project link.
    #[arg(long, value_name = "URL")]
    pub lovable: Option<String>,

    /// Source repository link.
    #[arg(long, value_name = "URL")]
    pub github: Option<String>,

    /// Live deployment link.
    #[arg(long, value_name = "URL")]
    pub deployed: Option<String>,
}

impl SetCommand {
    fn merge_into(self, current: &SubmissionLinks) -> SubmissionLinks {
        SubmissionLinks {
            lovable: self.lovable.unwrap_or_else(|| current.lovable.clone()),
            github: self.github.unwrap_or_else(|| current.github.clone()),
            deployed: self.deployed.unwrap_or_else(|| current.deployed.clone()),
        }
    }
}

impl ProofCommand {
    /// Executes the proof command.
    pub fn execute(self, ctx: &CliContext) -> Result<()> {
        let tests_complete = TestChecklist::load(&ctx.store).is_complete();
        let mut submission = FinalSubmission::load(&ctx.store);

        match self.command {
            ProofSubcommands::Status => {
                print!("{}", status_text(&submission, tests_complete));
            }
            ProofSubcommands::Set(cmd) => {
                let links = cmd.merge_into(&submission.links);
                for (name, link) in [
                    ("lovable", &links.lovable),
                    ("github", &links.github),
                    ("deployed", &links.deployed),
                ] {
                    if !link.is_empty() && !link.starts_with("http") {
                        eprintln!("\u{26a0}\u{fe0f}  {name} link should start with http");
                    }
                }
                submission
                    .update(&ctx.store, links, tests_complete)
                    .context("Failed to save submission links")?;
                println!(
                    "\u{2705} Links saved. Status: {}",
                    ship_label(submission.is_shipped)
                );
            }
            ProofSubcommands::Copy => {
                let text = submission.submission_text().with_context(|| {
                    if tests_complete {
                        "Not shipped yet: provide all three links starting with http"
                    } else {
                        "Not shipped yet: complete the pre-ship checklist first"
                    }
                })?;
                println!("{text}");
            }
        }
        Ok(())
    }
}

fn ship_label(shipped: bool) -> &'static str {
    if shipped {
        "Shipped"
    } else {
        "In Progress"
    }
}

/// Build step and link summary shown by `proof status`.
pub(crate) fn status_text(submission: &FinalSubmission, tests_complete: bool) -> String {
    let mut out = format!("Status: {}\n\nBuild Steps\n", ship_label(submission.is_shipped));
    for step in submission.build_steps(tests_complete) {
        out.push_str(&format!(
            "  {} {}. {}\n",
            checkbox(step.done),
            step.number,
            step.label
        ));
    }

    out.push_str("\nLinks\n");
    for (name, link) in [
        ("Lovable Project", &submission.links.lovable),
        ("GitHub Repository", &submission.links.github),
        ("Live Deployment", &submission.links.deployed),
    ] {
        let shown = if link.is_empty() { "(not set)" } else { link.as_str() };
        out.push_str(&format!("  {name:<18} {shown}\n"));
    }

    if submission.is_shipped {
        out.push_str("\nYou built a real product. Not a tutorial. Not a clone.\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStore, CHECKLIST_ITEMS};
    use tempfile::TempDir;

    fn set(ctx: &CliContext, lovable: Option<&str>, github: Option<&str>, deployed: Option<&str>) {
        ProofCommand {
            command: ProofSubcommands::Set(SetCommand {
                lovable: lovable.map(str::to_string),
                github: github.map(str::to_string),
                deployed: deployed.map(str::to_string),
            }),
        }
        .execute(ctx)
        .unwrap();
    }

    fn copy(ctx: &CliContext) -> Result<()> {
        ProofCommand {
            command: ProofSubcommands::Copy,
        }
        .execute(ctx)
    }

    #[test]
    fn partial_set_keeps_other_links() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = CliContext::with_store(FileStore::new(temp_dir.path()));
        set(&ctx, Some("https://lovable.dev/p"), None, None);
        set(&ctx, None, Some("https://github.com/a/b"), None);

        let links = FinalSubmission::load(&ctx.store).links;
        assert_eq!(links.lovable, "https://lovable.dev/p");
        assert_eq!(links.github, "https://github.com/a/b");
        assert!(links.deployed.is_empty());
    }

    #[test]
    fn copy_requires_shipped() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = CliContext::with_store(FileStore::new(temp_dir.path()));
        set(
            &ctx,
            Some("https://lovable.dev/p"),
            Some("https://github.com/a/b"),
            Some("https://b.example.com"),
        );
        assert!(copy(&ctx).is_err());

        let mut checklist = TestChecklist::load(&ctx.store);
        for item in &CHECKLIST_ITEMS {
            checklist.toggle(item.id).unwrap();
        }
        // Re-saving links recomputes the ship status.
        set(&ctx, None, None, None);
        assert!(FinalSubmission::load(&ctx.store).is_shipped);
        assert!(copy(&ctx).is_ok());
    }

    #[test]
    fn status_text_lists_steps_and_missing_links() {
        let submission = FinalSubmission::default();
        let text = status_text(&submission, false);
        assert!(text.starts_with("Status: In Progress"));
        assert!(text.contains("[x] 6. History Persistence"));
        assert!(text.contains("[ ] 7. Pre-Ship Testing"));
        assert!(text.contains("Live Deployment    (not set)"));
        assert!(!text.contains("You built a real product"));
    }
}
