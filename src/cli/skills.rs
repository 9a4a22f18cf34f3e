//! Skill confidence commands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use super::formatting::{confidence_marker, score_bar};
use super::history::find;
use super::CliContext;
use crate::data::{AnalysisResult, Confidence};
use crate::storage::History;

/// Skill confidence operations.
#[derive(Parser)]
pub struct SkillsCommand {
    /// Skills subcommand to execute.
    #[command(subcommand)]
    pub command: SkillsSubcommands,
}

/// Skills subcommands.
#[derive(Subcommand)]
pub enum SkillsSubcommands {
    /// Lists extracted skills with their confidence.
    Show(ShowCommand),
    /// Flips a skill between know and practice.
    Toggle(ToggleCommand),
    /// Sets a skill's confidence explicitly.
    Set(SetCommand),
}

/// Show command options.
#[derive(Parser)]
pub struct ShowCommand {
    /// Analysis id, or "latest".
    #[arg(long, default_value = "latest")]
    pub id: String,
}

/// Toggle command options.
#[derive(Parser)]
pub struct ToggleCommand {
    /// Skill name as shown by `skills show`.
    pub skill: String,

    /// Analysis id, or "latest".
    #[arg(long, default_value = "latest")]
    pub id: String,
}

/// Set command options.
#[derive(Parser)]
pub struct SetCommand {
    /// Skill name as shown by `skills show`.
    pub skill: String,

    /// New confidence: know or practice.
    pub confidence: Confidence,

    /// Analysis id, or "latest".
    #[arg(long, default_value = "latest")]
    pub id: String,
}

impl SkillsCommand {
    /// Executes the skills command.
    pub fn execute(self, ctx: &CliContext) -> Result<()> {
        let mut history = History::load(&ctx.store);

        match self.command {
            SkillsSubcommands::Show(cmd) => {
                let entry = find(&history, &cmd.id)?;
                println!("Analysis {}: {}", entry.id, score_bar(entry.displayed_score()));
                for (category, skills) in &entry.extracted_skills {
                    println!("{category}");
                    for skill in skills {
                        println!(
                            "  {skill:<24} {}",
                            confidence_marker(entry.confidence_of(skill))
                        );
                    }
                }
            }
            SkillsSubcommands::Toggle(cmd) => {
                let updated = edit(&mut history, &cmd.id, &cmd.skill, |entry| {
                    entry.toggle_confidence(&cmd.skill).map(|_| ())
                })?;
                print_change(&updated, &cmd.skill);
            }
            SkillsSubcommands::Set(cmd) => {
                let updated = edit(&mut history, &cmd.id, &cmd.skill, |entry| {
                    entry.set_confidence(&cmd.skill, cmd.confidence).map(|_| ())
                })?;
                print_change(&updated, &cmd.skill);
            }
        }
        Ok(())
    }
}

/// Applies `change` to a copy of the entry and overwrites the stored one.
fn edit(
    history: &mut History<'_>,
    id: &str,
    skill: &str,
    change: impl FnOnce(&mut AnalysisResult) -> Option<()>,
) -> Result<AnalysisResult> {
    let mut entry = find(history, id)?.clone();
    change(&mut entry).with_context(|| {
        format!(
            "Skill {skill:?} was not extracted in analysis {}; run `placement-prep skills show`",
            entry.id
        )
    })?;
    history
        .update(entry.clone())
        .context("Failed to save skill confidence")?;
    Ok(entry)
}

fn print_change(entry: &AnalysisResult, skill: &str) {
    println!(
        "{skill}: {}\nReadiness: {}",
        confidence_marker(entry.confidence_of(skill)),
        score_bar(entry.displayed_score())
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;
    use crate::storage::FileStore;
    use tempfile::TempDir;

    fn setup(temp_dir: &TempDir) -> (CliContext, String) {
        let ctx = CliContext::with_store(FileStore::new(temp_dir.path()));
        let id = History::load(&ctx.store)
            .save(analyze("React and SQL", "Google", ""))
            .unwrap();
        (ctx, id)
    }

    #[test]
    fn toggle_persists_score_change() {
        let temp_dir = TempDir::new().unwrap();
        let (ctx, id) = setup(&temp_dir);

        SkillsCommand {
            command: SkillsSubcommands::Toggle(ToggleCommand {
                skill: "React".to_string(),
                id: id.clone(),
            }),
        }
        .execute(&ctx)
        .unwrap();

        let history = History::load(&ctx.store);
        let entry = history.get(&id).unwrap();
        assert_eq!(entry.confidence_of("React"), Confidence::Know);
        assert_eq!(entry.displayed_score(), 57);
        assert_eq!(entry.readiness_score, 55);
    }

    #[test]
    fn set_back_to_practice_restores_score() {
        let temp_dir = TempDir::new().unwrap();
        let (ctx, id) = setup(&temp_dir);

        for confidence in [Confidence::Know, Confidence::Practice] {
            SkillsCommand {
                command: SkillsSubcommands::Set(SetCommand {
                    skill: "SQL".to_string(),
                    confidence,
                    id: "latest".to_string(),
                }),
            }
            .execute(&ctx)
            .unwrap();
        }

        let history = History::load(&ctx.store);
        assert_eq!(history.get(&id).unwrap().displayed_score(), 55);
    }

    #[test]
    fn unknown_skill_errors_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        let (ctx, id) = setup(&temp_dir);

        let result = SkillsCommand {
            command: SkillsSubcommands::Toggle(ToggleCommand {
                skill: "Haskell".to_string(),
                id: id.clone(),
            }),
        }
        .execute(&ctx);
        assert!(result.is_err());

        let history = History::load(&ctx.store);
        assert!(history.get(&id).unwrap().final_score.is_none());
    }
}
