//! Overview of readiness, history and ship status.

use anyhow::Result;
use clap::Parser;

use super::checklist::ship_gate_text;
use super::formatting::{history_line, score_bar};
use super::CliContext;
use crate::storage::{FinalSubmission, History, TestChecklist};

/// Status command options.
#[derive(Parser)]
pub struct StatusCommand {}

impl StatusCommand {
    /// Executes the status command.
    pub fn execute(self, ctx: &CliContext) -> Result<()> {
        let history = History::load(&ctx.store);
        let checklist = TestChecklist::load(&ctx.store);
        let submission = FinalSubmission::load(&ctx.store);
        print!("{}", overview(&history, &checklist, &submission));
        Ok(())
    }
}

pub(crate) fn overview(
    history: &History<'_>,
    checklist: &TestChecklist<'_>,
    submission: &FinalSubmission,
) -> String {
    let mut out = String::new();
    match history.latest() {
        Some(latest) => {
            out.push_str(&format!("Readiness: {}\n", score_bar(latest.displayed_score())));
            out.push_str(&format!("Latest:    {}\n", history_line(latest)));
            let practice = latest.practice_skills();
            if !practice.is_empty() {
                out.push_str(&format!("Practice:  {} skills\n", practice.len()));
            }
        }
        None => out.push_str("Readiness: no analyses yet\n"),
    }
    out.push_str(&format!("Analyses:  {}\n", history.entries().len()));
    out.push_str(&format!(
        "Checklist: {} / {}\n",
        checklist.passed_count(),
        checklist.total()
    ));
    out.push_str(&format!("{}\n", ship_gate_text(checklist)));
    out.push_str(&format!(
        "Project:   {}\n",
        if submission.is_shipped {
            "Shipped"
        } else {
            "In Progress"
        }
    ));
    out
}
