//! Analyze command: turns a job description into a readiness report.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use super::formatting::report_text;
use super::CliContext;
use crate::analyzer::analyze;
use crate::data::AnalysisResult;
use crate::storage::History;

/// Descriptions shorter than this get a warning.
pub const SHORT_JD_CHARS: usize = 200;

/// Output formats for a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// YAML document.
    #[default]
    Yaml,
    /// Pretty-printed JSON.
    Json,
    /// Human-readable summary.
    Text,
}

/// Analyze command options.
#[derive(Parser)]
pub struct AnalyzeCommand {
    /// File containing the job description (reads stdin when omitted).
    #[arg(long, value_name = "FILE")]
    pub jd_file: Option<PathBuf>,

    /// Company name, used for the company profile and round mapping.
    #[arg(long, default_value = "")]
    pub company: String,

    /// Role title.
    #[arg(long, default_value = "")]
    pub role: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,

    /// Prints the report without saving it to history.
    #[arg(long)]
    pub no_save: bool,
}

impl AnalyzeCommand {
    /// Executes the analyze command.
    pub fn execute(self, ctx: &CliContext) -> Result<()> {
        let text = self.read_description()?;
        if text.trim().is_empty() {
            anyhow::bail!("Job description is empty; pass --jd-file or pipe text on stdin");
        }
        if let Some(warning) = short_description_warning(&text) {
            eprintln!("{warning}");
        }

        let mut result = analyze(&text, &self.company, &self.role);

        if !self.no_save {
            let mut history = History::load(&ctx.store);
            result.id = history
                .save(result.clone())
                .context("Failed to save analysis to history")?;
            eprintln!("\u{2705} Saved analysis {}", result.id);
        }

        println!("{}", render(&result, self.format)?);
        Ok(())
    }

    fn read_description(&self) -> Result<String> {
        if let Some(path) = &self.jd_file {
            return fs::read_to_string(path)
                .with_context(|| format!("Failed to read job description: {}", path.display()));
        }

        let stdin = io::stdin();
        if stdin.is_terminal() {
            anyhow::bail!("No job description given; pass --jd-file or pipe text on stdin");
        }
        let mut text = String::new();
        stdin
            .lock()
            .read_to_string(&mut text)
            .context("Failed to read job description from stdin")?;
        Ok(text)
    }
}

/// Warning shown for descriptions that are too short to analyse well.
pub(crate) fn short_description_warning(text: &str) -> Option<String> {
    let chars = text.trim().chars().count();
    (chars < SHORT_JD_CHARS).then(|| {
        format!(
            "\u{26a0}\u{fe0f}  This job description is only {chars} characters; \
             paste the full posting for a better analysis."
        )
    })
}

/// Renders a report in the requested format.
pub(crate) fn render(result: &AnalysisResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => crate::data::to_yaml(result),
        OutputFormat::Json => {
            serde_json::to_string_pretty(result).context("Failed to serialize report")
        }
        OutputFormat::Text => Ok(report_text(result)),
    }
}
