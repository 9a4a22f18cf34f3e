//! Plain-text exports of an analysis.

use std::fmt::Write;

use super::AnalysisResult;

/// Sections that can be exported on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportSection {
    /// The day-by-day study plan.
    Plan,
    /// The round-wise checklist.
    Checklist,
    /// Likely interview questions.
    Questions,
    /// Everything, with a header.
    All,
}

/// Renders one section of `result` as plain text.
pub fn export_text(result: &AnalysisResult, section: ExportSection) -> String {
    match section {
        ExportSection::Plan => plan_text(result),
        ExportSection::Checklist => checklist_text(result),
        ExportSection::Questions => questions_text(result),
        ExportSection::All => full_report_text(result),
    }
}

/// The study plan, one block per day range.
pub fn plan_text(result: &AnalysisResult) -> String {
    let mut out = String::from("7-Day Preparation Plan\n");
    for day in &result.plan {
        let _ = write!(out, "\n{}: {}\n", day.day, day.focus);
        for task in &day.tasks {
            let _ = writeln!(out, "- {task}");
        }
    }
    out
}

/// The checklist grouped by round.
pub fn checklist_text(result: &AnalysisResult) -> String {
    let mut out = String::from("Round-wise Preparation Checklist\n");
    for (round, items) in &result.checklist {
        let _ = write!(out, "\n{round}\n");
        for item in items {
            let _ = writeln!(out, "[ ] {item}");
        }
    }
    out
}

/// Numbered interview questions.
pub fn questions_text(result: &AnalysisResult) -> String {
    let mut out = String::from("Likely Interview Questions\n\n");
    for (i, question) in result.questions.iter().enumerate() {
        let _ = writeln!(out, "{}. {question}", i + 1);
    }
    out
}

/// Header, skills, rounds and every section.
pub fn full_report_text(result: &AnalysisResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Placement Readiness Report");
    let _ = writeln!(out, "Generated: {}", result.created_at.format("%Y-%m-%d %H:%M UTC"));
    if !result.company.trim().is_empty() {
        let _ = writeln!(out, "Company: {}", result.company);
    }
    if !result.role.trim().is_empty() {
        let _ = writeln!(out, "Role: {}", result.role);
    }
    let _ = writeln!(out, "Readiness Score: {}/100", result.displayed_score());

    out.push_str("\nKey Skills\n");
    for (category, skills) in &result.extracted_skills {
        let _ = writeln!(out, "{category}: {}", skills.join(", "));
    }

    if let Some(profile) = &result.company_profile {
        let _ = write!(
            out,
            "\nCompany Profile\n{} ({}, {})\nFocus: {}\n",
            profile.name, profile.company_type, profile.size, profile.focus
        );
    }

    if !result.round_mapping.is_empty() {
        out.push_str("\nExpected Rounds\n");
        for round in &result.round_mapping {
            let _ = writeln!(out, "{} - {}", round.name, round.description);
            let _ = writeln!(out, "  Why: {}", round.rationale);
        }
    }

    for section in [plan_text(result), checklist_text(result), questions_text(result)] {
        out.push('\n');
        out.push_str(&section);
    }
    out
}
