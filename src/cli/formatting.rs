//! Shared display formatting for CLI commands.
//!
//! Pure functions so output shapes can be unit tested without a store.

use crate::analyzer::score::MAX_SCORE;
use crate::data::{AnalysisResult, Confidence};

/// Width of the score bar in cells.
const BAR_WIDTH: usize = 20;

/// Renders a score as a fixed-width bar, e.g. `[##########----------] 50/100`.
pub(crate) fn score_bar(score: u8) -> String {
    let score = score.min(MAX_SCORE);
    let filled = usize::from(score) * BAR_WIDTH / usize::from(MAX_SCORE);
    format!(
        "[{}{}] {score}/{MAX_SCORE}",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled)
    )
}

/// Returns a checkbox marker.
pub(crate) fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Returns the marker shown next to a skill.
pub(crate) fn confidence_marker(confidence: Confidence) -> &'static str {
    match confidence {
        Confidence::Know => "\u{2705} know",
        Confidence::Practice => "\u{1f4dd} practice",
    }
}

/// One-line history summary: id, date, company/role and displayed score.
pub(crate) fn history_line(result: &AnalysisResult) -> String {
    let target = match (result.company.trim(), result.role.trim()) {
        ("", "") => "(no company or role)".to_string(),
        (company, "") => company.to_string(),
        ("", role) => role.to_string(),
        (company, role) => format!("{company} - {role}"),
    };
    format!(
        "{}  {}  {:>3}/100  {target}",
        result.id,
        result.created_at.format("%Y-%m-%d %H:%M"),
        result.displayed_score()
    )
}

/// Multi-line text report for `analyze --format text` and `history show`.
pub(crate) fn report_text(result: &AnalysisResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("Analysis {}\n", result.id));
    out.push_str(&format!(
        "Readiness: {}\n",
        score_bar(result.displayed_score())
    ));
    if result.final_score.is_some() {
        out.push_str(&format!("Base score: {}\n", result.readiness_score));
    }

    out.push_str("\nSkills\n");
    for (category, skills) in &result.extracted_skills {
        out.push_str(&format!("  {category}\n"));
        for skill in skills {
            out.push_str(&format!(
                "    {skill:<24} {}\n",
                confidence_marker(result.confidence_of(skill))
            ));
        }
    }

    if let Some(profile) = &result.company_profile {
        out.push_str(&format!(
            "\nCompany: {} ({}, {})\n  Focus: {}\n",
            profile.name, profile.company_type, profile.size, profile.focus
        ));
    }

    if !result.round_mapping.is_empty() {
        out.push_str("\nRounds\n");
        for round in &result.round_mapping {
            out.push_str(&format!("  {}\n    {}\n", round.name, round.description));
        }
    }

    let practice = result.practice_skills();
    if !practice.is_empty() {
        let focus: Vec<&str> = practice.into_iter().take(3).collect();
        out.push_str(&format!("\nNext: practice {}\n", focus.join(", ")));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze_at;
    use chrono::{TimeZone, Utc};

    fn sample(company: &str, role: &str) -> AnalysisResult {
        let now = Utc.with_ymd_and_hms(2026, 5, 4, 8, 15, 0).unwrap();
        analyze_at("React and SQL", company, role, now)
    }

    #[test]
    fn score_bar_scales_to_width() {
        assert_eq!(score_bar(0), "[--------------------] 0/100");
        assert_eq!(score_bar(55), "[###########---------] 55/100");
        assert_eq!(score_bar(100), "[####################] 100/100");
    }

    #[test]
    fn score_bar_clamps_out_of_range() {
        assert_eq!(score_bar(250), score_bar(100));
    }

    #[test]
    fn checkbox_markers() {
        assert_eq!(checkbox(true), "[x]");
        assert_eq!(checkbox(false), "[ ]");
    }

    #[test]
    fn history_line_variants() {
        let line = history_line(&sample("Google", "SDE"));
        assert!(line.contains("2026-05-04 08:15"));
        assert!(line.ends_with("65/100  Google - SDE"));
        assert!(history_line(&sample("", "")).ends_with("(no company or role)"));
        assert!(history_line(&sample("", "SDE")).ends_with("SDE"));
    }

    #[test]
    fn report_lists_skills_and_next_steps() {
        let mut result = sample("Google", "");
        result.toggle_confidence("SQL");
        let report = report_text(&result);
        assert!(report.contains("Readiness: [#########"));
        assert!(report.contains("57/100"));
        assert!(report.contains("Base score: 55"));
        assert!(report.contains("Web Development"));
        assert!(report.contains("Company: Google (Enterprise, 2000+ Employees)"));
        assert!(report.contains("Next: practice React"));
    }
}
