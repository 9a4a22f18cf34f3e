//! Deterministic job-description analysis.
//!
//! [`analyze`] is a pure transformation from free text (plus optional company
//! and role) to an [`AnalysisResult`]: keyword scan, score, company profile,
//! round mapping and canned preparation content. It performs no I/O and has
//! no failure path.

use chrono::{DateTime, Utc};

use crate::data::AnalysisResult;

pub mod company;
pub mod content;
pub mod rounds;
pub mod score;
pub mod skills;

pub use company::company_profile;
pub use content::generate_content;
pub use rounds::round_mapping;
pub use score::{readiness_score, ScoreInputs};
pub use skills::{extract_skills, SkillCategory, SKILL_CATEGORIES};

/// Analyzes a job description using the current time for id and timestamp.
pub fn analyze(text: &str, company: &str, role: &str) -> AnalysisResult {
    analyze_at(text, company, role, Utc::now())
}

/// Analyzes a job description with an explicit creation time.
pub fn analyze_at(text: &str, company: &str, role: &str, now: DateTime<Utc>) -> AnalysisResult {
    let scan = extract_skills(text);

    let readiness_score = readiness_score(&ScoreInputs {
        category_count: scan.skills.len(),
        total_matches: scan.total_matches,
        company,
        role,
        text,
    });

    let company_profile = company_profile(company);
    let round_mapping = round_mapping(company_profile.as_ref(), &scan.skills);
    let content = generate_content(&scan.skills);

    tracing::debug!(
        categories = scan.skills.len(),
        matches = scan.total_matches,
        score = readiness_score,
        "Analyzed job description"
    );

    AnalysisResult {
        id: now.timestamp_millis().to_string(),
        created_at: now,
        company: company.to_string(),
        role: role.to_string(),
        jd_text: text.to_string(),
        extracted_skills: scan.skills,
        readiness_score,
        checklist: content.checklist,
        plan: content.plan,
        questions: content.questions,
        company_profile,
        round_mapping,
        skill_confidence_map: Default::default(),
        final_score: None,
    }
}
