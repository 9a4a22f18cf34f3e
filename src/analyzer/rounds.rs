//! Interview round templates.

use crate::data::{CompanyProfile, CompanyType, ExtractedSkills, Round};

const ENTERPRISE_ROUNDS: [(&str, &str, &str); 4] = [
    (
        "Round 1: Online Assessment",
        "Aptitude (Quants, Logical) + Medium DSA Problems",
        "Filters candidates based on raw problem-solving speed and accuracy.",
    ),
    (
        "Round 2: Technical Interview I",
        "Data Structures & Algorithms (Trees, Graphs, DP)",
        "Validates your deep understanding of efficient code and complexity.",
    ),
    (
        "Round 3: Technical Interview II",
        "System Design (LLD/HLD) + Core CS (OS/DBMS)",
        "Ensures you understand the underlying systems that power software.",
    ),
    (
        "Round 4: HR & Managerial",
        "Behavioral questions, Team fit, Salary negotiation",
        "Assesses soft skills and long-term alignment with company values.",
    ),
];

const STARTUP_ROUNDS: [(&str, &str, &str); 3] = [
    (
        "Round 1: Practical / Screening",
        "Take-home assignment or Live Coding (Practical)",
        "Tests your ability to build actual features and write clean code.",
    ),
    (
        "Round 2: Technical Deep Dive",
        "Stack-specific questions (React/Node/DB) + System Design basics",
        "Checks if you can architect and debug real-world systems.",
    ),
    (
        "Round 3: Culture & Founder Fit",
        "Discussion on ownership, past projects, and vision",
        "Startups need self-starters who align with their fast-paced culture.",
    ),
];

/// Builds the expected interview rounds for a company profile.
///
/// The template depends only on the profile type; `_skills` is accepted so
/// callers can pass the full analysis context.
pub fn round_mapping(profile: Option<&CompanyProfile>, _skills: &ExtractedSkills) -> Vec<Round> {
    let Some(profile) = profile else {
        return Vec::new();
    };

    let template: &[(&str, &str, &str)] = match profile.company_type {
        CompanyType::Enterprise => &ENTERPRISE_ROUNDS,
        CompanyType::Startup => &STARTUP_ROUNDS,
    };

    template
        .iter()
        .map(|(name, description, rationale)| Round {
            name: (*name).to_string(),
            description: (*description).to_string(),
            rationale: (*rationale).to_string(),
        })
        .collect()
}
