//! Analysis result types and their serialized forms.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::analyzer::score;

pub mod export;
pub mod yaml;

pub use export::*;
pub use yaml::*;

/// Matched keywords grouped by skill category name, in keyword-table order.
///
/// Keywords keep the casing of the canonical keyword table, not of the input.
pub type ExtractedSkills = IndexMap<String, Vec<String>>;

/// Preparation checklist keyed by round name.
pub type RoundChecklist = BTreeMap<String, Vec<String>>;

/// Heuristic company classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanyType {
    /// Large, well-known employer.
    Enterprise,
    /// Anything not on the known-enterprise list.
    #[serde(rename = "Startup / Mid-size")]
    Startup,
}

impl fmt::Display for CompanyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enterprise => write!(f, "Enterprise"),
            Self::Startup => write!(f, "Startup / Mid-size"),
        }
    }
}

/// Company profile derived from the company name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// Company name exactly as entered.
    pub name: String,
    /// Enterprise or startup classification.
    #[serde(rename = "type")]
    pub company_type: CompanyType,
    /// Rough headcount bracket.
    pub size: String,
    /// What the interview loop usually emphasises.
    pub focus: String,
}

/// One stage of the expected interview process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Round title, e.g. "Round 1: Online Assessment".
    pub name: String,
    /// What the round covers.
    pub description: String,
    /// Why the company runs this round.
    pub rationale: String,
}

/// A block of days in the study plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Day label, e.g. "Day 1-2".
    pub day: String,
    /// Theme for the block.
    pub focus: String,
    /// Tasks to complete.
    pub tasks: Vec<String>,
}

/// Self-assessed confidence in a single extracted skill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Comfortable with the skill.
    Know,
    /// Still needs practice.
    #[default]
    Practice,
}

impl Confidence {
    /// Returns the opposite confidence level.
    pub fn toggled(self) -> Self {
        match self {
            Self::Know => Self::Practice,
            Self::Practice => Self::Know,
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Know => write!(f, "know"),
            Self::Practice => write!(f, "practice"),
        }
    }
}

impl std::str::FromStr for Confidence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "know" => Ok(Self::Know),
            "practice" => Ok(Self::Practice),
            other => Err(format!("unknown confidence {other:?}, expected know or practice")),
        }
    }
}

/// Complete output of a single job-description analysis.
///
/// Only `id` and `createdAt` are required when reading; entries saved by
/// older versions lack later fields, which read as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Millisecond timestamp string, unique within the history.
    pub id: String,
    /// When the analysis ran.
    pub created_at: DateTime<Utc>,
    /// Company name as entered (may be empty).
    #[serde(default)]
    pub company: String,
    /// Role as entered (may be empty).
    #[serde(default)]
    pub role: String,
    /// The analysed job description.
    #[serde(default)]
    pub jd_text: String,
    /// Matched keywords by category.
    #[serde(default)]
    pub extracted_skills: ExtractedSkills,
    /// Formula score in [0, 100]; never changes after creation.
    #[serde(default)]
    pub readiness_score: u8,
    /// Round-wise preparation checklist.
    #[serde(default)]
    pub checklist: RoundChecklist,
    /// Study plan.
    #[serde(default)]
    pub plan: Vec<DayPlan>,
    /// Likely interview questions.
    #[serde(default)]
    pub questions: Vec<String>,
    /// Company classification, absent when no company was given.
    #[serde(default)]
    pub company_profile: Option<CompanyProfile>,
    /// Expected interview rounds.
    #[serde(default)]
    pub round_mapping: Vec<Round>,
    /// Per-skill confidence; missing skills count as `practice`.
    #[serde(default)]
    pub skill_confidence_map: BTreeMap<String, Confidence>,
    /// Score after interactive confidence toggles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_score: Option<u8>,
}

impl AnalysisResult {
    /// Returns the score currently shown to the user.
    pub fn displayed_score(&self) -> u8 {
        self.final_score.unwrap_or(self.readiness_score)
    }

    /// Returns every extracted keyword in category order.
    pub fn all_skills(&self) -> impl Iterator<Item = &str> {
        self.extracted_skills
            .values()
            .flat_map(|skills| skills.iter().map(String::as_str))
    }

    /// Returns true if `skill` was extracted (case-sensitive, canonical casing).
    pub fn has_skill(&self, skill: &str) -> bool {
        self.all_skills().any(|s| s == skill)
    }

    /// Returns the confidence recorded for `skill`.
    pub fn confidence_of(&self, skill: &str) -> Confidence {
        self.skill_confidence_map
            .get(skill)
            .copied()
            .unwrap_or_default()
    }

    /// Sets the confidence for `skill` and moves the displayed score.
    ///
    /// Practice to know adds 2 and know to practice subtracts 2; setting the
    /// current value again changes nothing. Returns `None` when the skill was
    /// not extracted by this analysis.
    pub fn set_confidence(&mut self, skill: &str, confidence: Confidence) -> Option<u8> {
        if !self.has_skill(skill) {
            return None;
        }

        let previous = self.confidence_of(skill);
        if previous != confidence {
            let delta = match confidence {
                Confidence::Know => score::CONFIDENCE_DELTA,
                Confidence::Practice => -score::CONFIDENCE_DELTA,
            };
            self.final_score = Some(score::adjust(self.displayed_score(), delta));
        }
        self.skill_confidence_map
            .insert(skill.to_string(), confidence);

        Some(self.displayed_score())
    }

    /// Flips the confidence for `skill`, returning the new level.
    pub fn toggle_confidence(&mut self, skill: &str) -> Option<Confidence> {
        let next = self.confidence_of(skill).toggled();
        self.set_confidence(skill, next).map(|_| next)
    }

    /// Skills the user has not yet marked as known, in category order.
    pub fn practice_skills(&self) -> Vec<&str> {
        self.all_skills()
            .filter(|s| self.confidence_of(s) == Confidence::Practice)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;

    #[test]
    fn company_type_serializes_with_display_names() {
        let json = serde_json::to_string(&CompanyType::Startup).unwrap();
        assert_eq!(json, r#""Startup / Mid-size""#);
        let back: CompanyType = serde_json::from_str(r#""Enterprise""#).unwrap();
        assert_eq!(back, CompanyType::Enterprise);
    }

    #[test]
    fn confidence_parse_is_case_insensitive() {
        assert_eq!("KNOW".parse::<Confidence>().unwrap(), Confidence::Know);
        assert_eq!("practice".parse::<Confidence>().unwrap(), Confidence::Practice);
        assert!("maybe".parse::<Confidence>().is_err());
    }

    #[test]
    fn toggle_moves_score_by_two_each_way() {
        let mut result = analyze("React and SQL", "Google", "");
        assert_eq!(result.displayed_score(), 55);

        assert_eq!(result.toggle_confidence("React"), Some(Confidence::Know));
        assert_eq!(result.displayed_score(), 57);
        assert_eq!(result.readiness_score, 55);

        assert_eq!(result.toggle_confidence("React"), Some(Confidence::Practice));
        assert_eq!(result.displayed_score(), 55);
    }

    #[test]
    fn setting_same_confidence_is_a_no_op() {
        let mut result = analyze("React", "", "");
        let before = result.displayed_score();
        assert_eq!(result.set_confidence("React", Confidence::Practice), Some(before));
        assert_eq!(result.displayed_score(), before);
    }

    #[test]
    fn unknown_skill_is_rejected() {
        let mut result = analyze("React", "", "");
        assert_eq!(result.toggle_confidence("Kubernetes"), None);
        assert!(result.skill_confidence_map.is_empty());
        assert!(result.final_score.is_none());
    }

    #[test]
    fn toggle_clamps_at_upper_bound() {
        let mut result = analyze("React", "", "");
        result.final_score = Some(99);
        result.toggle_confidence("React");
        assert_eq!(result.displayed_score(), 100);

        result.skill_confidence_map.clear();
        result.final_score = Some(100);
        result.toggle_confidence("React");
        assert_eq!(result.displayed_score(), 100);
    }

    #[test]
    fn toggle_clamps_at_lower_bound() {
        let mut result = analyze("React", "", "");
        result
            .skill_confidence_map
            .insert("React".to_string(), Confidence::Know);
        result.final_score = Some(1);
        result.toggle_confidence("React");
        assert_eq!(result.displayed_score(), 0);
    }

    #[test]
    fn practice_skills_excludes_known() {
        let mut result = analyze("React and SQL", "", "");
        result.toggle_confidence("SQL");
        assert_eq!(result.practice_skills(), vec!["React"]);
    }

    #[test]
    fn result_serializes_camel_case() {
        let result = analyze("React", "Acme", "SDE");
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("extractedSkills").is_some());
        assert!(value.get("readinessScore").is_some());
        assert!(value.get("finalScore").is_none());
        assert_eq!(value["companyProfile"]["type"], "Startup / Mid-size");
    }

    #[test]
    fn categories_keep_table_order_through_json() {
        let result = analyze("React, SQL, DSA and Docker", "", "");
        let expected = ["Core CS", "Web Development", "Data & DB", "Cloud & DevOps"];
        assert!(result.extracted_skills.keys().eq(expected));

        let json = serde_json::to_string(&result).unwrap();
        let back: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert!(back.extracted_skills.keys().eq(expected));
        assert_eq!(back.practice_skills(), vec!["DSA", "React", "SQL", "Docker"]);
    }
}
