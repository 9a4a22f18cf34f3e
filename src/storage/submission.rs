//! Final submission links and ship status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{read_json, write_json, KeyValueStore, StorageError, SUBMISSION_KEY};

/// The three artifact links required to ship.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionLinks {
    /// Hosted project link.
    #[serde(default)]
    pub lovable: String,
    /// Source repository.
    #[serde(default)]
    pub github: String,
    /// Live deployment.
    #[serde(default)]
    pub deployed: String,
}

impl SubmissionLinks {
    /// Every link must be present and start with `http`.
    pub fn are_valid(&self) -> bool {
        [&self.lovable, &self.github, &self.deployed]
            .iter()
            .all(|link| link.starts_with("http"))
    }
}

/// Persisted submission record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalSubmission {
    /// Artifact links.
    #[serde(default)]
    pub links: SubmissionLinks,
    /// True once the checklist is complete and the links are valid.
    #[serde(default)]
    pub is_shipped: bool,
    /// Last time the record was written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One line of the build progress view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildStep {
    /// 1-based step number.
    pub number: u8,
    /// Step title.
    pub label: &'static str,
    /// Whether the step counts as done.
    pub done: bool,
}

const BUILD_STEPS: [&str; 8] = [
    "Project Setup & Routing",
    "Premium Design System",
    "Dashboard & Layout",
    "Job Analysis Engine",
    "Company Intelligence",
    "History Persistence",
    "Pre-Ship Testing",
    "Final Proof & Links",
];

impl FinalSubmission {
    /// Loads the record; malformed data reads as an empty submission.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        read_json(store, SUBMISSION_KEY).unwrap_or_default()
    }

    /// Replaces the links, recomputes the ship status and persists.
    pub fn update(
        &mut self,
        store: &dyn KeyValueStore,
        links: SubmissionLinks,
        tests_complete: bool,
    ) -> Result<(), StorageError> {
        self.links = links;
        self.refresh(store, tests_complete)
    }

    /// Recomputes the ship status from the current links and persists.
    pub fn refresh(
        &mut self,
        store: &dyn KeyValueStore,
        tests_complete: bool,
    ) -> Result<(), StorageError> {
        self.is_shipped = tests_complete && self.links.are_valid();
        self.updated_at = Some(Utc::now());
        tracing::debug!(shipped = self.is_shipped, "Updated final submission");
        write_json(store, SUBMISSION_KEY, self)
    }

    /// Progress over the eight build steps; the first six are always done.
    pub fn build_steps(&self, tests_complete: bool) -> Vec<BuildStep> {
        BUILD_STEPS
            .iter()
            .zip(1_u8..)
            .map(|(label, number)| BuildStep {
                number,
                label: *label,
                done: match number {
                    7 => tests_complete,
                    8 => self.is_shipped,
                    _ => true,
                },
            })
            .collect()
    }

    /// Copy-ready submission text, only available once shipped.
    pub fn submission_text(&self) -> Option<String> {
        if !self.is_shipped {
            return None;
        }

        let rule = "-".repeat(42);
        Some(format!(
            "{rule}\n\
             Placement Readiness Platform — Final Submission\n\
             \n\
             Lovable Project: {}\n\
             GitHub Repository: {}\n\
             Live Deployment: {}\n\
             \n\
             Core Capabilities:\n\
             - JD skill extraction (deterministic)\n\
             - Round mapping engine\n\
             - 7-day prep plan\n\
             - Interactive readiness scoring\n\
             - History persistence\n\
             {rule}",
            self.links.lovable, self.links.github, self.links.deployed
        ))
    }
}
