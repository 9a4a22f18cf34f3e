//! Saved analyses, newest first.

use serde_json::Value;

use super::{read_json, write_json, KeyValueStore, StorageError, HISTORY_KEY};
use crate::data::AnalysisResult;

/// Analysis history persisted under [`HISTORY_KEY`].
pub struct History<'a> {
    store: &'a dyn KeyValueStore,
    entries: Vec<AnalysisResult>,
}

impl<'a> History<'a> {
    /// Loads the history, dropping anything that does not look like an analysis.
    pub fn load(store: &'a dyn KeyValueStore) -> Self {
        let raw: Vec<Value> = match read_json::<Value>(store, HISTORY_KEY) {
            Some(Value::Array(items)) => items,
            Some(_) => {
                tracing::warn!("History is not a list; starting empty");
                Vec::new()
            }
            None => Vec::new(),
        };

        let total = raw.len();
        let entries: Vec<AnalysisResult> = raw
            .into_iter()
            .filter(has_required_shape)
            .filter_map(|item| match serde_json::from_value(item) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    tracing::warn!("Skipping unreadable history entry: {err}");
                    None
                }
            })
            .collect();

        if entries.len() != total {
            tracing::warn!(
                "Discarded {} of {total} history entries",
                total - entries.len()
            );
        }

        Self { store, entries }
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[AnalysisResult] {
        &self.entries
    }

    /// Returns true when nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the most recent analysis.
    pub fn latest(&self) -> Option<&AnalysisResult> {
        self.entries.first()
    }

    /// Looks up an analysis by id.
    pub fn get(&self, id: &str) -> Option<&AnalysisResult> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Prepends `result` and persists; returns the id it was stored under.
    ///
    /// Ids are millisecond timestamps, so a result whose id already exists is
    /// moved forward one millisecond at a time until it is unique.
    pub fn save(&mut self, mut result: AnalysisResult) -> Result<String, StorageError> {
        while self.get(&result.id).is_some() {
            result.id = match result.id.parse::<i64>().ok().and_then(|m| m.checked_add(1)) {
                Some(millis) => millis.to_string(),
                None => format!("{}-1", result.id),
            };
        }

        let id = result.id.clone();
        self.entries.insert(0, result);
        self.persist()?;
        tracing::debug!(id = %id, "Saved analysis to history");
        Ok(id)
    }

    /// Replaces the stored entry with the same id; returns false if none matched.
    pub fn update(&mut self, result: AnalysisResult) -> Result<bool, StorageError> {
        let Some(slot) = self.entries.iter_mut().find(|entry| entry.id == result.id) else {
            return Ok(false);
        };
        *slot = result;
        self.persist()?;
        Ok(true)
    }

    /// Removes the entry with `id`; returns false if none matched.
    pub fn delete(&mut self, id: &str) -> Result<bool, StorageError> {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        if self.entries.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Drops every entry and removes the key.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.entries.clear();
        self.store.remove(HISTORY_KEY)
    }

    fn persist(&self) -> Result<(), StorageError> {
        write_json(self.store, HISTORY_KEY, &self.entries)
    }
}

/// An entry needs an id, a creation time, and skills or confidence data.
fn has_required_shape(item: &Value) -> bool {
    let has_id = item
        .get("id")
        .and_then(Value::as_str)
        .is_some_and(|id| !id.is_empty());
    let has_created = item.get("createdAt").is_some_and(|v| !v.is_null());
    let has_skills = ["extractedSkills", "skillConfidenceMap"]
        .iter()
        .any(|field| item.get(*field).is_some_and(Value::is_object));

    has_id && has_created && has_skills
}
