//! Pre-ship verification checklist.

use std::collections::BTreeMap;

use super::{read_json, write_json, KeyValueStore, StorageError, CHECKLIST_KEY};

/// A single manual verification step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistItem {
    /// Stable identifier used as the storage key.
    pub id: &'static str,
    /// What must hold.
    pub label: &'static str,
    /// How to verify it.
    pub hint: &'static str,
}

/// The ten items that gate shipping.
pub const CHECKLIST_ITEMS: [ChecklistItem; 10] = [
    ChecklistItem {
        id: "jd-validation",
        label: "JD required validation works",
        hint: "Try analyzing with an empty JD. The analysis should be refused.",
    },
    ChecklistItem {
        id: "short-jd-warning",
        label: "Short JD warning shows for <200 chars",
        hint: "Analyze a short text. Check the warning message.",
    },
    ChecklistItem {
        id: "skills-extraction",
        label: "Skills extraction groups correctly",
        hint: "Verify extraction of Core CS, Languages, etc.",
    },
    ChecklistItem {
        id: "round-mapping",
        label: "Round mapping changes based on company + skills",
        hint: "Test \"Google\" vs \"Startup\". Rounds should differ.",
    },
    ChecklistItem {
        id: "score-deterministic",
        label: "Score calculation is deterministic",
        hint: "Same inputs should yield same base score.",
    },
    ChecklistItem {
        id: "skill-toggles",
        label: "Skill toggles update score live",
        hint: "Toggle skills and watch score change.",
    },
    ChecklistItem {
        id: "changes-persist",
        label: "Changes persist after restart",
        hint: "Run history show again. Toggles/score should remain.",
    },
    ChecklistItem {
        id: "history-saves",
        label: "History saves and loads correctly",
        hint: "Check history list for previous runs.",
    },
    ChecklistItem {
        id: "export-buttons",
        label: "Export produces the correct content",
        hint: "Export the plan and read it back.",
    },
    ChecklistItem {
        id: "no-console-errors",
        label: "No errors on core commands",
        hint: "Run with RUST_LOG=warn and check stderr.",
    },
];

/// Checked state of the pre-ship checklist, persisted under [`CHECKLIST_KEY`].
pub struct TestChecklist<'a> {
    store: &'a dyn KeyValueStore,
    checked: BTreeMap<String, bool>,
}

impl<'a> TestChecklist<'a> {
    /// Loads the checklist; malformed data reads as nothing checked.
    pub fn load(store: &'a dyn KeyValueStore) -> Self {
        let checked = read_json(store, CHECKLIST_KEY).unwrap_or_default();
        Self { store, checked }
    }

    /// Returns true if `id` is checked.
    pub fn is_checked(&self, id: &str) -> bool {
        self.checked.get(id).copied().unwrap_or(false)
    }

    /// Flips item `id` and persists, returning its new state.
    pub fn toggle(&mut self, id: &str) -> Result<bool, StorageError> {
        let item = find_item(id)?;
        let next = !self.is_checked(item.id);
        self.checked.insert(item.id.to_string(), next);
        write_json(self.store, CHECKLIST_KEY, &self.checked)?;
        Ok(next)
    }

    /// Clears every item and removes the key.
    pub fn reset(&mut self) -> Result<(), StorageError> {
        self.checked.clear();
        self.store.remove(CHECKLIST_KEY)
    }

    /// Number of known items currently checked.
    pub fn passed_count(&self) -> usize {
        CHECKLIST_ITEMS
            .iter()
            .filter(|item| self.is_checked(item.id))
            .count()
    }

    /// Total number of items.
    pub fn total(&self) -> usize {
        CHECKLIST_ITEMS.len()
    }

    /// True only when every item is checked; this unlocks shipping.
    pub fn is_complete(&self) -> bool {
        self.passed_count() == CHECKLIST_ITEMS.len()
    }
}

fn find_item(id: &str) -> Result<&'static ChecklistItem, StorageError> {
    CHECKLIST_ITEMS
        .iter()
        .find(|item| item.id == id)
        .ok_or_else(|| StorageError::UnknownChecklistItem(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn check_all(checklist: &mut TestChecklist<'_>) {
        for item in &CHECKLIST_ITEMS {
            if !checklist.is_checked(item.id) {
                checklist.toggle(item.id).unwrap();
            }
        }
    }

    #[test]
    fn starts_locked() {
        let store = MemoryStore::new();
        let checklist = TestChecklist::load(&store);
        assert_eq!(checklist.passed_count(), 0);
        assert!(!checklist.is_complete());
    }

    #[test]
    fn toggle_persists() {
        let store = MemoryStore::new();
        let mut checklist = TestChecklist::load(&store);
        assert!(checklist.toggle("jd-validation").unwrap());
        assert!(TestChecklist::load(&store).is_checked("jd-validation"));
        assert!(!checklist.toggle("jd-validation").unwrap());
        assert!(!TestChecklist::load(&store).is_checked("jd-validation"));
    }

    #[test]
    fn unknown_item_is_rejected() {
        let store = MemoryStore::new();
        let mut checklist = TestChecklist::load(&store);
        assert!(matches!(
            checklist.toggle("deploy-friday"),
            Err(StorageError::UnknownChecklistItem(_))
        ));
    }

    #[test]
    fn ten_of_ten_unlocks_and_nine_does_not() {
        let store = MemoryStore::new();
        let mut checklist = TestChecklist::load(&store);
        check_all(&mut checklist);
        assert_eq!(checklist.passed_count(), 10);
        assert!(checklist.is_complete());

        checklist.toggle("export-buttons").unwrap();
        assert_eq!(checklist.passed_count(), 9);
        assert!(!checklist.is_complete());
    }

    #[test]
    fn unknown_stored_ids_do_not_count() {
        let store = MemoryStore::new();
        let mut raw: BTreeMap<String, bool> = CHECKLIST_ITEMS
            .iter()
            .skip(1)
            .map(|item| (item.id.to_string(), true))
            .collect();
        raw.insert("legacy-item".to_string(), true);
        write_json(&store, CHECKLIST_KEY, &raw).unwrap();

        let checklist = TestChecklist::load(&store);
        assert_eq!(checklist.passed_count(), 9);
        assert!(!checklist.is_complete());
    }

    #[test]
    fn reset_clears_everything() {
        let store = MemoryStore::new();
        let mut checklist = TestChecklist::load(&store);
        check_all(&mut checklist);
        checklist.reset().unwrap();
        assert_eq!(checklist.passed_count(), 0);
        assert!(store.get(CHECKLIST_KEY).unwrap().is_none());
    }

    #[test]
    fn malformed_state_reads_as_empty() {
        let store = MemoryStore::new();
        store.set(CHECKLIST_KEY, "not json").unwrap();
        assert_eq!(TestChecklist::load(&store).passed_count(), 0);
    }
}
