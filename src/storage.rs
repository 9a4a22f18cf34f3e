//! Local key-value persistence.
//!
//! Everything the tool remembers between runs lives behind [`KeyValueStore`]:
//! string keys mapping to JSON documents. Reads are best-effort; a document
//! that cannot be parsed is logged and treated as absent.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

pub mod checklist;
pub mod history;
pub mod submission;

pub use checklist::{ChecklistItem, TestChecklist, CHECKLIST_ITEMS};
pub use history::History;
pub use submission::{BuildStep, FinalSubmission, SubmissionLinks};

/// Key holding the analysis history list.
pub const HISTORY_KEY: &str = "placement_readiness_history";
/// Key holding the pre-ship checklist state.
pub const CHECKLIST_KEY: &str = "prp_test_checklist";
/// Key holding the final submission record.
pub const SUBMISSION_KEY: &str = "prp_final_submission";

/// Storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("Storage I/O failed for key '{key}': {source}")]
    Io {
        /// Key being accessed.
        key: String,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// A value could not be serialized.
    #[error("Failed to serialize value for key '{key}': {source}")]
    Serialize {
        /// Key being written.
        key: String,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// Checklist id not in the fixed item list.
    #[error("Unknown checklist item: {0}")]
    UnknownChecklistItem(String),
}

/// Minimal string key-value store.
pub trait KeyValueStore: Send + Sync {
    /// Returns the raw value for `key`, if present.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`; removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Reads and parses a JSON document, degrading to `None` on any failure.
pub fn read_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            tracing::warn!("Failed to read {key}: {err}");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!("Ignoring malformed JSON under {key}: {err}");
            None
        }
    }
}

/// Serializes `value` as JSON and stores it under `key`.
pub fn write_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &raw)
}

/// Store backed by one `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `root`; the directory is created on first write.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Returns the directory holding the store files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(format!("{file_name}.json"))
    }

    fn io_error(key: &str, source: io::Error) -> StorageError {
        StorageError::Io {
            key: key.to_string(),
            source,
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Self::io_error(key, err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).map_err(|e| Self::io_error(key, e))?;
        fs::write(self.path_for(key), value).map_err(|e| Self::io_error(key, e))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Self::io_error(key, err)),
        }
    }
}

/// In-process store, used by tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map is still a valid map.
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries().remove(key);
        Ok(())
    }
}
