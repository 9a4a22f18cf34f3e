//! Settings and configuration utilities.
//!
//! Settings are read from $HOME/.placement-prep/settings.json. The `env` map
//! acts as a fallback for environment variables and `dataDir` relocates the
//! local store.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the store directory.
pub const DATA_DIR_ENV: &str = "PLACEMENT_PREP_DATA_DIR";

/// Directory name under the home directory.
const APP_DIR: &str = ".placement-prep";

/// Settings loaded from $HOME/.placement-prep/settings.json.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Environment variable overrides.
    #[serde(default)]
    pub env: HashMap<String, String>,

    /// Store directory, used when neither the flag nor the variable is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Settings {
    /// Loads settings from the default location.
    pub fn load() -> Result<Self> {
        let settings_path = Self::get_settings_path()?;
        Self::load_from_path(&settings_path)
    }

    /// Loads settings from a specific path; a missing file yields defaults.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        serde_json::from_str::<Self>(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }

    /// Returns the default settings path.
    pub fn get_settings_path() -> Result<PathBuf> {
        Ok(app_home()?.join("settings.json"))
    }

    /// Returns an environment variable with fallback to settings.
    pub fn get_env_var(&self, key: &str) -> Option<String> {
        env::var(key).ok().or_else(|| self.env.get(key).cloned())
    }

    /// Resolves the store directory.
    ///
    /// Order: explicit override, [`DATA_DIR_ENV`] (environment, then the
    /// settings `env` map), the settings `dataDir`, then
    /// `$HOME/.placement-prep/store`.
    pub fn resolve_data_dir(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = explicit {
            return Ok(dir.to_path_buf());
        }
        if let Some(dir) = self.get_env_var(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        Ok(app_home()?.join("store"))
    }
}

/// Returns $HOME/.placement-prep.
fn app_home() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().context("Failed to determine home directory")?;
    Ok(home_dir.join(APP_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    /// Serializes tests that touch process environment.
    static ENV_TEST_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    struct EnvGuard {
        _lock: std::sync::MutexGuard<'static, ()>,
        vars: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn new() -> Self {
            let lock = ENV_TEST_LOCK
                .get_or_init(|| Mutex::new(()))
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            Self {
                _lock: lock,
                vars: Vec::new(),
            }
        }

        fn set(&mut self, key: &str, value: &str) {
            self.vars.push((key.to_string(), env::var(key).ok()));
            env::set_var(key, value);
        }

        fn remove(&mut self, key: &str) {
            self.vars.push((key.to_string(), env::var(key).ok()));
            env::remove_var(key);
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, original_value) in self.vars.drain(..).rev() {
                match original_value {
                    Some(value) => env::set_var(&key, value),
                    None => env::remove_var(&key),
                }
            }
        }
    }

    #[test]
    fn missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load_from_path(temp_dir.path().join("nope.json")).unwrap();
        assert!(settings.env.is_empty());
        assert!(settings.data_dir.is_none());
    }

    #[test]
    fn settings_load_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let settings_path = temp_dir.path().join("settings.json");
        fs::write(
            &settings_path,
            r#"{ "env": { "TEST_VAR": "test_value" }, "dataDir": "/srv/prep" }"#,
        )
        .unwrap();

        let settings = Settings::load_from_path(&settings_path).unwrap();
        assert_eq!(settings.env.get("TEST_VAR").unwrap(), "test_value");
        assert_eq!(settings.data_dir, Some(PathBuf::from("/srv/prep")));
    }

    #[test]
    fn malformed_settings_are_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let settings_path = temp_dir.path().join("settings.json");
        fs::write(&settings_path, "{ env: ").unwrap();
        assert!(Settings::load_from_path(&settings_path).is_err());
    }

    #[test]
    fn explicit_dir_wins() {
        let mut guard = EnvGuard::new();
        guard.set(DATA_DIR_ENV, "/from/env");
        let settings = Settings::default();
        let dir = settings
            .resolve_data_dir(Some(Path::new("/from/flag")))
            .unwrap();
        assert_eq!(dir, PathBuf::from("/from/flag"));
    }

    #[test]
    fn environment_beats_settings() {
        let mut guard = EnvGuard::new();
        guard.set(DATA_DIR_ENV, "/from/env");
        let settings = Settings {
            data_dir: Some(PathBuf::from("/from/settings")),
            ..Default::default()
        };
        assert_eq!(
            settings.resolve_data_dir(None).unwrap(),
            PathBuf::from("/from/env")
        );
    }

    #[test]
    fn settings_env_map_is_a_fallback() {
        let mut guard = EnvGuard::new();
        guard.remove(DATA_DIR_ENV);
        let mut settings = Settings {
            data_dir: Some(PathBuf::from("/from/settings")),
            ..Default::default()
        };
        assert_eq!(
            settings.resolve_data_dir(None).unwrap(),
            PathBuf::from("/from/settings")
        );

        settings
            .env
            .insert(DATA_DIR_ENV.to_string(), "/from/map".to_string());
        assert_eq!(
            settings.resolve_data_dir(None).unwrap(),
            PathBuf::from("/from/map")
        );
    }
}
