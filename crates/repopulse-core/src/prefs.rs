//! Key-value preference storage.
//!
//! [`Preferences`] is a small string-keyed store behind the session
//! properties. [`JsonPreferences`] persists to a JSON file in the
//! platform config directory; [`MemoryPreferences`] backs tests and
//! ephemeral sessions.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use anyhow::{Context, Result};
use tracing::warn;

const APP_NAME: &str = "repopulse";
const PREFS_FILE: &str = "preferences.json";

/// String-keyed preference storage.
///
/// Setters do not return errors; implementations absorb their own I/O
/// failures so a full disk or read-only config directory degrades to
/// in-memory behavior instead of failing the session.
pub trait Preferences: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Preferences persisted as a pretty-printed JSON file.
#[derive(Debug)]
pub struct JsonPreferences {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl JsonPreferences {
    /// Open the preference file at `path`, creating an empty store
    /// when the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read preferences file: {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse preferences file: {}", path.display()))?
        } else {
            HashMap::new()
        };
        Ok(Self { path, values })
    }

    /// Open the preference file at the platform default location.
    pub fn open_default() -> Result<Self> {
        Self::open(Self::default_path()?)
    }

    /// The platform default preference file path, e.g.
    /// `~/.config/repopulse/preferences.json` on Linux.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not find config directory")?;
        Ok(config_dir.join(APP_NAME).join(PREFS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(&self.values)
            .context("Failed to serialize preferences")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write preferences file: {}", self.path.display()))?;
        Ok(())
    }
}

impl Preferences for JsonPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
        if let Err(e) = self.persist() {
            warn!(key, error = %e, "Failed to write preferences file");
        }
    }

    fn remove(&mut self, key: &str) {
        if self.values.remove(key).is_some() {
            if let Err(e) = self.persist() {
                warn!(key, error = %e, "Failed to write preferences file");
            }
        }
    }
}

/// In-memory preferences for tests and ephemeral sessions.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Preferences for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_set_and_get() {
        let mut prefs = MemoryPreferences::new();
        prefs.set("alias", "brminnick");
        assert_eq!(prefs.get("alias").as_deref(), Some("brminnick"));
    }

    #[test]
    fn test_memory_get_absent_is_none() {
        let prefs = MemoryPreferences::new();
        assert_eq!(prefs.get("alias"), None);
    }

    #[test]
    fn test_memory_remove() {
        let mut prefs = MemoryPreferences::new();
        prefs.set("alias", "brminnick");
        prefs.remove("alias");
        assert_eq!(prefs.get("alias"), None);
    }

    #[test]
    fn test_memory_clones_share_state() {
        let mut prefs = MemoryPreferences::new();
        let clone = prefs.clone();
        prefs.set("alias", "brminnick");
        assert_eq!(clone.get("alias").as_deref(), Some("brminnick"));
    }

    #[test]
    fn test_json_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        let mut prefs = JsonPreferences::open(&path).unwrap();
        prefs.set("alias", "brminnick");
        prefs.set("name", "Brandon Minnick");
        drop(prefs);

        let reopened = JsonPreferences::open(&path).unwrap();
        assert_eq!(reopened.get("alias").as_deref(), Some("brminnick"));
        assert_eq!(reopened.get("name").as_deref(), Some("Brandon Minnick"));
    }

    #[test]
    fn test_json_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = JsonPreferences::open(dir.path().join("preferences.json")).unwrap();
        assert_eq!(prefs.get("alias"), None);
    }

    #[test]
    fn test_json_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        let mut prefs = JsonPreferences::open(&path).unwrap();
        prefs.set("alias", "brminnick");
        prefs.remove("alias");
        drop(prefs);

        let reopened = JsonPreferences::open(&path).unwrap();
        assert_eq!(reopened.get("alias"), None);
    }

    #[test]
    fn test_json_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let mut prefs = JsonPreferences::open(&path).unwrap();
        prefs.set("alias", "brminnick");

        assert!(path.exists());
    }
}
