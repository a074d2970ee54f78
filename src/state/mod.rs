//! Persisted application state
//!
//! Preferences live in a string key-value store, one JSON value per key, the
//! way a browser's local storage holds them. [`AppState`] is loaded from and
//! saved to any [`KeyValueStore`] explicitly.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Storage key of the English-only preference
pub const ENGLISH_ONLY_KEY: &str = "wren-english-only";

/// State persistence errors
#[derive(Error, Debug)]
pub enum StateError {
    #[error("Failed to access state file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid state file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A string key-value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> Result<(), StateError>;
    fn remove(&mut self, key: &str) -> Result<(), StateError>;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StateError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StateError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store backed by a JSON object on disk, rewritten on every change
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`; a missing file is an empty store
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StateError> {
        let path = path.as_ref().to_path_buf();

        let entries = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).map_err(|source| StateError::Json {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StateError::Io { path, source }),
        };

        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StateError> {
        let io_err = |source| StateError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let content =
            serde_json::to_string_pretty(&self.entries).map_err(|source| StateError::Json {
                path: self.path.clone(),
                source,
            })?;
        fs::write(&self.path, content).map_err(io_err)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StateError> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StateError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

/// User preferences shared across the site
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AppState {
    /// Only list English content
    pub english_only: bool,
}

impl AppState {
    /// Load state from `store`; missing or unreadable values fall back to
    /// their defaults
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let mut state = Self::default();

        if let Some(raw) = store.get(ENGLISH_ONLY_KEY) {
            match serde_json::from_str::<Value>(&raw) {
                Ok(Value::Bool(value)) => state.english_only = value,
                _ => tracing::warn!(
                    "Ignoring invalid value {:?} for {}",
                    raw,
                    ENGLISH_ONLY_KEY
                ),
            }
        }

        state
    }

    /// Write state to `store`
    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), StateError> {
        store.set(ENGLISH_ONLY_KEY, self.english_only.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_when_empty() {
        let store = MemoryStore::new();
        assert_eq!(AppState::load(&store), AppState::default());
        assert!(!AppState::load(&store).english_only);
    }

    #[test]
    fn test_save_and_load_memory() {
        let mut store = MemoryStore::new();
        let state = AppState { english_only: true };
        state.save(&mut store).unwrap();

        assert_eq!(store.get(ENGLISH_ONLY_KEY).as_deref(), Some("true"));
        assert_eq!(AppState::load(&store), state);
    }

    #[test]
    fn test_invalid_value_falls_back_to_default() {
        let mut store = MemoryStore::new();
        store.set(ENGLISH_ONLY_KEY, "\"yes please\"".to_string()).unwrap();
        assert!(!AppState::load(&store).english_only);

        store.set(ENGLISH_ONLY_KEY, "{not json".to_string()).unwrap();
        assert!(!AppState::load(&store).english_only);
    }

    #[test]
    fn test_file_store_persists_across_opens() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".wren").join("storage.json");

        let mut store = FileStore::open(&path).unwrap();
        AppState { english_only: true }.save(&mut store).unwrap();
        assert!(path.exists());

        let reopened = FileStore::open(&path).unwrap();
        assert!(AppState::load(&reopened).english_only);
    }

    #[test]
    fn test_file_store_remove() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("storage.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("a", "1".to_string()).unwrap();
        store.remove("a").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("a"), None);
    }

    #[test]
    fn test_file_store_rejects_corrupt_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("storage.json");
        fs::write(&path, "[1, 2").unwrap();

        let err = FileStore::open(&path).unwrap_err();
        assert!(matches!(err, StateError::Json { .. }));
    }
}
