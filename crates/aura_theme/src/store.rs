//! Persistent key-value storage for the selected theme name
//!
//! [`ThemeState`](crate::ThemeState) only needs `get`/`set` by string key,
//! which is all a platform store (browser `localStorage`, mobile key-value
//! storage, a config file) offers. Two implementations ship here: an
//! in-memory map and a TOML file on disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::error::ThemeError;

/// Storage key under which the selected theme name is persisted
pub const THEME_STORAGE_KEY: &str = "theme";

pub trait ThemeStore: Send + Sync {
    /// Read the value stored under `key`, if any
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Store `value` under `key`, replacing any previous value
    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// Volatile store, for tests and embedders that persist elsewhere
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<FxHashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a single entry
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.entries.write().unwrap().insert(key.into(), value.into());
        store
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.entries.read().unwrap().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Flat `key = "value"` TOML file
///
/// The file is read on every access and rewritten on every save; a missing
/// file behaves like an empty store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<IndexMap<String, String>, ThemeError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(IndexMap::new()),
            Err(source) => {
                return Err(ThemeError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        toml::from_str(&content).map_err(|source| ThemeError::ConfigParse {
            path: self.path.clone(),
            source,
        })
    }
}

impl ThemeStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.read_entries()?.shift_remove(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        let content = toml::to_string(&entries)?;

        let io_err = |source| ThemeError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(&self.path, content).map_err(io_err)?;
        tracing::debug!("FileStore: saved {} to {}", key, self.path.display());
        Ok(())
    }
}
