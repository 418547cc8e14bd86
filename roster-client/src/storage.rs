//! Session storage capability
//!
//! A flat string key-value store standing in for browser `localStorage`.
//! Views receive it as `Arc<dyn SessionStore>` instead of reaching for a
//! global.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};

use crate::{ClientError, ClientResult};

/// Key-value storage holding the session
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> ClientResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> ClientResult<()>;
    fn remove(&self, key: &str) -> ClientResult<()>;
    fn clear(&self) -> ClientResult<()>;
}

fn poisoned<E>(_: E) -> ClientError {
    ClientError::Storage("storage lock poisoned".to_string())
}

/// In-memory store, lost when dropped
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RwLock::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> ClientResult<Option<String>> {
        Ok(self.entries.read().map_err(poisoned)?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ClientResult<()> {
        self.entries
            .write()
            .map_err(poisoned)?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> ClientResult<()> {
        self.entries.write().map_err(poisoned)?.remove(key);
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        self.entries.write().map_err(poisoned)?.clear();
        Ok(())
    }
}

/// JSON-file store that survives restarts
///
/// Every write rewrites the whole file; the map is tiny.
#[derive(Debug)]
pub struct FileStore {
    file_path: PathBuf,
    // 串行化读-改-写
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load(&self) -> ClientResult<HashMap<String, String>> {
        if !self.file_path.exists() {
            return Ok(HashMap::new());
        }
        let content = std::fs::read_to_string(&self.file_path)?;
        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, entries: &HashMap<String, String>) -> ClientResult<()> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.file_path, content)?;
        Ok(())
    }

    fn modify(&self, f: impl FnOnce(&mut HashMap<String, String>)) -> ClientResult<()> {
        let _guard = self.lock.lock().map_err(poisoned)?;
        let mut entries = self.load()?;
        f(&mut entries);
        self.save(&entries)
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> ClientResult<Option<String>> {
        let _guard = self.lock.lock().map_err(poisoned)?;
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> ClientResult<()> {
        self.modify(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> ClientResult<()> {
        self.modify(|entries| {
            entries.remove(key);
        })
    }

    fn clear(&self) -> ClientResult<()> {
        let _guard = self.lock.lock().map_err(poisoned)?;
        if self.file_path.exists() {
            std::fs::remove_file(&self.file_path)?;
            tracing::debug!(path = %self.file_path.display(), "Session file cleared");
        }
        Ok(())
    }
}
