//! Key-value store with automatic serialization.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::StorageError;

enum Backend {
    /// Ephemeral map, nothing touches disk.
    Memory,
    /// JSON file rewritten after every mutating call.
    File(PathBuf),
}

/// Type-safe device storage.
///
/// Values are stored as JSON under string keys. Every entry is opaque to
/// the store itself; callers decide what to persist and when.
///
/// The store is used from the single UI-processing thread and keeps its
/// map behind a `RefCell`, so reads and writes take `&self`. It is
/// intentionally not `Sync`.
pub struct Storage {
    entries: RefCell<BTreeMap<String, serde_json::Value>>,
    backend: Backend,
}

impl Storage {
    /// Create an in-memory store. Used by tests and ephemeral sessions.
    pub fn in_memory() -> Self {
        Self {
            entries: RefCell::new(BTreeMap::new()),
            backend: Backend::Memory,
        }
    }

    /// Open a file-backed store, loading any existing entries.
    ///
    /// A missing file is treated as an empty store; it is created on the
    /// first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(StorageError::OpenError(format!("{}: {}", path.display(), e))),
        };
        Ok(Self {
            entries: RefCell::new(entries),
            backend: Backend::File(path),
        })
    }

    /// Get a value from the store.
    ///
    /// Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.entries.borrow().get(key) {
            Some(value) => {
                let value: T = serde_json::from_value(value.clone())?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value in the store.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let value = serde_json::to_value(value)?;
        self.entries.borrow_mut().insert(key.to_string(), value);
        self.flush()
    }

    /// Delete a value from the store.
    pub fn delete(&self, key: &str) -> Result<(), StorageError> {
        let removed = self.entries.borrow_mut().remove(key).is_some();
        if removed {
            self.flush()?;
        }
        Ok(())
    }

    /// Check if a key exists in the store.
    pub fn exists(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    /// Get all keys in the store.
    pub fn keys(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }

    fn flush(&self) -> Result<(), StorageError> {
        let Backend::File(path) = &self.backend else {
            return Ok(());
        };
        let contents = serde_json::to_string_pretty(&*self.entries.borrow())?;
        fs::write(path, contents)
            .map_err(|e| StorageError::StoreError(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "storage flushed");
        Ok(())
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let backend = match &self.backend {
            Backend::Memory => "memory".to_string(),
            Backend::File(path) => path.display().to_string(),
        };
        f.debug_struct("Storage")
            .field("backend", &backend)
            .field("entries", &self.entries.borrow().len())
            .finish()
    }
}
