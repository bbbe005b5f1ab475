//! `HashMap`-backed key-value store for tests and embedding.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{KeyValueStore, PersistenceError};

/// In-memory key-value store.
///
/// Clone-friendly via `Arc`: clones share the same storage, which lets a
/// test hold on to the adapter after handing it to a store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    storage: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.read().map_or(0, |s| s.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| PersistenceError::Unavailable("lock poisoned".into()))?;
        Ok(storage.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| PersistenceError::Unavailable("lock poisoned".into()))?;
        storage.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PersistenceError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| PersistenceError::Unavailable("lock poisoned".into()))?;
        storage.remove(key);
        Ok(())
    }
}
