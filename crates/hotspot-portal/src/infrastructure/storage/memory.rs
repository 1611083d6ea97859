//! In-memory storage backend.
//!
//! Used by tests and by hosts that do not persist across restarts.  Values
//! are copied in and out, so callers never share buffers with the store.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use super::{KeyValueStore, StorageError, StorageKey};

/// A [`KeyValueStore`] backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<StorageKey, Vec<u8>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with one raw value.
    ///
    /// Handy for simulating whatever an older or damaged front end left
    /// behind under a key.
    pub fn with_value(key: StorageKey, value: impl Into<Vec<u8>>) -> Self {
        let store = Self::new();
        store.lock().insert(key, value.into());
        store
    }

    /// Returns `true` if `key` has been written.
    pub fn contains(&self, key: StorageKey) -> bool {
        self.lock().contains_key(&key)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<StorageKey, Vec<u8>>> {
        // Poisoning is ignored: every write is a single insert.
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: StorageKey) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.lock().get(&key).cloned())
    }

    fn set(&self, key: StorageKey, value: &[u8]) -> Result<(), StorageError> {
        self.lock().insert(key, value.to_vec());
        Ok(())
    }
}
