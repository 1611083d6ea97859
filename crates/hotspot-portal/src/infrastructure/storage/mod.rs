//! Storage infrastructure: persistence backends and the portal config file.
//!
//! The application layer persists exactly two records, the settings tree and
//! the recent-identifier list.  It only needs a synchronous key-value
//! capability, captured by the [`KeyValueStore`] trait:
//!
//! - [`file_store::FileStore`] – one JSON file per key in a data directory,
//!   replaced atomically on every write.
//! - [`memory::MemoryStore`] – an in-process map for tests and for hosts that
//!   keep everything in memory.
//!
//! The `config` sub-module is separate: it reads and writes the portal's own
//! TOML configuration (data directory, admin passphrase, log level).
//!
//! Keeping storage concerns here means the application code never knows
//! which technology sits behind a key.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

pub mod config;
pub mod file_store;
pub mod memory;

pub use file_store::FileStore;
pub use memory::MemoryStore;

/// The two logical records the portal persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// The whole settings tree.
    Settings,
    /// The recently used card identifiers.
    RecentIdentifiers,
}

impl StorageKey {
    /// Stable key name used by backends (file names, map keys).
    pub fn as_str(self) -> &'static str {
        match self {
            StorageKey::Settings => "settings",
            StorageKey::RecentIdentifiers => "recent-identifiers",
        }
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for backend reads and writes.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backend refused or could not perform the operation.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Synchronous key-value persistence.
///
/// `set` replaces the whole value for a key.  A `get` issued after a
/// successful `set` on the same backend returns the written bytes.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    /// Returns the stored bytes, or `None` if the key was never written.
    fn get(&self, key: StorageKey) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replaces the value stored under `key`.
    fn set(&self, key: StorageKey, value: &[u8]) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: StorageKey) -> Result<Option<Vec<u8>>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: StorageKey, value: &[u8]) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: StorageKey) -> Result<Option<Vec<u8>>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: StorageKey, value: &[u8]) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key_names() {
        assert_eq!(StorageKey::Settings.as_str(), "settings");
        assert_eq!(StorageKey::RecentIdentifiers.as_str(), "recent-identifiers");
        assert_eq!(StorageKey::Settings.to_string(), "settings");
    }

    #[test]
    fn test_shared_reference_delegates_to_backend() {
        // Arrange
        let store = MemoryStore::new();
        let by_ref = &store;

        // Act
        by_ref.set(StorageKey::Settings, b"{}").unwrap();

        // Assert
        assert_eq!(store.get(StorageKey::Settings).unwrap(), Some(b"{}".to_vec()));
    }

    #[test]
    fn test_arc_delegates_to_backend() {
        let store = Arc::new(MemoryStore::new());
        let clone = Arc::clone(&store);
        clone.set(StorageKey::RecentIdentifiers, b"[]").unwrap();
        assert_eq!(
            store.get(StorageKey::RecentIdentifiers).unwrap(),
            Some(b"[]".to_vec())
        );
    }
}
