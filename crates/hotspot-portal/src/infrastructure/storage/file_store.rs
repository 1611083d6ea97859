//! File-backed storage: one JSON document per key.
//!
//! Layout under the data directory:
//!
//! ```text
//! <data_dir>/settings.json
//! <data_dir>/recent-identifiers.json
//! ```
//!
//! Writes go to a uniquely named temporary file in the same directory, which
//! is then renamed over the target.  A rename within one directory replaces
//! the file in a single step, so a concurrent reader sees either the previous
//! document or the new one, never a truncated mix.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;
use uuid::Uuid;

use super::{KeyValueStore, StorageError, StorageKey};

/// A [`KeyValueStore`] that keeps each key in its own file.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`.  The directory is created on first
    /// write, not here.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the file holding `key`.
    pub fn path_for(&self, key: StorageKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }

    fn temp_path_for(&self, key: StorageKey) -> PathBuf {
        self.dir
            .join(format!(".{}.{}.tmp", key.as_str(), Uuid::new_v4().simple()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: StorageKey) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.path_for(key);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn set(&self, key: StorageKey, value: &[u8]) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let tmp = self.temp_path_for(key);
        fs::write(&tmp, value).map_err(|source| StorageError::Io {
            path: tmp.clone(),
            source,
        })?;

        let path = self.path_for(key);
        if let Err(source) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(StorageError::Io { path, source });
        }

        debug!(key = %key, bytes = value.len(), path = %path.display(), "stored value");
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("hotspot_store_{}", Uuid::new_v4()))
    }

    #[test]
    fn test_path_for_uses_key_name() {
        let store = FileStore::new("/data");
        assert_eq!(
            store.path_for(StorageKey::RecentIdentifiers),
            PathBuf::from("/data/recent-identifiers.json")
        );
    }

    #[test]
    fn test_get_missing_key_returns_none() {
        let store = FileStore::new(temp_dir());
        assert!(store.get(StorageKey::Settings).unwrap().is_none());
    }

    #[test]
    fn test_set_creates_directory_and_round_trips() {
        // Arrange
        let dir = temp_dir().join("nested");
        let store = FileStore::new(&dir);

        // Act
        store.set(StorageKey::Settings, br#"{"a":1}"#).unwrap();

        // Assert
        assert!(dir.is_dir());
        assert_eq!(
            store.get(StorageKey::Settings).unwrap(),
            Some(br#"{"a":1}"#.to_vec())
        );

        // Cleanup
        fs::remove_dir_all(dir.parent().unwrap()).ok();
    }

    #[test]
    fn test_set_replaces_whole_file_and_leaves_no_temp_files() {
        let dir = temp_dir();
        let store = FileStore::new(&dir);
        store
            .set(StorageKey::RecentIdentifiers, b"[\"a\",\"b\",\"c\"]")
            .unwrap();

        store.set(StorageKey::RecentIdentifiers, b"[]").unwrap();

        assert_eq!(
            store.get(StorageKey::RecentIdentifiers).unwrap(),
            Some(b"[]".to_vec())
        );
        let names: Vec<String> = fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["recent-identifiers.json".to_string()]);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_set_into_unwritable_location_returns_io_error() {
        // Arrange: a regular file where the data directory should be
        let parent = temp_dir();
        fs::create_dir_all(&parent).unwrap();
        let blocker = parent.join("not-a-dir");
        fs::write(&blocker, b"x").unwrap();
        let store = FileStore::new(&blocker);

        // Act
        let result = store.set(StorageKey::Settings, b"{}");

        // Assert
        assert!(matches!(result, Err(StorageError::Io { .. })));

        fs::remove_dir_all(&parent).ok();
    }
}
