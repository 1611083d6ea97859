//! RecentIdentifiers: persistence for the login form's quick-pick list.
//!
//! On every successful login submission the host calls
//! [`RecentIdentifiers::record_use`], which promotes the card identifier in a
//! [`RecencyList`] and saves the list before returning.  The next read (this
//! session or the next) therefore always sees the update.
//!
//! Anything unusable under the key (unreadable, not a JSON array of strings)
//! loads as an empty list.  An array that is too long or holds duplicates is
//! normalized rather than discarded, since its order is still meaningful.

use hotspot_core::RecencyList;
use tracing::{debug, warn};

use super::StoreError;
use crate::infrastructure::storage::{KeyValueStore, StorageKey};

/// Persistence for the recently used card identifiers.
#[derive(Debug)]
pub struct RecentIdentifiers<S> {
    storage: S,
}

impl<S: KeyValueStore> RecentIdentifiers<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Loads the list, returning an empty one for anything unusable.
    pub fn load(&self) -> RecencyList {
        let bytes = match self.storage.get(StorageKey::RecentIdentifiers) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return RecencyList::new(),
            Err(e) => {
                warn!(error = %e, "recent identifiers unreadable, starting empty");
                return RecencyList::new();
            }
        };

        let entries: Vec<String> = match serde_json::from_slice(&bytes) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "recent identifiers malformed, starting empty");
                return RecencyList::new();
            }
        };

        if !RecencyList::is_normalized(&entries) {
            warn!(
                stored = entries.len(),
                "recent identifiers over capacity or duplicated, normalizing"
            );
        }
        RecencyList::from_entries(entries)
    }

    /// Writes the whole list, replacing whatever was stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the backend write fails.
    pub fn save(&self, list: &RecencyList) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(list).map_err(|source| StoreError::Serialize {
            key: StorageKey::RecentIdentifiers,
            source,
        })?;
        self.storage.set(StorageKey::RecentIdentifiers, &bytes)?;
        Ok(())
    }

    /// Records a login with `identifier` and saves the updated list.
    ///
    /// Surrounding whitespace is trimmed.  A blank identifier is ignored and
    /// `Ok(false)` is returned without touching storage.
    ///
    /// # Errors
    ///
    /// Returns the [`StoreError`] from [`RecentIdentifiers::save`].  The
    /// in-memory list keeps the promotion either way.
    pub fn record_use(
        &self,
        list: &mut RecencyList,
        identifier: &str,
    ) -> Result<bool, StoreError> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Ok(false);
        }
        list.record_use(identifier);
        self.save(list)?;
        debug!(count = list.len(), "recorded identifier use");
        Ok(true)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
