//! ConfigStore: loads and saves the settings tree.
//!
//! The store is an owned value created by the host at startup.  There is no
//! global settings instance: the host loads a tree, renders from it, edits a
//! working copy, and calls [`ConfigStore::save`] at the explicit save point.
//!
//! # Fallback on load
//!
//! ```text
//! nothing stored          ──►  defaults   (LoadOutcome::FirstRun)
//! backend read error      ──►  defaults   (Recovered: Unreadable)
//! not JSON / wrong shape  ──►  defaults   (Recovered: Malformed)
//! fails validation        ──►  defaults   (Recovered: Invalid)
//! valid tree              ──►  that tree  (LoadOutcome::Persisted)
//! ```
//!
//! [`ConfigStore::load`] never fails, so a damaged record can never block the
//! login screen.  Recoveries are logged at `warn`.  A host that wants to tell
//! an administrator about lost settings uses
//! [`ConfigStore::load_with_outcome`] instead.

use hotspot_core::{SettingsError, SettingsTree};
use tracing::{debug, info, warn};

use super::StoreError;
use crate::infrastructure::storage::{KeyValueStore, StorageKey};

/// Why persisted settings were replaced by the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoveryReason {
    /// The backend returned an error on read.
    Unreadable(String),
    /// The bytes were not a settings document of the expected shape.
    Malformed(String),
    /// The document parsed but broke a structural invariant.
    Invalid(SettingsError),
}

impl std::fmt::Display for RecoveryReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecoveryReason::Unreadable(e) => write!(f, "unreadable: {e}"),
            RecoveryReason::Malformed(e) => write!(f, "malformed: {e}"),
            RecoveryReason::Invalid(e) => write!(f, "invalid: {e}"),
        }
    }
}

/// Where a loaded tree came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The stored tree was used as-is.
    Persisted,
    /// Nothing was stored yet; the defaults were used.
    FirstRun,
    /// Something was stored but could not be used; the defaults were used.
    Recovered(RecoveryReason),
}

/// Persistence for the [`SettingsTree`].
#[derive(Debug)]
pub struct ConfigStore<S> {
    storage: S,
}

impl<S: KeyValueStore> ConfigStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The backend this store writes through.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Loads the settings, substituting the defaults for anything unusable.
    pub fn load(&self) -> SettingsTree {
        self.load_with_outcome().0
    }

    /// Loads the settings and reports whether the defaults were substituted.
    pub fn load_with_outcome(&self) -> (SettingsTree, LoadOutcome) {
        let bytes = match self.storage.get(StorageKey::Settings) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                info!("no stored settings, starting from defaults");
                return (SettingsTree::default(), LoadOutcome::FirstRun);
            }
            Err(e) => return recovered(RecoveryReason::Unreadable(e.to_string())),
        };

        match decode(&bytes) {
            Ok(tree) => {
                debug!(bytes = bytes.len(), "loaded stored settings");
                (tree, LoadOutcome::Persisted)
            }
            Err(reason) => recovered(reason),
        }
    }

    /// Writes the whole tree, replacing whatever was stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the backend write fails.  `tree`
    /// is borrowed, so the caller still holds the unsaved edits and can retry.
    pub fn save(&self, tree: &SettingsTree) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(tree).map_err(|source| StoreError::Serialize {
            key: StorageKey::Settings,
            source,
        })?;
        self.storage.set(StorageKey::Settings, &bytes)?;
        debug!(bytes = bytes.len(), "saved settings");
        Ok(())
    }
}

fn decode(bytes: &[u8]) -> Result<SettingsTree, RecoveryReason> {
    let tree: SettingsTree =
        serde_json::from_slice(bytes).map_err(|e| RecoveryReason::Malformed(e.to_string()))?;
    tree.validate().map_err(RecoveryReason::Invalid)?;
    Ok(tree)
}

fn recovered(reason: RecoveryReason) -> (SettingsTree, LoadOutcome) {
    warn!(%reason, "stored settings unusable, falling back to defaults");
    (SettingsTree::default(), LoadOutcome::Recovered(reason))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
