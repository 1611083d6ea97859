//! AdminGate: the passphrase check in front of the control panel.
//!
//! This is a plain comparison against a shared passphrase, not a credential
//! system.  What it guarantees is structural: the only way for a host to get
//! a [`SettingsSession`], and with it the edit and save operations, is a
//! successful [`AdminGate::unlock`].
//!
//! # Session lifecycle
//!
//! ```text
//! unlock(passphrase)  ──►  SettingsSession { working copy loaded from store }
//!                               │  set / set_path / packages / sales points
//!                               ▼
//!                            save()  ──►  ConfigStore::save(whole tree)
//! ```
//!
//! Edits only touch the session's working copy.  A failed save leaves the
//! working copy as it was, so the user can retry.

use hotspot_core::{Package, PackageField, SettingField, SettingsError, SettingsTree};
use thiserror::Error;
use tracing::{info, warn};

use super::config_store::ConfigStore;
use super::StoreError;
use crate::infrastructure::storage::KeyValueStore;

/// Error type for the gate check.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GateError {
    #[error("passphrase rejected")]
    Rejected,
}

/// Holds the control panel passphrase.
#[derive(Clone)]
pub struct AdminGate {
    passphrase: String,
}

impl std::fmt::Debug for AdminGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminGate").finish_non_exhaustive()
    }
}

impl AdminGate {
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: passphrase.into(),
        }
    }

    /// Compares `attempt` with the passphrase and, on a match, opens an
    /// editing session on a working copy loaded from `store`.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Rejected`] on a mismatch.
    pub fn unlock<'a, S: KeyValueStore>(
        &self,
        attempt: &str,
        store: &'a ConfigStore<S>,
    ) -> Result<SettingsSession<'a, S>, GateError> {
        if attempt != self.passphrase {
            warn!("control panel passphrase rejected");
            return Err(GateError::Rejected);
        }
        info!("control panel unlocked");
        Ok(SettingsSession {
            store,
            working: store.load(),
            dirty: false,
        })
    }
}

/// An unlocked control panel: a working copy of the settings plus the store
/// it saves to.
pub struct SettingsSession<'a, S> {
    store: &'a ConfigStore<S>,
    working: SettingsTree,
    dirty: bool,
}

impl<'a, S: KeyValueStore> SettingsSession<'a, S> {
    /// The working copy, including unsaved edits.
    pub fn settings(&self) -> &SettingsTree {
        &self.working
    }

    /// Whether there are edits since the session opened or last saved.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set(&mut self, field: SettingField, value: impl Into<String>) {
        self.working.set(field, value);
        self.dirty = true;
    }

    /// Sets a leaf addressed by dotted path, e.g. `"copyright.year"`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::UnknownPath`] without editing anything.
    pub fn set_path(
        &mut self,
        path: &str,
        value: impl Into<String>,
    ) -> Result<(), SettingsError> {
        let field: SettingField = path.parse()?;
        self.set(field, value);
        Ok(())
    }

    /// Adds a placeholder package and returns its id.
    pub fn add_package(&mut self) -> String {
        self.dirty = true;
        self.working.add_package().id.clone()
    }

    pub fn remove_package(&mut self, id: &str) -> Result<Package, SettingsError> {
        let removed = self.working.remove_package(id)?;
        self.dirty = true;
        Ok(removed)
    }

    pub fn update_package_field(
        &mut self,
        id: &str,
        field: PackageField,
        value: impl Into<String>,
    ) -> Result<(), SettingsError> {
        self.working.update_package_field(id, field, value)?;
        self.dirty = true;
        Ok(())
    }

    /// Adds a sales point and returns its index.
    pub fn add_sales_point(&mut self) -> usize {
        self.dirty = true;
        self.working.add_sales_point();
        self.working.sales_points().len() - 1
    }

    pub fn remove_sales_point(&mut self, index: usize) -> Result<String, SettingsError> {
        let removed = self.working.remove_sales_point(index)?;
        self.dirty = true;
        Ok(removed)
    }

    pub fn update_sales_point(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), SettingsError> {
        self.working.update_sales_point(index, value)?;
        self.dirty = true;
        Ok(())
    }

    /// Persists the working copy as a whole.
    ///
    /// # Errors
    ///
    /// Returns the [`StoreError`] from [`ConfigStore::save`]; the working copy
    /// and dirty flag are unchanged in that case.
    pub fn save(&mut self) -> Result<(), StoreError> {
        self.store.save(&self.working)?;
        self.dirty = false;
        info!("settings saved from control panel");
        Ok(())
    }

    /// Closes the session, returning the working copy.
    pub fn into_settings(self) -> SettingsTree {
        self.working
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
