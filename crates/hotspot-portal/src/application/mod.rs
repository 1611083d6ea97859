//! Application layer use cases for the portal.
//!
//! Use cases in this layer combine the domain types from `hotspot_core` with a
//! [`KeyValueStore`](crate::infrastructure::storage::KeyValueStore) backend.
//! They never touch files or the environment directly.
//!
//! # Sub-modules
//!
//! - **`config_store`** – Loads the settings tree (falling back to the
//!   built-in template when nothing usable is stored) and saves it whole.
//!
//! - **`recent_identifiers`** – Loads, updates and saves the list of recently
//!   used card identifiers shown on the login form.
//!
//! - **`admin_gate`** – The passphrase check in front of the control panel and
//!   the editing session it hands out.

use thiserror::Error;

use crate::infrastructure::storage::{StorageError, StorageKey};

pub mod admin_gate;
pub mod config_store;
pub mod recent_identifiers;

/// Error type for persisting application state.
///
/// Loading never fails (see the fallback rules in each store); only saving
/// reports errors, and the caller's in-memory value is left untouched.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not write the value.
    #[error("failed to persist: {0}")]
    Storage(#[from] StorageError),

    /// The value could not be encoded as JSON.
    #[error("failed to serialize {key}: {source}")]
    Serialize {
        key: StorageKey,
        #[source]
        source: serde_json::Error,
    },
}
