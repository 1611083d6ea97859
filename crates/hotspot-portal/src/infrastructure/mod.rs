//! Infrastructure layer for the portal.
//!
//! Contains the storage backends the application layer persists through and
//! the TOML file holding the portal's own configuration.
//!
//! **Dependency rule**: this layer may depend on `hotspot_core`, but MUST NOT
//! import from `application`.

pub mod storage;
