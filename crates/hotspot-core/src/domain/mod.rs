//! Domain entities for the hotspot portal.
//!
//! This module contains pure state logic with no infrastructure dependencies.
//! Everything here can be compiled and tested without a storage backend: the
//! application layer in `hotspot-portal` loads values, hands them to these
//! types for editing, and persists the result.

/// Presentation-independent values derived from the settings.
pub mod branding;
/// Closed set of addressable settings leaves.
pub mod field;
/// Bounded most-recently-used identifier list.
pub mod recency;
/// The settings tree and its collection operations.
///
/// See [`settings::SettingsTree`] for the main type.
pub mod settings;
