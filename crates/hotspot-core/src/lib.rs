//! # hotspot-core
//!
//! Domain library for the hotspot captive portal: the editable settings tree
//! behind the login screen and dashboard, and the short list of recently used
//! card identifiers offered as quick picks on the login form.
//!
//! This crate has zero dependencies on storage, the file system, or any UI
//! framework.  Persistence lives in `hotspot-portal`.
//!
//! # Architecture overview
//!
//! - **`domain::settings`** – The fixed-shape [`SettingsTree`] with its
//!   built-in default template, the package and sales-point collections, and
//!   the structural invariants (at least one of each, unique package ids).
//!
//! - **`domain::field`** – [`SettingField`], a closed enum naming every scalar
//!   leaf of the tree.  Hosts that still think in dotted paths
//!   (`"cardInfo.downloadSpeed"`) parse them once into a `SettingField`; after
//!   that an invalid address cannot be expressed.
//!
//! - **`domain::recency`** – [`RecencyList`], the capped most-recently-used
//!   list of identifiers.
//!
//! - **`domain::branding`** – Values the login screen derives from the
//!   settings: rotating welcome texts with placeholders filled in, and the
//!   high-speed package warning.

pub mod domain;

pub use domain::branding::{rotating_texts, support_phones, HIGH_SPEED_THRESHOLD_MBPS};
pub use domain::field::{PackageField, SettingField};
pub use domain::recency::{RecencyList, RECENCY_CAPACITY};
pub use domain::settings::{
    CardInfo, Copyright, DashboardWelcome, DefaultCardData, Feature, Features, Package,
    SettingsError, SettingsTree, WelcomeTexts,
};
