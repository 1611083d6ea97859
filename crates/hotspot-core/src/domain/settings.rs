//! Settings tree domain entity.
//!
//! The portal's branding, packages, sales points and card defaults live in one
//! fixed-shape record.  The shape (which keys exist, at which depth) is fixed by
//! the built-in template returned from [`SettingsTree::default`]; only leaf
//! values vary.
//!
//! # Persisted shape
//!
//! The tree serializes with camelCase keys, matching the JSON the portal
//! front end has always written:
//!
//! ```json
//! {
//!   "siteName": "...",
//!   "supportPhone": "...",
//!   "supportPhone2": "...",
//!   "packages": [{ "id": "1", "name": "...", "speed": "1 Mbps", "price": "..." }],
//!   "salesPoints": ["..."],
//!   "cardInfo": { "downloadSpeed": "...", "uploadSpeed": "...", "packagePrice": "..." },
//!   "welcomeTexts": { "text1": "...", "text2": "...", "text3": "..." },
//!   "features": { "feature1": { "icon": "Shield", "text": "..." }, "feature2": ..., "feature3": ... },
//!   "copyright": { "ideaCreator": "...", "designer": "...", "year": "2024" },
//!   "defaultCardData": { "cardNumber": "...", "balance": "...", "expiryDate": "..." },
//!   "dashboardWelcome": { "mainText": "...", "subText": "..." }
//! }
//! ```
//!
//! Every struct denies unknown fields and none of them carries a serde
//! default, so deserializing a document with an extra or missing key fails.
//! A tree that deserializes is then checked with [`SettingsTree::validate`].
//!
//! # Collections
//!
//! `packages` and `salesPoints` are the only variable-length parts.  Both keep
//! at least one element: the login screen always needs a package to select and
//! the dashboard always lists a sales point.  Removing the last element is
//! refused with an error and leaves the tree unchanged.
//!
//! `cardInfo` is a separate, coarser view of the card defaults.  It is not
//! derived from `packages` and edits to one never touch the other.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::field::PackageField;

/// Placeholder name given to a freshly added package.
const NEW_PACKAGE_NAME: &str = "باقة جديدة";
/// Placeholder speed given to a freshly added package.
const NEW_PACKAGE_SPEED: &str = "1 Mbps";
/// Placeholder price given to a freshly added package.
const NEW_PACKAGE_PRICE: &str = "50 ريال";
/// Prefix for generated sales-point labels ("نقطة بيع 4").
const SALES_POINT_LABEL: &str = "نقطة بيع";

/// Errors raised by settings edits and structural validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// A textual path did not name any leaf of the settings tree.
    #[error("unknown settings path: {0}")]
    UnknownPath(String),

    /// Removing the package would leave the collection empty.
    #[error("cannot remove the last remaining package")]
    LastPackage,

    /// No package carries the given id.
    #[error("package not found: {0}")]
    PackageNotFound(String),

    /// Removing the sales point would leave the collection empty.
    #[error("cannot remove the last remaining sales point")]
    LastSalesPoint,

    /// The sales-point index is past the end of the collection.
    #[error("sales point index {index} out of range (len {len})")]
    SalesPointOutOfRange { index: usize, len: usize },

    /// Two packages share the same id.
    #[error("duplicate package id: {0}")]
    DuplicatePackageId(String),

    /// The package collection is empty.
    #[error("settings must contain at least one package")]
    NoPackages,

    /// The sales-point collection is empty.
    #[error("settings must contain at least one sales point")]
    NoSalesPoints,
}

// ── Tree schema types ─────────────────────────────────────────────────────────

/// A selectable internet package shown on the login form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Package {
    /// Stable identifier.  Used as the edit key and as the login form's
    /// selected value; never changes once assigned.
    pub id: String,
    /// Display name (e.g. `"سريع"`).
    pub name: String,
    /// Speed label, conventionally `"<n> Mbps"`.
    pub speed: String,
    /// Price label including currency.
    pub price: String,
}

/// Card defaults shown on the dashboard card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CardInfo {
    pub download_speed: String,
    pub upload_speed: String,
    pub package_price: String,
}

/// The three texts rotated under the login form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WelcomeTexts {
    pub text1: String,
    pub text2: String,
    pub text3: String,
}

/// One feature badge: an icon name and a caption.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Feature {
    /// Icon name understood by the host (e.g. `"Wifi"`).
    pub icon: String,
    pub text: String,
}

/// Exactly three feature slots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Features {
    pub feature1: Feature,
    pub feature2: Feature,
    pub feature3: Feature,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Copyright {
    pub idea_creator: String,
    pub designer: String,
    pub year: String,
}

/// Sample card shown before a real card is looked up.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DefaultCardData {
    pub card_number: String,
    pub balance: String,
    pub expiry_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DashboardWelcome {
    pub main_text: String,
    pub sub_text: String,
}

/// The complete portal settings.
///
/// Fields are readable through accessors and writable only through
/// [`SettingsTree::set`] and the collection operations, so the floor and
/// unique-id invariants cannot be bypassed by a host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SettingsTree {
    pub(crate) site_name: String,
    pub(crate) support_phone: String,
    pub(crate) support_phone2: String,
    pub(crate) packages: Vec<Package>,
    pub(crate) sales_points: Vec<String>,
    pub(crate) card_info: CardInfo,
    pub(crate) welcome_texts: WelcomeTexts,
    pub(crate) features: Features,
    pub(crate) copyright: Copyright,
    pub(crate) default_card_data: DefaultCardData,
    pub(crate) dashboard_welcome: DashboardWelcome,
}

// ── Default template ──────────────────────────────────────────────────────────

fn package(id: &str, name: &str, speed: &str, price: &str) -> Package {
    Package {
        id: id.to_string(),
        name: name.to_string(),
        speed: speed.to_string(),
        price: price.to_string(),
    }
}

fn feature(icon: &str, text: &str) -> Feature {
    Feature {
        icon: icon.to_string(),
        text: text.to_string(),
    }
}

impl Default for SettingsTree {
    /// Builds the built-in template.  Each call returns a fresh owned tree.
    fn default() -> Self {
        Self {
            site_name: "خنفر نت".to_string(),
            support_phone: "778881677".to_string(),
            support_phone2: "739149005".to_string(),
            packages: vec![
                package("1", "أساسي", "1 Mbps", "50 ريال"),
                package("2", "متوسط", "5 Mbps", "100 ريال"),
                package("3", "سريع", "10 Mbps", "150 ريال"),
                package("4", "فائق السرعة", "25 Mbps", "200 ريال"),
            ],
            sales_points: (1..=3).map(|n| format!("{SALES_POINT_LABEL} {n}")).collect(),
            card_info: CardInfo {
                download_speed: "25 Mbps".to_string(),
                upload_speed: "12 Mbps".to_string(),
                package_price: "200 ريال".to_string(),
            },
            welcome_texts: WelcomeTexts {
                text1: "سجل دخولك واستمتع بخدمات خنفر نت للاسلكية".to_string(),
                text2: "توصيل إنترنت للمنازل مجاناً للتواصل معنا 778881677ـ739149005".to_string(),
                text3: "الشكاوي و المقترحات تواصل معنا عبر المساعدة ودعم".to_string(),
            },
            features: Features {
                feature1: feature("Shield", "آمن"),
                feature2: feature("Globe", "سريع"),
                feature3: feature("Wifi", "موثوق"),
            },
            copyright: Copyright {
                idea_creator: "محمد الحوشبي".to_string(),
                designer: "محمد الحوشبي".to_string(),
                year: "2024".to_string(),
            },
            default_card_data: DefaultCardData {
                card_number: "123456789".to_string(),
                balance: "5000 MB".to_string(),
                expiry_date: "2024/12/31".to_string(),
            },
            dashboard_welcome: DashboardWelcome {
                main_text: "مرحباً".to_string(),
                sub_text: "يرجى الاحتفاظ بالكارت حتى انتهاء الرصيد".to_string(),
            },
        }
    }
}

// ── Read access ───────────────────────────────────────────────────────────────

impl SettingsTree {
    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    pub fn support_phone(&self) -> &str {
        &self.support_phone
    }

    pub fn support_phone2(&self) -> &str {
        &self.support_phone2
    }

    /// Packages in display order.  Never empty for a validated tree.
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    /// Sales points in display order.  Never empty for a validated tree.
    pub fn sales_points(&self) -> &[String] {
        &self.sales_points
    }

    pub fn card_info(&self) -> &CardInfo {
        &self.card_info
    }

    pub fn welcome_texts(&self) -> &WelcomeTexts {
        &self.welcome_texts
    }

    pub fn features(&self) -> &Features {
        &self.features
    }

    pub fn copyright(&self) -> &Copyright {
        &self.copyright
    }

    pub fn default_card_data(&self) -> &DefaultCardData {
        &self.default_card_data
    }

    pub fn dashboard_welcome(&self) -> &DashboardWelcome {
        &self.dashboard_welcome
    }

    /// Looks up a package by id.
    pub fn find_package(&self, id: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.id == id)
    }

    /// Checks the structural invariants a deserialized tree must satisfy.
    ///
    /// # Errors
    ///
    /// - [`SettingsError::NoPackages`] / [`SettingsError::NoSalesPoints`] when
    ///   a collection is empty.
    /// - [`SettingsError::DuplicatePackageId`] for the first repeated id.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.packages.is_empty() {
            return Err(SettingsError::NoPackages);
        }
        if self.sales_points.is_empty() {
            return Err(SettingsError::NoSalesPoints);
        }
        let mut seen = HashSet::with_capacity(self.packages.len());
        for pkg in &self.packages {
            if !seen.insert(pkg.id.as_str()) {
                return Err(SettingsError::DuplicatePackageId(pkg.id.clone()));
            }
        }
        Ok(())
    }
}

// ── Package collection ────────────────────────────────────────────────────────

impl SettingsTree {
    /// Appends a package with a fresh unique id and placeholder values.
    ///
    /// Returns a reference to the new package so the host can focus it.
    pub fn add_package(&mut self) -> &Package {
        let id = self.fresh_package_id();
        tracing::debug!(%id, "adding package");
        self.packages
            .push(package(&id, NEW_PACKAGE_NAME, NEW_PACKAGE_SPEED, NEW_PACKAGE_PRICE));
        &self.packages[self.packages.len() - 1]
    }

    /// Removes the package with `id` and returns it.
    ///
    /// # Errors
    ///
    /// - [`SettingsError::LastPackage`] if it is the only package left.
    /// - [`SettingsError::PackageNotFound`] if no package has that id.
    ///
    /// The tree is unchanged on error.
    pub fn remove_package(&mut self, id: &str) -> Result<Package, SettingsError> {
        let index = self
            .packages
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| SettingsError::PackageNotFound(id.to_string()))?;
        if self.packages.len() == 1 {
            return Err(SettingsError::LastPackage);
        }
        Ok(self.packages.remove(index))
    }

    /// Rewrites one editable field of the package with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::PackageNotFound`] if no package has that id.
    pub fn update_package_field(
        &mut self,
        id: &str,
        field: PackageField,
        value: impl Into<String>,
    ) -> Result<(), SettingsError> {
        let pkg = self
            .packages
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| SettingsError::PackageNotFound(id.to_string()))?;
        let slot = match field {
            PackageField::Name => &mut pkg.name,
            PackageField::Speed => &mut pkg.speed,
            PackageField::Price => &mut pkg.price,
        };
        *slot = value.into();
        Ok(())
    }

    fn fresh_package_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.find_package(&id).is_none() {
                return id;
            }
        }
    }
}

// ── Sales-point collection ────────────────────────────────────────────────────

impl SettingsTree {
    /// Appends a sales point labelled with its 1-based position.
    pub fn add_sales_point(&mut self) -> &str {
        let label = format!("{SALES_POINT_LABEL} {}", self.sales_points.len() + 1);
        self.sales_points.push(label);
        &self.sales_points[self.sales_points.len() - 1]
    }

    /// Removes the sales point at `index` and returns it.
    ///
    /// # Errors
    ///
    /// - [`SettingsError::SalesPointOutOfRange`] for an index past the end.
    /// - [`SettingsError::LastSalesPoint`] if it is the only one left.
    pub fn remove_sales_point(&mut self, index: usize) -> Result<String, SettingsError> {
        self.check_sales_point_index(index)?;
        if self.sales_points.len() == 1 {
            return Err(SettingsError::LastSalesPoint);
        }
        Ok(self.sales_points.remove(index))
    }

    /// Replaces the sales point at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::SalesPointOutOfRange`] for an index past the end.
    pub fn update_sales_point(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), SettingsError> {
        self.check_sales_point_index(index)?;
        self.sales_points[index] = value.into();
        Ok(())
    }

    fn check_sales_point_index(&self, index: usize) -> Result<(), SettingsError> {
        let len = self.sales_points.len();
        if index >= len {
            return Err(SettingsError::SalesPointOutOfRange { index, len });
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
