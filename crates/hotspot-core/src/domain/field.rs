//! Field locators for the settings tree.
//!
//! The settings panel edits about two dozen scalar strings through one
//! generic handler.  Instead of walking the tree by arbitrary key paths, every
//! editable leaf is a variant of [`SettingField`], so an edit can only ever
//! address a leaf that exists.
//!
//! Hosts that still carry dotted paths (`"features.feature2.icon"`) parse them
//! once with [`SettingField::from_path`] or `str::parse`; an unknown path is
//! reported as [`SettingsError::UnknownPath`] at that boundary.

use std::fmt;
use std::str::FromStr;

use super::settings::{SettingsError, SettingsTree};

/// One scalar leaf of the settings tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingField {
    SiteName,
    SupportPhone,
    SupportPhone2,
    CardDownloadSpeed,
    CardUploadSpeed,
    CardPackagePrice,
    WelcomeText1,
    WelcomeText2,
    WelcomeText3,
    Feature1Icon,
    Feature1Text,
    Feature2Icon,
    Feature2Text,
    Feature3Icon,
    Feature3Text,
    CopyrightIdeaCreator,
    CopyrightDesigner,
    CopyrightYear,
    DefaultCardNumber,
    DefaultCardBalance,
    DefaultCardExpiryDate,
    DashboardMainText,
    DashboardSubText,
}

impl SettingField {
    /// Every leaf, in template order.
    pub const ALL: [SettingField; 23] = [
        SettingField::SiteName,
        SettingField::SupportPhone,
        SettingField::SupportPhone2,
        SettingField::CardDownloadSpeed,
        SettingField::CardUploadSpeed,
        SettingField::CardPackagePrice,
        SettingField::WelcomeText1,
        SettingField::WelcomeText2,
        SettingField::WelcomeText3,
        SettingField::Feature1Icon,
        SettingField::Feature1Text,
        SettingField::Feature2Icon,
        SettingField::Feature2Text,
        SettingField::Feature3Icon,
        SettingField::Feature3Text,
        SettingField::CopyrightIdeaCreator,
        SettingField::CopyrightDesigner,
        SettingField::CopyrightYear,
        SettingField::DefaultCardNumber,
        SettingField::DefaultCardBalance,
        SettingField::DefaultCardExpiryDate,
        SettingField::DashboardMainText,
        SettingField::DashboardSubText,
    ];

    /// Key path of this leaf in the persisted JSON document.
    pub fn path(self) -> &'static [&'static str] {
        match self {
            SettingField::SiteName => &["siteName"],
            SettingField::SupportPhone => &["supportPhone"],
            SettingField::SupportPhone2 => &["supportPhone2"],
            SettingField::CardDownloadSpeed => &["cardInfo", "downloadSpeed"],
            SettingField::CardUploadSpeed => &["cardInfo", "uploadSpeed"],
            SettingField::CardPackagePrice => &["cardInfo", "packagePrice"],
            SettingField::WelcomeText1 => &["welcomeTexts", "text1"],
            SettingField::WelcomeText2 => &["welcomeTexts", "text2"],
            SettingField::WelcomeText3 => &["welcomeTexts", "text3"],
            SettingField::Feature1Icon => &["features", "feature1", "icon"],
            SettingField::Feature1Text => &["features", "feature1", "text"],
            SettingField::Feature2Icon => &["features", "feature2", "icon"],
            SettingField::Feature2Text => &["features", "feature2", "text"],
            SettingField::Feature3Icon => &["features", "feature3", "icon"],
            SettingField::Feature3Text => &["features", "feature3", "text"],
            SettingField::CopyrightIdeaCreator => &["copyright", "ideaCreator"],
            SettingField::CopyrightDesigner => &["copyright", "designer"],
            SettingField::CopyrightYear => &["copyright", "year"],
            SettingField::DefaultCardNumber => &["defaultCardData", "cardNumber"],
            SettingField::DefaultCardBalance => &["defaultCardData", "balance"],
            SettingField::DefaultCardExpiryDate => &["defaultCardData", "expiryDate"],
            SettingField::DashboardMainText => &["dashboardWelcome", "mainText"],
            SettingField::DashboardSubText => &["dashboardWelcome", "subText"],
        }
    }

    /// Resolves a key path to its leaf.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::UnknownPath`] if the path does not name a
    /// scalar leaf, including paths that stop at an intermediate record
    /// (`["cardInfo"]`) or point into a collection (`["packages"]`).
    pub fn from_path(path: &[&str]) -> Result<Self, SettingsError> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.path() == path)
            .ok_or_else(|| SettingsError::UnknownPath(path.join(".")))
    }
}

impl FromStr for SettingField {
    type Err = SettingsError;

    /// Parses a dotted path such as `"cardInfo.downloadSpeed"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let keys: Vec<&str> = s.split('.').collect();
        Self::from_path(&keys)
    }
}

impl fmt::Display for SettingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path().join("."))
    }
}

/// Editable fields of a package.  The id is deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageField {
    Name,
    Speed,
    Price,
}

impl FromStr for PackageField {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(PackageField::Name),
            "speed" => Ok(PackageField::Speed),
            "price" => Ok(PackageField::Price),
            other => Err(SettingsError::UnknownPath(format!("packages.{other}"))),
        }
    }
}

// ── Leaf access ───────────────────────────────────────────────────────────────

impl SettingsTree {
    /// Returns the current value of a leaf.
    pub fn get(&self, field: SettingField) -> &str {
        match field {
            SettingField::SiteName => &self.site_name,
            SettingField::SupportPhone => &self.support_phone,
            SettingField::SupportPhone2 => &self.support_phone2,
            SettingField::CardDownloadSpeed => &self.card_info.download_speed,
            SettingField::CardUploadSpeed => &self.card_info.upload_speed,
            SettingField::CardPackagePrice => &self.card_info.package_price,
            SettingField::WelcomeText1 => &self.welcome_texts.text1,
            SettingField::WelcomeText2 => &self.welcome_texts.text2,
            SettingField::WelcomeText3 => &self.welcome_texts.text3,
            SettingField::Feature1Icon => &self.features.feature1.icon,
            SettingField::Feature1Text => &self.features.feature1.text,
            SettingField::Feature2Icon => &self.features.feature2.icon,
            SettingField::Feature2Text => &self.features.feature2.text,
            SettingField::Feature3Icon => &self.features.feature3.icon,
            SettingField::Feature3Text => &self.features.feature3.text,
            SettingField::CopyrightIdeaCreator => &self.copyright.idea_creator,
            SettingField::CopyrightDesigner => &self.copyright.designer,
            SettingField::CopyrightYear => &self.copyright.year,
            SettingField::DefaultCardNumber => &self.default_card_data.card_number,
            SettingField::DefaultCardBalance => &self.default_card_data.balance,
            SettingField::DefaultCardExpiryDate => &self.default_card_data.expiry_date,
            SettingField::DashboardMainText => &self.dashboard_welcome.main_text,
            SettingField::DashboardSubText => &self.dashboard_welcome.sub_text,
        }
    }

    /// Replaces exactly one leaf.  Every other value is left as it was.
    pub fn set(&mut self, field: SettingField, value: impl Into<String>) {
        *self.leaf_mut(field) = value.into();
    }

    /// Parses `path` and replaces that leaf.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::UnknownPath`] without touching the tree when
    /// the path names no leaf.
    pub fn set_path(
        &mut self,
        path: &[&str],
        value: impl Into<String>,
    ) -> Result<(), SettingsError> {
        let field = SettingField::from_path(path)?;
        self.set(field, value);
        Ok(())
    }

    fn leaf_mut(&mut self, field: SettingField) -> &mut String {
        match field {
            SettingField::SiteName => &mut self.site_name,
            SettingField::SupportPhone => &mut self.support_phone,
            SettingField::SupportPhone2 => &mut self.support_phone2,
            SettingField::CardDownloadSpeed => &mut self.card_info.download_speed,
            SettingField::CardUploadSpeed => &mut self.card_info.upload_speed,
            SettingField::CardPackagePrice => &mut self.card_info.package_price,
            SettingField::WelcomeText1 => &mut self.welcome_texts.text1,
            SettingField::WelcomeText2 => &mut self.welcome_texts.text2,
            SettingField::WelcomeText3 => &mut self.welcome_texts.text3,
            SettingField::Feature1Icon => &mut self.features.feature1.icon,
            SettingField::Feature1Text => &mut self.features.feature1.text,
            SettingField::Feature2Icon => &mut self.features.feature2.icon,
            SettingField::Feature2Text => &mut self.features.feature2.text,
            SettingField::Feature3Icon => &mut self.features.feature3.icon,
            SettingField::Feature3Text => &mut self.features.feature3.text,
            SettingField::CopyrightIdeaCreator => &mut self.copyright.idea_creator,
            SettingField::CopyrightDesigner => &mut self.copyright.designer,
            SettingField::CopyrightYear => &mut self.copyright.year,
            SettingField::DefaultCardNumber => &mut self.default_card_data.card_number,
            SettingField::DefaultCardBalance => &mut self.default_card_data.balance,
            SettingField::DefaultCardExpiryDate => &mut self.default_card_data.expiry_date,
            SettingField::DashboardMainText => &mut self.dashboard_welcome.main_text,
            SettingField::DashboardSubText => &mut self.dashboard_welcome.sub_text,
        }
    }
}
