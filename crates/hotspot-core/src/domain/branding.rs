//! Values the login screen derives from the settings.
//!
//! None of this is stored; it is recomputed from a [`SettingsTree`] whenever
//! the host renders.

use super::settings::{Package, SettingsTree};

/// Packages at or above this speed show a balance-drain warning on selection.
pub const HIGH_SPEED_THRESHOLD_MBPS: u32 = 10;

const SITE_NAME_PLACEHOLDER: &str = "${siteName}";
const SUPPORT_PHONE_PLACEHOLDER: &str = "${supportPhone}";
const SUPPORT_PHONE2_PLACEHOLDER: &str = "${supportPhone2}";

/// The three welcome texts rotated under the login form, placeholders filled.
///
/// `${siteName}` is expanded in the first text, `${supportPhone}` and
/// `${supportPhone2}` in the second.  The third is shown verbatim.
pub fn rotating_texts(settings: &SettingsTree) -> [String; 3] {
    let texts = settings.welcome_texts();
    let second = texts
        .text2
        .replace(SUPPORT_PHONE_PLACEHOLDER, settings.support_phone())
        .replace(SUPPORT_PHONE2_PLACEHOLDER, settings.support_phone2());
    [
        texts.text1.replace(SITE_NAME_PLACEHOLDER, settings.site_name()),
        second,
        texts.text3.clone(),
    ]
}

/// The two support numbers the header alternates between.
pub fn support_phones(settings: &SettingsTree) -> [&str; 2] {
    [settings.support_phone(), settings.support_phone2()]
}

impl Package {
    /// Leading integer of the speed label (`"10 Mbps"` → `Some(10)`).
    ///
    /// Leading whitespace is skipped; `None` if the label does not start
    /// with a digit.
    pub fn speed_mbps(&self) -> Option<u32> {
        let trimmed = self.speed.trim_start();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        trimmed[..end].parse().ok()
    }

    /// Whether selecting this package should warn about faster balance use.
    pub fn is_high_speed(&self) -> bool {
        self.speed_mbps()
            .is_some_and(|mbps| mbps >= HIGH_SPEED_THRESHOLD_MBPS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::field::{PackageField, SettingField};

    fn with_speed(speed: &str) -> Package {
        Package {
            id: "x".to_string(),
            name: "test".to_string(),
            speed: speed.to_string(),
            price: "0".to_string(),
        }
    }

    #[test]
    fn test_speed_mbps_parses_leading_integer() {
        assert_eq!(with_speed("25 Mbps").speed_mbps(), Some(25));
        assert_eq!(with_speed("  5Mbps").speed_mbps(), Some(5));
        assert_eq!(with_speed("Mbps 5").speed_mbps(), None);
        assert_eq!(with_speed("").speed_mbps(), None);
    }

    #[test]
    fn test_high_speed_threshold_is_inclusive() {
        assert!(!with_speed("5 Mbps").is_high_speed());
        assert!(with_speed("10 Mbps").is_high_speed());
        assert!(with_speed("25 Mbps").is_high_speed());
        assert!(!with_speed("fast").is_high_speed());
    }

    #[test]
    fn test_default_packages_three_and_four_are_high_speed() {
        let tree = SettingsTree::default();
        let flagged: Vec<&str> = tree
            .packages()
            .iter()
            .filter(|p| p.is_high_speed())
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(flagged, vec!["3", "4"]);
    }

    #[test]
    fn test_edited_speed_changes_warning() {
        let mut tree = SettingsTree::default();
        tree.update_package_field("1", PackageField::Speed, "12 Mbps")
            .unwrap();
        assert!(tree.find_package("1").unwrap().is_high_speed());
    }

    #[test]
    fn test_rotating_texts_fill_placeholders() {
        // Arrange
        let mut tree = SettingsTree::default();
        tree.set(SettingField::WelcomeText1, "أهلاً بكم في ${siteName}");
        tree.set(
            SettingField::WelcomeText2,
            "اتصل ${supportPhone} أو ${supportPhone2}",
        );

        // Act
        let texts = rotating_texts(&tree);

        // Assert
        assert_eq!(texts[0], "أهلاً بكم في خنفر نت");
        assert_eq!(texts[1], "اتصل 778881677 أو 739149005");
        assert_eq!(texts[2], tree.welcome_texts().text3);
    }

    #[test]
    fn test_rotating_texts_without_placeholders_are_unchanged() {
        let tree = SettingsTree::default();
        let texts = rotating_texts(&tree);
        assert_eq!(texts[0], tree.welcome_texts().text1);
        assert_eq!(texts[1], tree.welcome_texts().text2);
    }

    #[test]
    fn test_support_phones_in_order() {
        let tree = SettingsTree::default();
        assert_eq!(support_phones(&tree), ["778881677", "739149005"]);
    }
}
