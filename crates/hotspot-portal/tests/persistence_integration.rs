//! Integration tests for settings and recent-identifier persistence.
//!
//! These exercise the application layer of hotspot-portal end-to-end against
//! the real file-backed store in a temporary directory.

use std::fs;
use std::path::PathBuf;

use hotspot_core::{PackageField, SettingField, SettingsTree};
use hotspot_portal::application::admin_gate::{AdminGate, GateError};
use hotspot_portal::application::config_store::{ConfigStore, LoadOutcome, RecoveryReason};
use hotspot_portal::application::recent_identifiers::RecentIdentifiers;
use hotspot_portal::infrastructure::storage::{FileStore, KeyValueStore, StorageKey};
use uuid::Uuid;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A data directory removed when the guard drops.
struct TempDataDir(PathBuf);

impl TempDataDir {
    fn new() -> Self {
        Self(std::env::temp_dir().join(format!("hotspot_it_{}", Uuid::new_v4())))
    }
}

impl Drop for TempDataDir {
    fn drop(&mut self) {
        fs::remove_dir_all(&self.0).ok();
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn test_settings_survive_a_restart() {
    let dir = TempDataDir::new();

    // First session: edit and save.
    {
        let store = ConfigStore::new(FileStore::new(&dir.0));
        let mut tree = store.load();
        tree.set(SettingField::SupportPhone, "700000000");
        tree.update_package_field("2", PackageField::Name, "متوسط+")
            .unwrap();
        tree.remove_sales_point(2).unwrap();
        store.save(&tree).expect("save to disk");
    }

    // Second session: a fresh store over the same directory.
    let store = ConfigStore::new(FileStore::new(&dir.0));
    let (tree, outcome) = store.load_with_outcome();

    assert_eq!(outcome, LoadOutcome::Persisted);
    assert_eq!(tree.support_phone(), "700000000");
    assert_eq!(tree.find_package("2").unwrap().name, "متوسط+");
    assert_eq!(tree.sales_points().len(), 2);
}

#[test]
fn test_persisted_document_uses_portal_json_keys() {
    let dir = TempDataDir::new();
    let backend = FileStore::new(&dir.0);
    ConfigStore::new(&backend)
        .save(&SettingsTree::default())
        .unwrap();

    let raw = fs::read_to_string(backend.path_for(StorageKey::Settings)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(json["siteName"], "خنفر نت");
    assert_eq!(json["packages"][3]["speed"], "25 Mbps");
    assert_eq!(json["features"]["feature1"]["icon"], "Shield");
}

#[test]
fn test_corrupted_settings_file_falls_back_to_defaults() {
    // Arrange: a truncated document, as left by an interrupted editor
    let dir = TempDataDir::new();
    let backend = FileStore::new(&dir.0);
    backend
        .set(StorageKey::Settings, br#"{"siteName": "half"#)
        .unwrap();

    // Act
    let (tree, outcome) = ConfigStore::new(&backend).load_with_outcome();

    // Assert
    assert_eq!(tree, SettingsTree::default());
    assert!(matches!(
        outcome,
        LoadOutcome::Recovered(RecoveryReason::Malformed(_))
    ));
}

#[test]
fn test_recent_identifiers_survive_a_restart() {
    let dir = TempDataDir::new();

    {
        let recent = RecentIdentifiers::new(FileStore::new(&dir.0));
        let mut list = recent.load();
        for id in ["A", "B", "C", "D", "E", "F", "C"] {
            recent.record_use(&mut list, id).unwrap();
        }
    }

    let list = RecentIdentifiers::new(FileStore::new(&dir.0)).load();
    assert_eq!(list.entries(), ["C", "F", "E", "D", "B"]);
}

#[test]
fn test_corrupted_recent_file_loads_empty() {
    let dir = TempDataDir::new();
    let backend = FileStore::new(&dir.0);
    backend
        .set(StorageKey::RecentIdentifiers, b"\xff\xfe garbage")
        .unwrap();

    let list = RecentIdentifiers::new(&backend).load();

    assert!(list.is_empty());
}

#[test]
fn test_stores_share_one_backend_without_interference() {
    let dir = TempDataDir::new();
    let backend = FileStore::new(&dir.0);
    let settings = ConfigStore::new(&backend);
    let recent = RecentIdentifiers::new(&backend);

    let mut list = recent.load();
    recent.record_use(&mut list, "card-9").unwrap();
    let mut tree = settings.load();
    tree.add_package();
    settings.save(&tree).unwrap();

    assert_eq!(recent.load().entries(), ["card-9"]);
    assert_eq!(settings.load().packages().len(), 5);
}

#[test]
fn test_control_panel_session_against_file_store() {
    // Arrange
    let dir = TempDataDir::new();
    let store = ConfigStore::new(FileStore::new(&dir.0));
    let gate = AdminGate::new("123");

    // Act
    assert_eq!(gate.unlock("wrong", &store).err(), Some(GateError::Rejected));
    let mut session = gate.unlock("123", &store).unwrap();
    let id = session.add_package();
    session.remove_package("1").unwrap();
    session.set_path("cardInfo.packagePrice", "250 ريال").unwrap();
    session.save().unwrap();

    // Assert
    let reloaded = store.load();
    assert_eq!(reloaded.packages().len(), 4);
    assert!(reloaded.find_package("1").is_none());
    assert!(reloaded.find_package(&id).is_some());
    assert_eq!(reloaded.card_info().package_price, "250 ريال");
}
