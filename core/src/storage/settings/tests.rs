mod common {
    use crate::storage::settings::SettingsStore;
    use tempfile::TempDir;

    pub(super) fn test_store() -> (SettingsStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = SettingsStore::new(temp_dir.path().join("settings.json"));
        (store, temp_dir)
    }
}

use crate::types::SettingsSnapshot;
use common::test_store;

#[test]
fn load_missing_document_is_first_run() {
    let (store, _temp) = test_store();
    assert!(store.load().is_none());
}

#[test]
fn save_then_load_round_trips() {
    let (store, _temp) = test_store();

    let mut snapshot = SettingsSnapshot::default();
    snapshot.user_name = "Ada".to_string();
    store.save(&snapshot).unwrap();

    assert_eq!(store.load().unwrap(), snapshot);
}

#[test]
fn save_replaces_the_entire_document() {
    let (store, _temp) = test_store();

    let mut first = SettingsSnapshot::default();
    first.user_name = "Ada".to_string();
    store.save(&first).unwrap();

    let mut second = SettingsSnapshot::default();
    second.user_name = "Grace".to_string();
    second.bookmarks.clear();
    store.save(&second).unwrap();

    assert_eq!(store.load().unwrap(), second);
}

#[test]
fn malformed_document_reads_as_absent() {
    let (store, temp) = test_store();

    std::fs::write(temp.path().join("settings.json"), "{not json at all").unwrap();

    assert!(store.load().is_none());
}
