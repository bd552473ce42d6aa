use chrono::Utc;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use cogniscreen::{HistoryStore, ResultRecord, RiskLevel};

#[test]
fn load_is_empty_on_a_fresh_store() {
    let dir = tempdir().unwrap();
    let store = HistoryStore::new(dir.path()).unwrap();
    assert!(store.load().is_empty());
}

#[test]
fn save_then_load_round_trips_the_last_record() {
    let dir = tempdir().unwrap();
    let store = HistoryStore::new(dir.path()).unwrap();

    let first = ResultRecord::new(Utc::now(), 21);
    let second = ResultRecord::new(Utc::now(), 60);
    store.save(&first).unwrap();
    store.save(&second).unwrap();

    let records = store.load();
    assert_eq!(records.len(), 2);
    assert_eq!(records.last().unwrap(), &second);
    assert_eq!(records[0].level, RiskLevel::Low);
    assert_eq!(records[1].level, RiskLevel::High);
}

#[test]
fn clear_then_load_is_empty() {
    let dir = tempdir().unwrap();
    let store = HistoryStore::new(dir.path()).unwrap();
    store.save(&ResultRecord::new(Utc::now(), 10)).unwrap();

    store.clear().unwrap();
    assert!(store.load().is_empty());

    // Clearing an already-empty store is fine too.
    store.clear().unwrap();
}

#[test]
fn malformed_content_degrades_to_empty() {
    let dir = tempdir().unwrap();
    let store = HistoryStore::new(dir.path()).unwrap();
    std::fs::write(store.path(), "{not json at all").unwrap();

    assert!(store.load().is_empty());

    // And the store stays usable: the next save rewrites it.
    store.save(&ResultRecord::new(Utc::now(), 33)).unwrap();
    assert_eq!(store.load().len(), 1);
}

#[test]
fn seed_if_empty_inserts_five_records_once() {
    let dir = tempdir().unwrap();
    let store = HistoryStore::new(dir.path()).unwrap();

    assert!(store.seed_if_empty().unwrap());
    let seeded = store.load();
    assert_eq!(seeded.len(), 5);
    for record in &seeded {
        assert_eq!(record.level, RiskLevel::from_percentage(record.percentage));
        assert!(record.timestamp < Utc::now());
    }
    // Oldest first, so the trend chart reads left to right.
    for pair in seeded.windows(2) {
        assert!(pair[0].timestamp < pair[1].timestamp);
    }

    assert!(!store.seed_if_empty().unwrap());
    assert_eq!(store.load().len(), 5);
}

#[test]
fn seed_if_empty_never_touches_existing_history() {
    let dir = tempdir().unwrap();
    let store = HistoryStore::new(dir.path()).unwrap();
    store.save(&ResultRecord::new(Utc::now(), 77)).unwrap();

    assert!(!store.seed_if_empty().unwrap());
    let records = store.load();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].percentage, 77);
}

#[test]
fn export_writes_identical_content_under_a_dated_name() {
    let dir = tempdir().unwrap();
    let export_dir = tempdir().unwrap();
    let store = HistoryStore::new(dir.path()).unwrap();
    store.save(&ResultRecord::new(Utc::now(), 42)).unwrap();
    store.save(&ResultRecord::new(Utc::now(), 58)).unwrap();

    let exported = store.export_to(export_dir.path()).unwrap();

    let name = exported.file_name().unwrap().to_string_lossy().into_owned();
    let today = Utc::now().format("%Y-%m-%d").to_string();
    assert_eq!(name, format!("mci-history-{today}.json"));

    let exported_records: Vec<ResultRecord> =
        serde_json::from_str(&std::fs::read_to_string(&exported).unwrap()).unwrap();
    assert_eq!(exported_records, store.load());
}
