use test_utils::record_fixtures;

use super::RecordStore;
use crate::domain::models::Draft;
use crate::domain::models::Record;

fn store() -> RecordStore {
    let mut store = RecordStore::default();
    store.begin_loading();
    store.replace_all(serde_json::from_value(record_fixtures()).unwrap());
    return store;
}

#[test]
fn it_replaces_all_and_stops_loading() {
    let store = store();
    assert!(!store.loading);
    assert_eq!(store.len(), 3);
    assert_eq!(
        store.records().iter().map(|e| return e.id).collect::<Vec<_>>(),
        vec![7, 8, 9]
    );
}

#[test]
fn it_appends_created_record_once() {
    let mut store = store();
    store.append(Record::new(42, Draft::default()));

    assert_eq!(store.len(), 4);
    assert_eq!(store.records().last().unwrap().id, 42);
    assert_eq!(
        store.records().iter().filter(|e| return e.id == 42).count(),
        1
    );
}

#[test]
fn it_replaces_in_place() {
    let mut store = store();
    let before = store.clone();

    let mut draft = store.get(8).unwrap().draft();
    draft.document_name = "Renamed".to_string();
    store.replace(8, Record::new(8, draft));

    assert_eq!(store.len(), 3);
    assert_eq!(store.records()[1].fields.document_name, "Renamed");
    assert_eq!(store.records()[0], before.records()[0]);
    assert_eq!(store.records()[2], before.records()[2]);
}

#[test]
fn it_ignores_replace_of_unknown_id() {
    let mut store = store();
    let before = store.clone();
    store.replace(100, Record::new(100, Draft::default()));

    assert_eq!(store, before);
}

#[test]
fn it_removes_by_id() {
    let mut store = store();
    store.remove(7);

    assert_eq!(store.len(), 2);
    assert!(store.get(7).is_none());
}

#[test]
fn it_clears() {
    let mut store = store();
    store.clear();

    assert!(store.is_empty());
    assert!(!store.loading);
}
