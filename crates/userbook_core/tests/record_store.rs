use chrono::{TimeZone, Utc};
use userbook_core::{InMemoryRecordStore, RecordId, RecordRepository, StoreError, UserRecord};

fn record(id: &str, name: &str) -> UserRecord {
    let date = Utc.with_ymd_and_hms(2026, 10, 16, 0, 0, 0).unwrap();
    UserRecord::new(id, name, "9817113485", "500", date)
}

#[test]
fn append_then_list_contains_record_once() {
    let mut store = InMemoryRecordStore::new();
    let roshan = record("1", "Roshan");
    store.append(roshan.clone()).unwrap();

    let listed = store.list();
    assert_eq!(listed.iter().filter(|r| r.id == roshan.id).count(), 1);
    assert_eq!(listed, vec![roshan]);
}

#[test]
fn list_keeps_insertion_order() {
    let mut store = InMemoryRecordStore::new();
    for (id, name) in [("b", "Bishal"), ("a", "Asha"), ("c", "Chandra")] {
        store.append(record(id, name)).unwrap();
    }

    let ids = store
        .list()
        .into_iter()
        .map(|r| r.id.to_string())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["b", "a", "c"]);
}

#[test]
fn duplicate_append_fails_without_mutation() {
    let mut store = InMemoryRecordStore::new();
    store.append(record("1", "Roshan")).unwrap();

    let err = store.append(record("1", "Impostor")).unwrap_err();
    assert_eq!(err, StoreError::DuplicateId(RecordId::new("1")));

    let listed = store.list();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Roshan");
}

#[test]
fn replace_overwrites_fields_but_keeps_id_and_position() {
    let mut store =
        InMemoryRecordStore::from_records([record("1", "Roshan"), record("2", "Asha")]).unwrap();
    let future = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
    let replacement = UserRecord::new("999", "Roshan K", "01-4444", "750", future);

    store.replace(&RecordId::new("1"), replacement).unwrap();

    let listed = store.list();
    assert_eq!(listed[0].id, RecordId::new("1"));
    assert_eq!(listed[0].name, "Roshan K");
    assert_eq!(listed[0].phone, "01-4444");
    assert_eq!(listed[0].money, "750");
    assert_eq!(listed[0].date, future);
    assert_eq!(listed[1].id, RecordId::new("2"));
    assert!(store.get(&RecordId::new("999")).is_none());
}

#[test]
fn replace_missing_returns_not_found() {
    let mut store = InMemoryRecordStore::new();
    let err = store
        .replace(&RecordId::new("ghost"), record("ghost", "Nobody"))
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id.as_str() == "ghost"));
    assert!(store.is_empty());
}

#[test]
fn remove_is_not_idempotent() {
    let mut store = InMemoryRecordStore::from_records([record("1", "Roshan")]).unwrap();
    let id = RecordId::new("1");

    store.remove(&id).unwrap();
    assert!(store.list().iter().all(|r| r.id != id));

    let err = store.remove(&id).unwrap_err();
    assert_eq!(err, StoreError::NotFound(id));
}

#[test]
fn from_records_rejects_duplicate_seed_ids() {
    let err = InMemoryRecordStore::from_records([record("1", "a"), record("1", "b")]).unwrap_err();
    assert_eq!(err, StoreError::DuplicateId(RecordId::new("1")));
}

#[test]
fn end_to_end_append_then_remove_leaves_store_empty() {
    let mut store = InMemoryRecordStore::new();
    assert!(store.list().is_empty());

    let t0 = Utc.with_ymd_and_hms(2026, 10, 16, 10, 0, 0).unwrap();
    let roshan = UserRecord::new("1", "Roshan", "9817113485", "500", t0);
    store.append(roshan.clone()).unwrap();
    assert_eq!(store.list(), vec![roshan]);

    store.remove(&RecordId::new("1")).unwrap();
    assert_eq!(store.list(), Vec::<UserRecord>::new());
    assert_eq!(store.len(), 0);
}
