use chrono::{TimeZone, Utc};
use userbook_core::{
    FormMode, InMemoryRecordStore, RecordId, RecordRepository, RecordService, ServiceError,
    UserRecord,
};

fn seeded_service() -> RecordService<InMemoryRecordStore> {
    let t0 = Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap();
    let store = InMemoryRecordStore::from_records([UserRecord::new(
        "1",
        "Roshan",
        "9817113485",
        "500",
        t0,
    )])
    .unwrap();
    RecordService::new(store)
}

#[test]
fn create_flow_appends_record_with_form_open_date() {
    let mut service = RecordService::new(InMemoryRecordStore::new());
    let opened_at = Utc.with_ymd_and_hms(2026, 10, 16, 9, 45, 0).unwrap();

    let mut session = service.open_create_form(opened_at);
    assert_eq!(session.mode, FormMode::Create);
    assert!(session.target().is_none());
    session.draft.name = "Asha".to_string();
    session.draft.phone = "98-1234".to_string();
    session.draft.money = "120".to_string();

    let outcome = service.submit(&session).unwrap();
    assert_eq!(outcome.mode, FormMode::Create);
    assert_eq!(outcome.record.date, opened_at);
    assert_eq!(service.list_records(), vec![outcome.record]);
}

#[test]
fn rejected_submit_keeps_store_and_session() {
    let mut service = seeded_service();
    let mut session = service.open_create_form(Utc::now());
    session.draft.phone = "123".to_string();
    session.draft.money = "50".to_string();

    let err = service.submit(&session).unwrap_err();
    let ServiceError::Validation(validation) = err else {
        panic!("expected validation error");
    };
    assert_eq!(validation.field_labels(), vec!["name"]);
    assert_eq!(service.list_records().len(), 1);

    session.draft.name = "Bishal".to_string();
    service.submit(&session).unwrap();
    assert_eq!(service.list_records().len(), 2);
}

#[test]
fn edit_flow_replaces_fields_in_place() {
    let mut service = seeded_service();
    let id = RecordId::new("1");

    let mut session = service.open_edit_form(&id).unwrap();
    assert_eq!(session.mode, FormMode::Edit);
    assert_eq!(session.draft.name, "Roshan");
    session.draft.money = "800".to_string();

    let outcome = service.submit(&session).unwrap();
    assert_eq!(outcome.record.id, id);
    let listed = service.list_records();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].money, "800");
    assert_eq!(listed[0].name, "Roshan");
}

#[test]
fn edit_of_unknown_record_is_not_found() {
    let service = seeded_service();
    let err = service.open_edit_form(&RecordId::new("404")).unwrap_err();
    assert_eq!(err, ServiceError::RecordNotFound(RecordId::new("404")));
}

#[test]
fn edit_submit_after_target_deleted_is_not_found() {
    let mut service = seeded_service();
    let id = RecordId::new("1");
    let session = service.open_edit_form(&id).unwrap();

    let pending = service.request_delete(&id).unwrap();
    service.confirm_delete(pending).unwrap();

    let err = service.submit(&session).unwrap_err();
    assert_eq!(err, ServiceError::RecordNotFound(id));
    assert!(service.repo().is_empty());
}

#[test]
fn submit_with_runs_callback_only_on_success() {
    let mut service = RecordService::new(InMemoryRecordStore::new());
    let mut session = service.open_create_form(Utc::now());
    let mut saved = Vec::new();

    assert!(service
        .submit_with(&session, |outcome| saved.push(outcome.record.id.clone()))
        .is_err());
    assert!(saved.is_empty());

    session.draft.name = "Roshan".to_string();
    session.draft.phone = "9817113485".to_string();
    session.draft.money = "500".to_string();
    let outcome = service
        .submit_with(&session, |outcome| saved.push(outcome.record.id.clone()))
        .unwrap();
    assert_eq!(saved, vec![outcome.record.id]);
}

#[test]
fn cancelled_deletion_keeps_record() {
    let service = seeded_service();
    let pending = service.request_delete(&RecordId::new("1")).unwrap();
    assert_eq!(pending.prompt().title, "Delete User");
    drop(pending);

    assert_eq!(service.list_records().len(), 1);
}

#[test]
fn confirmed_deletion_removes_and_second_request_fails() {
    let mut service = seeded_service();
    let id = RecordId::new("1");

    let pending = service.request_delete(&id).unwrap();
    assert_eq!(pending.id(), &id);
    service.confirm_delete(pending).unwrap();
    assert!(service.list_records().is_empty());

    let err = service.request_delete(&id).unwrap_err();
    assert_eq!(err, ServiceError::RecordNotFound(id));
}

#[test]
fn form_mode_copy_matches_screens() {
    assert_eq!(FormMode::Create.header(), "Add New User");
    assert_eq!(FormMode::Edit.submit_label(), "Update User");
    assert_eq!(
        FormMode::Edit.success_message(),
        "User details updated successfully!"
    );
}
