use chrono::{TimeZone, Utc};
use std::collections::BTreeSet;
use userbook_core::{validate_and_build, RecordDraft, RecordField, RecordId, UserRecord};

fn draft(name: &str, phone: &str, money: &str) -> RecordDraft {
    RecordDraft {
        name: name.to_string(),
        phone: phone.to_string(),
        money: money.to_string(),
        date: Utc.with_ymd_and_hms(2026, 10, 16, 7, 0, 0).unwrap(),
    }
}

#[test]
fn valid_create_assigns_fresh_id_and_copies_fields() {
    let input = draft("Roshan", "9817113485", "500");
    let record = validate_and_build(&input, None).unwrap();

    assert!(!record.id.as_str().is_empty());
    assert_eq!(record.name, "Roshan");
    assert_eq!(record.phone, "9817113485");
    assert_eq!(record.money, "500");
    assert_eq!(record.date, input.date);
}

#[test]
fn future_dates_are_accepted() {
    let mut input = draft("Roshan", "1", "2");
    input.date = Utc.with_ymd_and_hms(2099, 12, 31, 0, 0, 0).unwrap();
    assert_eq!(validate_and_build(&input, None).unwrap().date, input.date);
}

#[test]
fn empty_name_is_reported_alone() {
    let err = validate_and_build(&draft("", "123", "50"), None).unwrap_err();
    assert_eq!(err.missing_fields, BTreeSet::from([RecordField::Name]));
}

#[test]
fn every_combination_of_empty_fields_is_reported_exactly() {
    for mask in 1u8..8 {
        let name = if mask & 1 != 0 { "" } else { "n" };
        let phone = if mask & 2 != 0 { "" } else { "p" };
        let money = if mask & 4 != 0 { "" } else { "m" };

        let err = validate_and_build(&draft(name, phone, money), None).unwrap_err();
        let expected = RecordField::REQUIRED
            .into_iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, field)| field)
            .collect::<BTreeSet<_>>();
        assert_eq!(err.missing_fields, expected, "mask {mask}");
    }
}

#[test]
fn edit_keeps_existing_id() {
    let existing = UserRecord::new("1", "Roshan", "9817113485", "500", Utc::now());
    let record = validate_and_build(&draft("Roshan S", "98", "650"), Some(&existing)).unwrap();

    assert_eq!(record.id, RecordId::new("1"));
    assert_eq!(record.name, "Roshan S");
    assert_eq!(record.money, "650");
}

#[test]
fn edit_with_empty_field_is_rejected() {
    let existing = UserRecord::new("1", "Roshan", "9817113485", "500", Utc::now());
    let err = validate_and_build(&draft("Roshan", "98", ""), Some(&existing)).unwrap_err();
    assert!(err.is_missing(RecordField::Money));
    assert_eq!(err.missing_fields.len(), 1);
}
