//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `userbook_core` linkage without the Flutter/FFI runtime.
//! - Walk one scripted list/form/delete session and print the list view.
//!
//! # Invariants
//! - Output is deterministic apart from generated ids.

use chrono::{TimeZone, Utc};
use std::error::Error;
use std::process::ExitCode;
use userbook_core::{
    init_logging_from_config, local_offset, project_list, CoreConfig, InMemoryRecordStore,
    RecordField, RecordId, RecordService, UserRecord,
};

fn main() -> ExitCode {
    println!("userbook_core ping={}", userbook_core::ping());
    println!("userbook_core version={}", userbook_core::core_version());

    match run_demo() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("userbook_cli error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_demo() -> Result<(), Box<dyn Error>> {
    let config = CoreConfig::from_env()?;
    init_logging_from_config(&config)?;

    let seeded_at = Utc
        .with_ymd_and_hms(2026, 10, 16, 9, 0, 0)
        .single()
        .ok_or("invalid seed date")?;
    let store = InMemoryRecordStore::from_records([UserRecord::new(
        "1",
        "Roshan",
        "9817113485",
        "500",
        seeded_at,
    )])?;
    let mut service = RecordService::new(store);
    print_list("seeded", &service, &config);

    let mut session = service.open_create_form(seeded_at);
    session.draft.set_field(RecordField::Name, "Asha");
    session.draft.set_field(RecordField::Phone, "98-4411");
    if let Err(err) = service.submit(&session) {
        println!("submit rejected: {err}");
    }
    session.draft.set_field(RecordField::Money, "120");
    let created = service.submit(&session)?;
    println!("{} id={}", created.mode.success_message(), created.record.id);
    print_list("after create", &service, &config);

    let pending = service.request_delete(&RecordId::new("1"))?;
    service.confirm_delete(pending)?;
    print_list("after delete", &service, &config);

    Ok(())
}

fn print_list(label: &str, service: &RecordService<InMemoryRecordStore>, config: &CoreConfig) {
    let projection = project_list(
        &service.list_records(),
        &config.currency_label,
        local_offset(),
    );
    println!("-- {label} --");
    if let Some(empty) = projection.empty_state {
        println!("{} ({})", empty.title, empty.hint);
    }
    for card in projection.cards {
        println!(
            "{} | {} | {} | {}",
            card.name, card.phone, card.money_label, card.date_label
        );
    }
}
