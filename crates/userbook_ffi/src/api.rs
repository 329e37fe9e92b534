//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose list/form/delete use cases to Dart via FRB.
//! - Own the process-wide record session behind a mutex.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Failures are returned as envelopes with `ok = false`, never thrown.
//! - `delete_record` is only called after the UI confirmation prompt.

use chrono::{DateTime, Utc};
use log::warn;
use std::sync::{Mutex, MutexGuard, OnceLock};
use userbook_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, local_offset,
    offset_from_minutes, ping as ping_inner, project_list, CoreConfig, FormMode,
    InMemoryRecordStore, RecordField, RecordId, RecordService, ServiceError, DELETE_PROMPT,
    MISSING_FIELDS_MESSAGE,
};

type SessionService = RecordService<InMemoryRecordStore>;

static SESSION: OnceLock<Mutex<SessionService>> = OnceLock::new();
static CONFIG: OnceLock<CoreConfig> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One list view row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordItem {
    pub id: String,
    pub name: String,
    pub phone: String,
    /// Raw amount, for prefilling the edit form.
    pub money: String,
    /// Currency-prefixed amount for display.
    pub money_label: String,
    pub date_label: String,
    pub date_epoch_ms: i64,
}

/// List view envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordListResponse {
    /// Records in insertion order.
    pub items: Vec<RecordItem>,
    /// Empty-state title, set only when `items` is empty.
    pub empty_title: Option<String>,
    /// Empty-state hint, set only when `items` is empty.
    pub empty_hint: Option<String>,
    /// Human-readable diagnostics message.
    pub message: String,
}

impl RecordListResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            empty_title: None,
            empty_hint: None,
            message: format!("list_records failed: {}", message.into()),
        }
    }
}

/// Action envelope for submit and delete flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Saved or deleted record ID.
    pub record_id: Option<String>,
    /// Human-readable message for alerts.
    pub message: String,
    /// Empty required fields (`name|phone|money`) on validation failure.
    pub missing_fields: Vec<String>,
}

impl RecordActionResponse {
    fn success(message: impl Into<String>, record_id: String) -> Self {
        Self {
            ok: true,
            record_id: Some(record_id),
            message: message.into(),
            missing_fields: Vec::new(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            record_id: None,
            message: message.into(),
            missing_fields: Vec::new(),
        }
    }

    fn from_service_error(operation: &str, err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(validation) => Self {
                ok: false,
                record_id: None,
                message: MISSING_FIELDS_MESSAGE.to_string(),
                missing_fields: validation
                    .field_labels()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            },
            other => Self::failure(format!("{operation} failed: {other}")),
        }
    }
}

/// Header and submit button copy for the record form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormCopy {
    pub header: String,
    pub submit_label: String,
}

/// Title and body for the destructive delete confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePromptCopy {
    pub title: String,
    pub body: String,
}

/// Returns form copy for create (`is_edit = false`) or edit mode.
#[flutter_rust_bridge::frb(sync)]
pub fn form_copy(is_edit: bool) -> FormCopy {
    let mode = if is_edit {
        FormMode::Edit
    } else {
        FormMode::Create
    };
    FormCopy {
        header: mode.header().to_string(),
        submit_label: mode.submit_label().to_string(),
    }
}

/// Returns copy for the prompt shown before `delete_record`.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_prompt() -> DeletePromptCopy {
    DeletePromptCopy {
        title: DELETE_PROMPT.title.to_string(),
        body: DELETE_PROMPT.body.to_string(),
    }
}

/// Lists session records for the list view.
///
/// Input semantics:
/// - `utc_offset_minutes`: device offset east of UTC (Dart
///   `DateTime.now().timeZoneOffset.inMinutes`); `None` uses the host zone.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn list_records(utc_offset_minutes: Option<i32>) -> RecordListResponse {
    let offset = match utc_offset_minutes {
        Some(minutes) => match offset_from_minutes(minutes) {
            Some(offset) => offset,
            None => {
                return RecordListResponse::failure(format!(
                    "utc_offset_minutes out of range: {minutes}"
                ));
            }
        },
        None => local_offset(),
    };
    let records = match lock_session() {
        Ok(service) => service.list_records(),
        Err(message) => {
            return RecordListResponse::failure(message);
        }
    };

    let projection = project_list(&records, &resolve_config().currency_label, offset);
    let items = projection
        .cards
        .into_iter()
        .zip(records.iter())
        .map(|(card, record)| RecordItem {
            id: card.id.to_string(),
            name: card.name,
            phone: card.phone,
            money: record.money.clone(),
            money_label: card.money_label,
            date_label: card.date_label,
            date_epoch_ms: record.date.timestamp_millis(),
        })
        .collect::<Vec<_>>();
    let message = format!("Loaded {} record(s).", items.len());

    RecordListResponse {
        items,
        empty_title: projection.empty_state.as_ref().map(|s| s.title.to_string()),
        empty_hint: projection.empty_state.as_ref().map(|s| s.hint.to_string()),
        message,
    }
}

/// Submits the record form.
///
/// Input semantics:
/// - `record_id`: `None` creates a record, `Some(id)` edits that record.
/// - `date_epoch_ms`: picked date; `None` keeps the form default (now for
///   create, the stored date for edit).
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics.
/// - On validation failure returns `ok = false` with `missing_fields`.
#[flutter_rust_bridge::frb(sync)]
pub fn submit_record(
    record_id: Option<String>,
    name: String,
    phone: String,
    money: String,
    date_epoch_ms: Option<i64>,
) -> RecordActionResponse {
    let date = match date_epoch_ms.map(parse_epoch_ms).transpose() {
        Ok(date) => date,
        Err(message) => return RecordActionResponse::failure(message),
    };
    let mut service = match lock_session() {
        Ok(service) => service,
        Err(message) => {
            return RecordActionResponse::failure(format!("submit_record failed: {message}"))
        }
    };

    let session = match record_id {
        Some(id) => service.open_edit_form(&RecordId::new(id)),
        None => Ok(service.open_create_form(Utc::now())),
    };
    let mut session = match session {
        Ok(session) => session,
        Err(err) => return RecordActionResponse::from_service_error("submit_record", err),
    };

    for (field, value) in [
        (RecordField::Name, name),
        (RecordField::Phone, phone),
        (RecordField::Money, money),
    ] {
        session.draft.set_field(field, value);
    }
    if let Some(date) = date {
        session.draft.date = date;
    }

    match service.submit(&session) {
        Ok(outcome) => RecordActionResponse::success(
            outcome.mode.success_message(),
            outcome.record.id.to_string(),
        ),
        Err(err) => RecordActionResponse::from_service_error("submit_record", err),
    }
}

/// Deletes one record after the UI confirmed the destructive prompt.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics.
/// - Deleting an unknown or already-deleted ID returns `ok = false`.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_record(record_id: String) -> RecordActionResponse {
    let mut service = match lock_session() {
        Ok(service) => service,
        Err(message) => {
            return RecordActionResponse::failure(format!("delete_record failed: {message}"))
        }
    };

    let id = RecordId::new(record_id);
    let result = service
        .request_delete(&id)
        .and_then(|pending| service.confirm_delete(pending));
    match result {
        Ok(()) => RecordActionResponse::success("User deleted.", id.to_string()),
        Err(err) => RecordActionResponse::from_service_error("delete_record", err),
    }
}

fn resolve_config() -> &'static CoreConfig {
    CONFIG.get_or_init(|| {
        CoreConfig::from_env().unwrap_or_else(|err| {
            warn!("event=config_resolve module=ffi status=fallback error={err}");
            CoreConfig::default()
        })
    })
}

fn lock_session() -> Result<MutexGuard<'static, SessionService>, String> {
    SESSION
        .get_or_init(|| Mutex::new(RecordService::new(InMemoryRecordStore::new())))
        .lock()
        .map_err(|_| "record session lock poisoned".to_string())
}

fn parse_epoch_ms(value: i64) -> Result<DateTime<Utc>, String> {
    DateTime::from_timestamp_millis(value)
        .ok_or_else(|| format!("date_epoch_ms out of range: {value}"))
}
