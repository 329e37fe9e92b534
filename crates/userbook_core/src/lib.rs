//! Core domain logic for Userbook.
//! This crate is the single source of truth for record invariants.

pub mod config;
pub mod form;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod view;

pub use config::{ConfigError, CoreConfig};
pub use form::validator::{build_record, check_required, validate_and_build, ValidationError};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::draft::RecordDraft;
pub use model::record::{RecordField, RecordId, UserRecord};
pub use service::record_service::{
    DeletePrompt, FormMode, FormSession, PendingDeletion, RecordService, ServiceError,
    SubmitOutcome, DELETE_PROMPT, MISSING_FIELDS_MESSAGE,
};
pub use store::record_store::{InMemoryRecordStore, RecordRepository, StoreError, StoreResult};
pub use view::list::{
    local_offset, offset_from_minutes, project_card, project_list, ListProjection, RecordCard,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
