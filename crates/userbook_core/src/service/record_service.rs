//! Record list/form use-case service.
//!
//! # Responsibility
//! - Open create/edit form sessions with the right prefilled draft.
//! - Route accepted submissions to `append` (create) or `replace` (edit).
//! - Gate deletion behind an explicit confirmation step.
//!
//! # Invariants
//! - Rejected submissions never mutate the store.
//! - Deletion only happens through `confirm_delete` with a token issued by
//!   `request_delete`.

use crate::form::validator::{validate_and_build, ValidationError};
use crate::model::draft::RecordDraft;
use crate::model::record::{RecordId, UserRecord};
use crate::store::record_store::{RecordRepository, StoreError};
use chrono::{DateTime, Utc};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// User-facing message shown when a submission is rejected.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill out all fields.";

/// Service error for list/form use cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Draft has empty required fields; the user can correct and resubmit.
    Validation(ValidationError),
    /// Target record does not exist.
    RecordNotFound(RecordId),
    /// Store invariant violation other than not-found.
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::RecordNotFound(id) => write!(f, "record not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::RecordNotFound(_) => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(id) => Self::RecordNotFound(id),
            other => Self::Store(other),
        }
    }
}

/// Whether a form session creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

impl FormMode {
    pub fn header(self) -> &'static str {
        match self {
            Self::Create => "Add New User",
            Self::Edit => "Edit User Details",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Create => "Save User",
            Self::Edit => "Update User",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::Create => "User added successfully!",
            Self::Edit => "User details updated successfully!",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Edit => "edit",
        }
    }
}

/// One open form. Dropping it without submitting discards the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSession {
    pub mode: FormMode,
    /// Editable field values.
    pub draft: RecordDraft,
    target: Option<UserRecord>,
}

impl FormSession {
    /// Record being edited, `None` in create mode.
    pub fn target(&self) -> Option<&UserRecord> {
        self.target.as_ref()
    }
}

/// Result of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub record: UserRecord,
    pub mode: FormMode,
}

/// Copy for the destructive delete confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePrompt {
    pub title: &'static str,
    pub body: &'static str,
}

pub const DELETE_PROMPT: DeletePrompt = DeletePrompt {
    title: "Delete User",
    body: "Are you sure you want to delete this user?",
};

/// Confirmation token for a destructive delete.
///
/// Dropping the token cancels the deletion.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "deletion only happens after confirm_delete"]
pub struct PendingDeletion {
    id: RecordId,
}

impl PendingDeletion {
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Prompt copy for the destructive confirmation dialog.
    pub fn prompt(&self) -> &'static DeletePrompt {
        &DELETE_PROMPT
    }
}

/// Use-case service over any record store implementation.
pub struct RecordService<R: RecordRepository> {
    repo: R,
}

impl<R: RecordRepository> RecordService<R> {
    /// Creates a service using the provided store implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Read-only access to the underlying store.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Lists records for the list view, in insertion order.
    pub fn list_records(&self) -> Vec<UserRecord> {
        self.repo.list()
    }

    /// Opens an empty create form; `now` becomes the default date.
    pub fn open_create_form(&self, now: DateTime<Utc>) -> FormSession {
        FormSession {
            mode: FormMode::Create,
            draft: RecordDraft::blank(now),
            target: None,
        }
    }

    /// Opens an edit form prefilled from the stored record.
    pub fn open_edit_form(&self, id: &RecordId) -> Result<FormSession, ServiceError> {
        let record = self
            .repo
            .get(id)
            .ok_or_else(|| ServiceError::RecordNotFound(id.clone()))?;
        Ok(FormSession {
            mode: FormMode::Edit,
            draft: RecordDraft::from_record(&record),
            target: Some(record),
        })
    }

    /// Validates the session draft and saves it.
    ///
    /// # Contract
    /// - Create mode appends a record with a fresh id.
    /// - Edit mode replaces the target record, keeping its id.
    /// - On `Validation` errors the store is untouched and the caller keeps
    ///   the session open.
    pub fn submit(&mut self, session: &FormSession) -> Result<SubmitOutcome, ServiceError> {
        let record = match validate_and_build(&session.draft, session.target()) {
            Ok(record) => record,
            Err(err) => {
                info!(
                    "event=record_submit module=service status=rejected mode={} missing={}",
                    session.mode.label(),
                    err.field_labels().join(",")
                );
                return Err(err.into());
            }
        };

        let saved = match session.mode {
            FormMode::Create => self.repo.append(record.clone()),
            FormMode::Edit => self.repo.replace(&record.id, record.clone()),
        };
        if let Err(err) = saved {
            error!(
                "event=record_submit module=service status=error mode={} id={} error={}",
                session.mode.label(),
                record.id,
                err
            );
            return Err(err.into());
        }

        info!(
            "event=record_submit module=service status=ok mode={} id={} count={}",
            session.mode.label(),
            record.id,
            self.repo.len()
        );
        Ok(SubmitOutcome {
            record,
            mode: session.mode,
        })
    }

    /// Same as `submit`, then hands the outcome to the completion callback.
    ///
    /// The callback is not invoked when submission fails.
    pub fn submit_with(
        &mut self,
        session: &FormSession,
        on_saved: impl FnOnce(&SubmitOutcome),
    ) -> Result<SubmitOutcome, ServiceError> {
        let outcome = self.submit(session)?;
        on_saved(&outcome);
        Ok(outcome)
    }

    /// Starts a destructive delete, returning the confirmation token.
    pub fn request_delete(&self, id: &RecordId) -> Result<PendingDeletion, ServiceError> {
        if self.repo.get(id).is_none() {
            return Err(ServiceError::RecordNotFound(id.clone()));
        }
        Ok(PendingDeletion { id: id.clone() })
    }

    /// Removes the record named by a confirmed deletion token.
    pub fn confirm_delete(&mut self, pending: PendingDeletion) -> Result<(), ServiceError> {
        self.repo.remove(&pending.id).map_err(|err| {
            error!(
                "event=record_delete module=service status=error id={} error={}",
                pending.id, err
            );
            ServiceError::from(err)
        })?;
        info!(
            "event=record_delete module=service status=ok id={} count={}",
            pending.id,
            self.repo.len()
        );
        Ok(())
    }
}
