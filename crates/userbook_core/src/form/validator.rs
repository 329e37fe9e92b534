//! Draft validation and record normalization.
//!
//! # Responsibility
//! - Reject drafts with any empty required field, reporting all of them.
//! - Build new records (fresh id) or updated records (kept id).
//!
//! # Invariants
//! - Emptiness means zero length; whitespace-only values are accepted.
//! - `date` is never validated.
//! - An edit never changes the existing record id.

use crate::model::draft::RecordDraft;
use crate::model::record::{RecordField, RecordId, UserRecord};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Draft rejected because one or more required fields are empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Every empty required field, in form order.
    pub missing_fields: BTreeSet<RecordField>,
}

impl ValidationError {
    /// Returns whether `field` was reported missing.
    pub fn is_missing(&self, field: RecordField) -> bool {
        self.missing_fields.contains(&field)
    }

    /// Missing field labels in form order.
    pub fn field_labels(&self) -> Vec<&'static str> {
        self.missing_fields.iter().map(|field| field.as_str()).collect()
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "missing required fields: {}",
            self.field_labels().join(", ")
        )
    }
}

impl Error for ValidationError {}

/// Collects empty required fields of `draft`.
///
/// Returns `Ok(())` when every required field has at least one character.
pub fn check_required(draft: &RecordDraft) -> Result<(), ValidationError> {
    let missing_fields = RecordField::REQUIRED
        .into_iter()
        .filter(|field| draft.field(*field).is_empty())
        .collect::<BTreeSet<_>>();

    if missing_fields.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { missing_fields })
    }
}

/// Validates `draft` and builds the record to save.
///
/// `next_id` is only called in create mode (`existing == None`). Uniqueness
/// of the generated id against the store is checked later by `append`.
pub fn build_record(
    draft: &RecordDraft,
    existing: Option<&UserRecord>,
    next_id: impl FnOnce() -> RecordId,
) -> Result<UserRecord, ValidationError> {
    check_required(draft)?;

    let id = match existing {
        Some(record) => record.id.clone(),
        None => next_id(),
    };

    Ok(UserRecord {
        id,
        name: draft.name.clone(),
        phone: draft.phone.clone(),
        money: draft.money.clone(),
        date: draft.date,
    })
}

/// Validates `draft` and builds the record to save, generating a random id
/// for new records.
pub fn validate_and_build(
    draft: &RecordDraft,
    existing: Option<&UserRecord>,
) -> Result<UserRecord, ValidationError> {
    build_record(draft, existing, RecordId::generate)
}
