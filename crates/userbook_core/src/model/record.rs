//! User record domain model.
//!
//! # Responsibility
//! - Define the canonical user record (name, phone, money, date).
//! - Provide stable identity generation for new records.
//!
//! # Invariants
//! - `id` is assigned once at creation and never reassigned.
//! - `phone` and `money` are stored exactly as entered; no parsing happens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque, stable identifier for one user record.
///
/// Serialized as a plain string so externally supplied ids (e.g. `"1"`)
/// round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wraps a caller-provided identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generates a fresh random identifier (UUID v4 text).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Required text fields checked by the form validator.
///
/// Ordering follows form layout so missing-field sets read top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordField {
    Name,
    Phone,
    Money,
}

impl RecordField {
    /// All required fields in form order.
    pub const REQUIRED: [RecordField; 3] = [Self::Name, Self::Phone, Self::Money];

    /// Stable lowercase label used in error messages and FFI envelopes.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Money => "money",
        }
    }
}

impl Display for RecordField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical user entry rendered by the list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Stable identity; immutable once stored.
    pub id: RecordId,
    /// Display name.
    pub name: String,
    /// Phone number as entered (digits, dashes, spaces all accepted).
    pub phone: String,
    /// Amount as entered; no currency parsing.
    pub money: String,
    /// Serialized as RFC 3339 text.
    pub date: DateTime<Utc>,
}

impl UserRecord {
    /// Creates a record with a caller-provided id.
    ///
    /// Used for seeding and tests; form submissions go through
    /// `form::validate_and_build` instead.
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        phone: impl Into<String>,
        money: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone: phone.into(),
            money: money.into(),
            date,
        }
    }
}
