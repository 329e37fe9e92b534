//! Unvalidated form values.

use crate::model::record::{RecordField, UserRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// In-progress field values held by the form view before submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDraft {
    pub name: String,
    pub phone: String,
    pub money: String,
    pub date: DateTime<Utc>,
}

impl RecordDraft {
    /// Empty draft for create mode; `date` defaults to form-open time.
    pub fn blank(now: DateTime<Utc>) -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            money: String::new(),
            date: now,
        }
    }

    /// Draft prefilled from an existing record for edit mode.
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            name: record.name.clone(),
            phone: record.phone.clone(),
            money: record.money.clone(),
            date: record.date,
        }
    }

    /// Returns the text value of one required field.
    pub fn field(&self, field: RecordField) -> &str {
        match field {
            RecordField::Name => &self.name,
            RecordField::Phone => &self.phone,
            RecordField::Money => &self.money,
        }
    }

    /// Overwrites one required field, as a text input change would.
    pub fn set_field(&mut self, field: RecordField, value: impl Into<String>) {
        let slot = match field {
            RecordField::Name => &mut self.name,
            RecordField::Phone => &mut self.phone,
            RecordField::Money => &mut self.money,
        };
        *slot = value.into();
    }
}
