//! Record store contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide list/get/append/replace/remove over the session's records.
//! - Keep insertion order stable for the list view.
//!
//! # Invariants
//! - `append` rejects duplicate ids without mutating.
//! - `replace` keeps the stored id and sequence position.
//! - `remove` is not idempotent; a second call fails with `NotFound`.

use crate::model::record::{RecordId, UserRecord};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store misuse errors. Both variants indicate a caller bug, not user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    DuplicateId(RecordId),
    NotFound(RecordId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "record id already exists: {id}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Store interface for record list/form use cases.
pub trait RecordRepository {
    /// Returns all records in insertion order.
    fn list(&self) -> Vec<UserRecord>;
    fn get(&self, id: &RecordId) -> Option<UserRecord>;
    fn append(&mut self, record: UserRecord) -> StoreResult<()>;
    fn replace(&mut self, id: &RecordId, record: UserRecord) -> StoreResult<()>;
    fn remove(&mut self, id: &RecordId) -> StoreResult<()>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Vec-backed store owned by the list view session.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    records: Vec<UserRecord>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a store with `records`, keeping their order.
    ///
    /// # Errors
    /// - Returns `DuplicateId` for the first repeated id.
    pub fn from_records(records: impl IntoIterator<Item = UserRecord>) -> StoreResult<Self> {
        let mut store = Self::new();
        for record in records {
            store.append(record)?;
        }
        Ok(store)
    }

    fn position(&self, id: &RecordId) -> Option<usize> {
        self.records.iter().position(|record| &record.id == id)
    }
}

impl RecordRepository for InMemoryRecordStore {
    fn list(&self) -> Vec<UserRecord> {
        self.records.clone()
    }

    fn get(&self, id: &RecordId) -> Option<UserRecord> {
        self.position(id).map(|index| self.records[index].clone())
    }

    fn append(&mut self, record: UserRecord) -> StoreResult<()> {
        if self.position(&record.id).is_some() {
            warn!(
                "event=record_append module=store status=error reason=duplicate_id id={}",
                record.id
            );
            return Err(StoreError::DuplicateId(record.id));
        }

        self.records.push(record);
        Ok(())
    }

    fn replace(&mut self, id: &RecordId, record: UserRecord) -> StoreResult<()> {
        let Some(index) = self.position(id) else {
            warn!("event=record_replace module=store status=error reason=not_found id={id}");
            return Err(StoreError::NotFound(id.clone()));
        };

        let slot = &mut self.records[index];
        slot.name = record.name;
        slot.phone = record.phone;
        slot.money = record.money;
        slot.date = record.date;
        Ok(())
    }

    fn remove(&mut self, id: &RecordId) -> StoreResult<()> {
        let Some(index) = self.position(id) else {
            warn!("event=record_remove module=store status=error reason=not_found id={id}");
            return Err(StoreError::NotFound(id.clone()));
        };

        self.records.remove(index);
        Ok(())
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
