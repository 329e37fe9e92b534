//! Record store contracts and in-memory implementation.
//!
//! # Responsibility
//! - Define the data access contract used by list/form use cases.
//! - Hold the authoritative record sequence for one session.
//!
//! # Invariants
//! - Ids are unique within the stored sequence.
//! - Store APIs return semantic errors (`DuplicateId`, `NotFound`) and never
//!   mutate on failure.

pub mod record_store;
