//! Record form validation.
//!
//! # Responsibility
//! - Decide whether a draft is complete enough to save.
//! - Normalize accepted drafts into `UserRecord` values.
//!
//! # Invariants
//! - Validation is pure; it never touches the record store.

pub mod validator;
