//! Domain model for user records shown by the list and form views.
//!
//! # Responsibility
//! - Define the canonical record shape shared by store, form and projections.
//! - Define the unvalidated draft shape edited by the form view.
//!
//! # Invariants
//! - Every record is identified by a stable `RecordId`.
//! - Drafts never enter the store; only validated records do.

pub mod draft;
pub mod record;
