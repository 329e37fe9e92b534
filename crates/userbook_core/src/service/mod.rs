//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate form validation and store mutations into list/form use cases.
//! - Keep FFI/CLI callers decoupled from store details.

pub mod record_service;
