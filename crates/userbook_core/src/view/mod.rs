//! Display projections for the list view.
//!
//! # Responsibility
//! - Derive display labels from stored records without mutating them.
//! - Keep presentation copy for the empty state in one place.

pub mod list;
