//! Flutter-facing bindings for Userbook core.

pub mod api;
