//! Flutter-facing bindings for the Creative Vitae core.

pub mod api;
