//! Flutter-facing bindings for the recipe book core.

pub mod api;
