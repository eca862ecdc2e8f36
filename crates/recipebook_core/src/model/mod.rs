//! Domain model for the recipe listing.
//!
//! # Responsibility
//! - Define the recipe record shared by retrieval, listing and view layers.
//! - Own the fixed meal category set and the price/quantity synthesis rules.
//!
//! # Invariants
//! - Every recipe is identified by a stable upstream `RecipeId`.
//! - Synthesized price and quantity always stay inside their documented ranges.

pub mod alert;
pub mod category;
pub mod pricing;
pub mod recipe;
