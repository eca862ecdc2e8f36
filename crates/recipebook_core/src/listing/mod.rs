//! Home listing controller.
//!
//! # Responsibility
//! - Own category/search/page selection state for one listing screen.
//! - Turn input events into fetch commands and apply completed fetches.
//! - Project state into grid-ready view data.
//!
//! # Invariants
//! - `1 <= current_page <= total_pages` at all times.
//! - Only the latest issued fetch may update state.
//! - Search input reaches retrieval only through the debouncer.

pub mod controller;
pub mod debounce;
pub mod event;
pub mod pagination;
pub mod state;
pub mod view;
