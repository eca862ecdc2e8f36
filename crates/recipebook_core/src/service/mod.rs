//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate source calls into use-case level APIs.
//! - Keep UI/FFI layers decoupled from transport details.

pub mod listing_session;
pub mod recipe_service;
