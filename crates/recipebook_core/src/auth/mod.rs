//! Login against a static allow-list.
//!
//! # Responsibility
//! - Validate that both login fields are non-empty.
//! - Match the submitted pair against an in-memory credential list.
//!
//! # Invariants
//! - Validation runs before any credential lookup.
//! - Passwords are never logged.

pub mod credentials;
