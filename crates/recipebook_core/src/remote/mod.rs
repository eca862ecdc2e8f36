//! Upstream recipe sources.
//!
//! # Responsibility
//! - Define the `RecipeSource` contract used by the retrieval service.
//! - Provide the HTTP-backed source and an in-memory source.
//!
//! # Invariants
//! - Sources return the full upstream collection; no filtering happens here.
//! - Sources never retry; a failure is reported once to the caller.

pub mod http;
pub mod source;
