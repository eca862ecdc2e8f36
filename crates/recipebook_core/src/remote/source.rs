//! Recipe source contract and retrieval error taxonomy.

use crate::model::recipe::UpstreamRecipe;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for retrieval APIs.
pub type RetrievalResult<T> = Result<T, RetrievalError>;

/// Failure while fetching or decoding the upstream collection.
#[derive(Debug)]
pub enum RetrievalError {
    /// Transport-level failure (DNS, connect, timeout, body read).
    Network(reqwest::Error),
    /// Upstream answered with a non-success status.
    Status { url: String, status: u16 },
    /// Response body is not the expected JSON shape.
    Parse(serde_json::Error),
    /// Non-HTTP source reported a failure.
    Source(String),
}

impl RetrievalError {
    /// Short stable code for log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Status { .. } => "http_status",
            Self::Parse(_) => "parse",
            Self::Source(_) => "source",
        }
    }
}

impl Display for RetrievalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(err) => write!(f, "recipe request failed: {err}"),
            Self::Status { url, status } => {
                write!(f, "recipe endpoint `{url}` returned status {status}")
            }
            Self::Parse(err) => write!(f, "recipe payload is malformed: {err}"),
            Self::Source(message) => write!(f, "recipe source failed: {message}"),
        }
    }
}

impl Error for RetrievalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Network(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Status { .. } | Self::Source(_) => None,
        }
    }
}

impl From<reqwest::Error> for RetrievalError {
    fn from(value: reqwest::Error) -> Self {
        Self::Network(value)
    }
}

impl From<serde_json::Error> for RetrievalError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Provider of the full, unfiltered upstream recipe collection.
pub trait RecipeSource {
    /// Fetches every upstream recipe.
    fn fetch_all(&self) -> RetrievalResult<Vec<UpstreamRecipe>>;
}

impl<S: RecipeSource + ?Sized> RecipeSource for &S {
    fn fetch_all(&self) -> RetrievalResult<Vec<UpstreamRecipe>> {
        (**self).fetch_all()
    }
}

impl<S: RecipeSource + ?Sized> RecipeSource for Box<S> {
    fn fetch_all(&self) -> RetrievalResult<Vec<UpstreamRecipe>> {
        (**self).fetch_all()
    }
}

/// In-memory source returning a fixed collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticRecipeSource {
    recipes: Vec<UpstreamRecipe>,
}

impl StaticRecipeSource {
    pub fn new(recipes: Vec<UpstreamRecipe>) -> Self {
        Self { recipes }
    }
}

impl RecipeSource for StaticRecipeSource {
    fn fetch_all(&self) -> RetrievalResult<Vec<UpstreamRecipe>> {
        Ok(self.recipes.clone())
    }
}
