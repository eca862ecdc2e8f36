//! Runtime configuration for retrieval and listing.
//!
//! # Responsibility
//! - Hold endpoint, timeout, page size, debounce and price synthesis settings.
//! - Apply optional environment overrides on top of built-in defaults.
//!
//! # Invariants
//! - `page_size` is at least 1.
//! - Empty environment values are treated as unset.

use crate::model::pricing::PriceSynthesis;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://dummyjson.com/recipes";
pub const DEFAULT_PAGE_SIZE: usize = 8;
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

pub const ENV_API_URL: &str = "RECIPEBOOK_API_URL";
pub const ENV_TIMEOUT_MS: &str = "RECIPEBOOK_TIMEOUT_MS";
pub const ENV_PAGE_SIZE: &str = "RECIPEBOOK_PAGE_SIZE";
pub const ENV_DEBOUNCE_MS: &str = "RECIPEBOOK_DEBOUNCE_MS";
pub const ENV_PRICE_MODE: &str = "RECIPEBOOK_PRICE_MODE";

/// Configuration error for malformed override values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed.
    InvalidValue { key: &'static str, value: String },
    /// Page size must be non-zero.
    ZeroPageSize,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, value } => write!(f, "invalid value for {key}: `{value}`"),
            Self::ZeroPageSize => write!(f, "page size must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

/// Settings shared by the retrieval service and listing controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeBookConfig {
    /// Full upstream collection URL.
    pub endpoint: String,
    pub request_timeout: Duration,
    /// Items per listing page.
    pub page_size: usize,
    /// Quiet period before a search keystroke triggers retrieval.
    pub debounce: Duration,
    pub price_synthesis: PriceSynthesis,
}

impl Default for RecipeBookConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            page_size: DEFAULT_PAGE_SIZE,
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            price_synthesis: PriceSynthesis::default(),
        }
    }
}

impl RecipeBookConfig {
    /// Builds config from defaults plus process environment overrides.
    ///
    /// # Errors
    /// - Returns `ConfigError::InvalidValue` for non-numeric durations/sizes
    ///   or an unknown price mode.
    /// - Returns `ConfigError::ZeroPageSize` when page size is `0`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds config from defaults plus overrides served by `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let read = |key: &'static str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(endpoint) = read(ENV_API_URL) {
            config.endpoint = endpoint;
        }
        if let Some(raw) = read(ENV_TIMEOUT_MS) {
            config.request_timeout = Duration::from_millis(parse_number(ENV_TIMEOUT_MS, &raw)?);
        }
        if let Some(raw) = read(ENV_PAGE_SIZE) {
            config.page_size = parse_number(ENV_PAGE_SIZE, &raw)?;
        }
        if let Some(raw) = read(ENV_DEBOUNCE_MS) {
            config.debounce = Duration::from_millis(parse_number(ENV_DEBOUNCE_MS, &raw)?);
        }
        if let Some(raw) = read(ENV_PRICE_MODE) {
            config.price_synthesis = parse_price_mode(&raw)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.parse::<T>().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

fn parse_price_mode(raw: &str) -> Result<PriceSynthesis, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "seeded" | "seeded_by_id" => Ok(PriceSynthesis::SeededById),
        "per_fetch" | "random" => Ok(PriceSynthesis::PerFetch),
        _ => Err(ConfigError::InvalidValue {
            key: ENV_PRICE_MODE,
            value: raw.to_string(),
        }),
    }
}
