//! HTTP-backed recipe source.
//!
//! # Responsibility
//! - Issue one unauthenticated GET against the configured collection URL.
//! - Decode the `{ "recipes": [...] }` envelope.
//!
//! # Invariants
//! - Non-2xx responses are errors; the body is not decoded.
//! - No retry is attempted.

use crate::config::RecipeBookConfig;
use crate::model::recipe::{UpstreamPayload, UpstreamRecipe};
use crate::remote::source::{RecipeSource, RetrievalError, RetrievalResult};
use log::{error, info};
use reqwest::blocking::Client;
use std::time::{Duration, Instant};

/// Blocking HTTP client for the recipe collection endpoint.
#[derive(Debug, Clone)]
pub struct HttpRecipeSource {
    client: Client,
    endpoint: String,
}

impl HttpRecipeSource {
    /// Builds a source for `endpoint` with a per-request timeout.
    ///
    /// # Errors
    /// - Returns `RetrievalError::Network` when the TLS/client backend cannot
    ///   be initialized.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> RetrievalResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Builds a source from endpoint/timeout settings in `config`.
    pub fn from_config(config: &RecipeBookConfig) -> RetrievalResult<Self> {
        Self::new(config.endpoint.clone(), config.request_timeout)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn fetch_payload(&self) -> RetrievalResult<UpstreamPayload> {
        let response = self.client.get(&self.endpoint).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(RetrievalError::Status {
                url: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }
        let body = response.text()?;
        Ok(parse_payload(&body)?)
    }
}

impl RecipeSource for HttpRecipeSource {
    fn fetch_all(&self) -> RetrievalResult<Vec<UpstreamRecipe>> {
        let started_at = Instant::now();
        info!("event=recipes_fetch module=remote status=start");

        match self.fetch_payload() {
            Ok(payload) => {
                info!(
                    "event=recipes_fetch module=remote status=ok duration_ms={} count={}",
                    started_at.elapsed().as_millis(),
                    payload.recipes.len()
                );
                Ok(payload.recipes)
            }
            Err(err) => {
                error!(
                    "event=recipes_fetch module=remote status=error duration_ms={} error_code={} error={}",
                    started_at.elapsed().as_millis(),
                    err.code(),
                    err
                );
                Err(err)
            }
        }
    }
}

/// Decodes an upstream response body.
pub fn parse_payload(body: &str) -> Result<UpstreamPayload, serde_json::Error> {
    serde_json::from_str(body)
}
