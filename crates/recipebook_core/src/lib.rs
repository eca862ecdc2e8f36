//! Core domain logic for the recipe book app.
//! Hosts (mobile shell, CLI) call into this crate; it owns every listing
//! and login rule.

pub mod auth;
pub mod config;
pub mod listing;
pub mod logging;
pub mod model;
pub mod remote;
pub mod service;

pub use auth::credentials::{validate_login_form, CredentialStore, LoginError, ValidationError};
pub use config::{ConfigError, RecipeBookConfig};
pub use listing::controller::ListingController;
pub use listing::event::{FetchRequest, FetchSeq, ListingCommand, ListingEvent};
pub use listing::pagination::{paginate, total_pages, Page};
pub use listing::state::ListingState;
pub use listing::view::{ListingView, PaginationView, RecipeCard};
pub use logging::{init_logging, logging_status, LogLevel, LoggingError};
pub use model::alert::Alert;
pub use model::category::{Category, CategoryParseError};
pub use model::pricing::PriceSynthesis;
pub use model::recipe::{Recipe, RecipeId, UpstreamPayload, UpstreamRecipe};
pub use remote::http::HttpRecipeSource;
pub use remote::source::{RecipeSource, RetrievalError, RetrievalResult, StaticRecipeSource};
pub use service::listing_session::ListingSession;
pub use service::recipe_service::RecipeService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
