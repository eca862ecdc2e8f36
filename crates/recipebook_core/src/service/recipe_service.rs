//! Recipe retrieval use-case service.
//!
//! # Responsibility
//! - Fetch the full upstream collection through a `RecipeSource`.
//! - Decorate each item with synthesized price/quantity.
//! - Filter by category and case-insensitive name substring.
//!
//! # Invariants
//! - No pagination, sorting or dedup happens here; upstream order is kept.
//! - A failed fetch is surfaced once and never retried.

use crate::model::category::Category;
use crate::model::pricing::PriceSynthesis;
use crate::model::recipe::{Recipe, UpstreamRecipe};
use crate::remote::source::{RecipeSource, RetrievalResult};
use log::debug;

/// Retrieval service over a recipe source.
pub struct RecipeService<S: RecipeSource> {
    source: S,
    price_synthesis: PriceSynthesis,
}

impl<S: RecipeSource> RecipeService<S> {
    /// Creates a service with the default (id-seeded) price synthesis.
    pub fn new(source: S) -> Self {
        Self::with_price_synthesis(source, PriceSynthesis::default())
    }

    pub fn with_price_synthesis(source: S, price_synthesis: PriceSynthesis) -> Self {
        Self {
            source,
            price_synthesis,
        }
    }

    pub fn price_synthesis(&self) -> PriceSynthesis {
        self.price_synthesis
    }

    /// Fetches, decorates and filters recipes for one category/query pair.
    ///
    /// # Contract
    /// - Keeps recipes whose `meal_type` contains `category` (any case).
    /// - Keeps recipes whose `name` contains `search_query` (any case); an
    ///   empty query keeps every category match.
    ///
    /// # Errors
    /// - Propagates the source's `RetrievalError` unchanged.
    pub fn fetch_recipes(
        &self,
        category: Category,
        search_query: &str,
    ) -> RetrievalResult<Vec<Recipe>> {
        let upstream = self.source.fetch_all()?;
        let fetched = upstream.len();
        let decorated = decorate_recipes(upstream, self.price_synthesis);
        let filtered = filter_recipes(decorated, category.id(), search_query);
        debug!(
            "event=recipes_filter module=service status=ok category={} query_len={} fetched={} matched={}",
            category,
            search_query.chars().count(),
            fetched,
            filtered.len()
        );
        Ok(filtered)
    }
}

/// Converts upstream records into decorated recipes.
pub fn decorate_recipes(upstream: Vec<UpstreamRecipe>, synthesis: PriceSynthesis) -> Vec<Recipe> {
    upstream
        .into_iter()
        .map(|item| {
            let tag = synthesis.price_tag(item.id);
            Recipe {
                id: item.id,
                name: item.name,
                image: item.image,
                meal_type: item.meal_type.unwrap_or_default(),
                price: tag.price,
                quantity: tag.quantity,
            }
        })
        .collect()
}

/// Keeps recipes tagged with `category` whose name contains `search_query`.
pub fn filter_recipes(recipes: Vec<Recipe>, category: &str, search_query: &str) -> Vec<Recipe> {
    recipes
        .into_iter()
        .filter(|recipe| recipe.has_meal_type(category) && recipe.name_contains(search_query))
        .collect()
}
