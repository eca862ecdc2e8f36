//! Recipe domain model and upstream wire shapes.
//!
//! # Responsibility
//! - Define the decorated `Recipe` record consumed by listing/view code.
//! - Define the raw upstream payload shape decoded from the recipe endpoint.
//!
//! # Invariants
//! - `id` is stable for the session and never reused for another recipe.
//! - `meal_type` is never absent; missing upstream values become empty.
//! - `price` is in `[150, 450)` and `quantity` in `[1, 10]`.

use serde::{Deserialize, Deserializer, Serialize};

/// Stable identifier for a recipe, taken verbatim from upstream.
pub type RecipeId = u64;

/// Recipe as returned by the upstream collection endpoint.
///
/// Only the fields the listing needs are decoded; everything else upstream
/// sends is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamRecipe {
    pub id: RecipeId,
    /// Missing or `null` decodes as empty; the card falls back to a placeholder.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Missing or `null` decodes as empty; such recipes get no card.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image: String,
    /// Upstream omits this for some records.
    #[serde(default)]
    pub meal_type: Option<Vec<String>>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Top-level upstream response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamPayload {
    pub recipes: Vec<UpstreamRecipe>,
}

/// Read-only recipe record decorated with locally synthesized fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    /// Image URI.
    pub image: String,
    /// Category labels; compared case-insensitively.
    pub meal_type: Vec<String>,
    /// Synthesized price in `[150, 450)`.
    pub price: u32,
    /// Synthesized stock count in `[1, 10]`.
    pub quantity: u32,
}

impl Recipe {
    /// Returns whether `meal_type` contains `label`, ignoring case.
    pub fn has_meal_type(&self, label: &str) -> bool {
        let wanted = label.to_lowercase();
        self.meal_type
            .iter()
            .any(|value| value.to_lowercase() == wanted)
    }

    /// Returns whether `name` contains `needle` as a case-insensitive substring.
    ///
    /// An empty needle matches every recipe.
    pub fn name_contains(&self, needle: &str) -> bool {
        needle.is_empty() || self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}
