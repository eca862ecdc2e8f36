//! Grid-ready projection of listing state.
//!
//! Text here mirrors what the home screen shows; layout and styling stay on
//! the host side.

use crate::listing::state::ListingState;
use crate::model::recipe::{Recipe, RecipeId};
use serde::{Deserialize, Serialize};

pub const UNNAMED_RECIPE: &str = "Unnamed Recipe";
pub const CARD_SUBTITLE: &str = "Fresh & Healthy";
pub const EMPTY_MESSAGE: &str = "No recipes found. Try a different category or search term.";

/// One grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeCard {
    pub id: RecipeId,
    pub name: String,
    pub subtitle: String,
    pub image: String,
    pub price: u32,
    pub quantity: u32,
    /// e.g. `Rs 320`.
    pub price_label: String,
    /// e.g. `4 left`.
    pub quantity_label: String,
}

impl RecipeCard {
    /// Builds a card, or `None` for recipes without an image.
    pub fn from_recipe(recipe: &Recipe) -> Option<Self> {
        if recipe.image.trim().is_empty() {
            return None;
        }
        let name = if recipe.name.trim().is_empty() {
            UNNAMED_RECIPE.to_string()
        } else {
            recipe.name.clone()
        };
        Some(Self {
            id: recipe.id,
            name,
            subtitle: CARD_SUBTITLE.to_string(),
            image: recipe.image.clone(),
            price: recipe.price,
            quantity: recipe.quantity,
            price_label: format!("Rs {}", recipe.price),
            quantity_label: format!("{} left", recipe.quantity),
        })
    }
}

/// Previous/next controls and the `Page X of Y` label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationView {
    pub current_page: u32,
    pub total_pages: u32,
    pub label: String,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl PaginationView {
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            current_page,
            total_pages,
            label: format!("Page {current_page} of {total_pages}"),
            previous_enabled: current_page > 1,
            next_enabled: current_page < total_pages,
        }
    }
}

/// Everything the home screen needs for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingView {
    pub greeting: String,
    pub selected_category: String,
    pub cards: Vec<RecipeCard>,
    pub pagination: PaginationView,
    pub loading: bool,
    /// Set only when loading finished with nothing to show.
    pub empty_message: Option<String>,
}

impl ListingView {
    pub fn from_state(username: &str, state: &ListingState) -> Self {
        let cards = state
            .recipes
            .iter()
            .filter_map(RecipeCard::from_recipe)
            .collect::<Vec<_>>();
        let empty_message = if !state.loading && cards.is_empty() {
            Some(EMPTY_MESSAGE.to_string())
        } else {
            None
        };
        Self {
            greeting: format!("Hello, {username}"),
            selected_category: state.selected_category.id().to_string(),
            cards,
            pagination: PaginationView::new(state.current_page, state.total_pages),
            loading: state.loading,
            empty_message,
        }
    }
}
