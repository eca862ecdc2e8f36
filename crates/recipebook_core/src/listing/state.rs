//! Listing screen state.

use crate::model::category::Category;
use crate::model::recipe::Recipe;

/// Selection and result state for one mounted listing screen.
///
/// `recipes` is derived from the last applied fetch and is replaced
/// wholesale on every completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingState {
    pub selected_category: Category,
    /// Last search text released by the debouncer.
    pub search_query: String,
    pub current_page: u32,
    pub total_pages: u32,
    /// Current page slice.
    pub recipes: Vec<Recipe>,
    /// Size of the full filtered set behind `recipes`.
    pub total_items: usize,
    pub loading: bool,
    /// Message of the last failed retrieval, cleared on success.
    pub last_error: Option<String>,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            selected_category: Category::default(),
            search_query: String::new(),
            current_page: 1,
            total_pages: 1,
            recipes: Vec::new(),
            total_items: 0,
            loading: true,
            last_error: None,
        }
    }
}

impl ListingState {
    /// Returns whether the empty-state message applies.
    pub fn is_empty_result(&self) -> bool {
        !self.loading && self.recipes.is_empty()
    }
}
