//! Meal category model.
//!
//! # Responsibility
//! - Define the fixed set of categories the listing can filter by.
//! - Provide display metadata (label, icon name) for category pickers.
//!
//! # Invariants
//! - The set is closed; unknown ids are rejected at parse time.
//! - `Category::default()` is `Lunch`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Meal-time label used to filter recipes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Lunch,
    Dinner,
    Breakfast,
    Dessert,
}

impl Category {
    /// All categories in picker display order.
    pub const ALL: [Category; 4] = [
        Category::Lunch,
        Category::Dinner,
        Category::Breakfast,
        Category::Dessert,
    ];

    /// Stable lowercase id, also used as the upstream match label.
    pub fn id(self) -> &'static str {
        match self {
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Breakfast => "breakfast",
            Self::Dessert => "dessert",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Breakfast => "Breakfast",
            Self::Dessert => "Dessert",
        }
    }

    /// Icon name for the picker button. Rendering is up to the host.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Lunch => "cutlery",
            Self::Dinner => "spoon",
            Self::Breakfast => "coffee",
            Self::Dessert => "birthday-cake",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when a category id is not one of the fixed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl Display for CategoryParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown category `{}`; expected lunch|dinner|breakfast|dessert",
            self.0
        )
    }
}

impl Error for CategoryParseError {}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| category.id() == normalized)
            .ok_or_else(|| CategoryParseError(value.trim().to_string()))
    }
}
