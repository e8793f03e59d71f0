//! Menu categories and the category filter shown above the menu.

use serde::{Deserialize, Serialize};

/// Error returned when a category name is not recognised.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid menu category: {0}")]
pub struct ParseCategoryError(pub String);

/// Menu item category.
///
/// Serialized with the same spelling the admin surface stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Coffee,
    Food,
    Salad,
    Beverage,
    Pastry,
    SetMeal,
}

impl Category {
    /// Every category, in the order the filter bar lists them.
    pub const ALL: [Self; 6] = [
        Self::Coffee,
        Self::Pastry,
        Self::Food,
        Self::Salad,
        Self::Beverage,
        Self::SetMeal,
    ];

    /// The stored spelling of this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Coffee => "coffee",
            Self::Food => "food",
            Self::Salad => "salad",
            Self::Beverage => "beverage",
            Self::Pastry => "pastry",
            Self::SetMeal => "setMeal",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_owned()))
    }
}

/// Which categories the menu screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// Every item, unfiltered.
    #[default]
    All,
    /// Only items in one category.
    Only(Category),
}

impl CategoryFilter {
    /// Whether an item in `category` passes this filter.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(category) => category.fmt(f),
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}
