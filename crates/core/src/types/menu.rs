//! Menu items and cart lines.

use serde::{Deserialize, Serialize};

use super::category::{Category, CategoryFilter};
use super::id::MenuItemId;
use super::price::Price;
use super::quantity::Quantity;

/// A dish or drink on the menu.
///
/// The JSON shape matches what the admin surface writes to storage:
///
/// ```
/// use qr_menu_core::{Category, MenuItem};
///
/// let item: MenuItem = serde_json::from_str(
///     r#"{"id":"4","name":"Croissant","description":"Buttery and flaky","price":3.5,"category":"pastry","vegetarian":true}"#,
/// ).unwrap();
/// assert_eq!(item.category, Category::Pastry);
/// assert!(item.vegetarian);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: Category,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub vegetarian: bool,
}

/// Items passing `filter`, in their original order.
pub fn filter_by_category(
    items: &[MenuItem],
    filter: CategoryFilter,
) -> impl Iterator<Item = &MenuItem> {
    items.iter().filter(move |item| filter.matches(item.category))
}

/// One menu item plus the number of units ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub item: MenuItem,
    pub quantity: Quantity,
}

impl CartLine {
    /// Create a line for `quantity` units of `item`.
    #[must_use]
    pub const fn new(item: MenuItem, quantity: Quantity) -> Self {
        Self { item, quantity }
    }

    /// The menu item ID this line is keyed on.
    #[must_use]
    pub const fn id(&self) -> &MenuItemId {
        &self.item.id
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.item.price.times(self.quantity)
    }
}
