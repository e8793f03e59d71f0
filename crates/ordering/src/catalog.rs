//! Menu loading and validation.
//!
//! The menu comes from storage when an admin has written one, otherwise from
//! the built-in house menu. Stored data is never trusted: it is decoded and
//! checked by [`decode_menu`], and anything that fails is replaced by the
//! house menu instead of surfacing an error to the guest.

use std::collections::HashSet;

use thiserror::Error;
use tracing::{debug, info, warn};

use qr_menu_core::{Category, MenuItem, MenuItemId, Price};

use crate::storage::{KeyValueStore, StorageError};

/// Storage key the admin surface writes the menu under.
pub const MENU_STORAGE_KEY: &str = "restaurantMenu";

/// Reasons a stored menu is rejected.
#[derive(Debug, Error)]
pub enum MenuDecodeError {
    /// Not a JSON array of menu items (bad JSON, missing fields, unknown
    /// category, negative price).
    #[error("menu is not a valid item list: {0}")]
    Json(#[from] serde_json::Error),

    /// An item has an empty ID.
    #[error("menu item at position {index} has an empty id")]
    EmptyId {
        /// Zero-based position in the list.
        index: usize,
    },

    /// Two items share an ID.
    #[error("duplicate menu item id: {0}")]
    DuplicateId(MenuItemId),
}

/// Errors from writing a menu to storage.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The menu failed validation.
    #[error(transparent)]
    Invalid(#[from] MenuDecodeError),

    /// The menu could not be serialized.
    #[error("failed to encode menu: {0}")]
    Encode(#[source] serde_json::Error),

    /// Storage rejected the write.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Where the session's menu came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOrigin {
    /// Decoded from storage.
    Stored,
    /// No stored menu; the house menu is in use.
    HouseMenu,
    /// A stored menu existed but was unusable; the house menu is in use.
    Fallback {
        /// Why the stored menu was discarded.
        reason: String,
    },
}

/// A menu ready for display.
#[derive(Debug, Clone)]
pub struct LoadedMenu {
    pub items: Vec<MenuItem>,
    pub origin: MenuOrigin,
}

impl LoadedMenu {
    /// The house menu, used when storage has nothing for us.
    #[must_use]
    pub fn house() -> Self {
        Self {
            items: house_menu(),
            origin: MenuOrigin::HouseMenu,
        }
    }
}

/// Decode and validate a menu as written by the admin surface.
///
/// # Errors
///
/// Returns `MenuDecodeError` if `raw` is not a JSON array of menu items or
/// the items break an invariant (empty or duplicate IDs).
pub fn decode_menu(raw: &str) -> Result<Vec<MenuItem>, MenuDecodeError> {
    let items: Vec<MenuItem> = serde_json::from_str(raw)?;
    validate_menu(&items)?;
    Ok(items)
}

/// Check the invariants serde cannot express.
///
/// # Errors
///
/// Returns `MenuDecodeError` on the first empty or repeated ID.
pub fn validate_menu(items: &[MenuItem]) -> Result<(), MenuDecodeError> {
    let mut seen = HashSet::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        if item.id.as_str().is_empty() {
            return Err(MenuDecodeError::EmptyId { index });
        }
        if !seen.insert(&item.id) {
            return Err(MenuDecodeError::DuplicateId(item.id.clone()));
        }
    }
    Ok(())
}

/// Load the menu stored under `key`, falling back to the house menu.
///
/// This never fails: storage errors and invalid data are logged and the house
/// menu is returned with [`MenuOrigin::Fallback`].
pub fn load_menu(storage: &dyn KeyValueStore, key: &str) -> LoadedMenu {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key, "No stored menu, using house menu");
            return LoadedMenu::house();
        }
        Err(e) => {
            warn!(key, error = %e, "Failed to read stored menu, using house menu");
            return fallback(&e);
        }
    };

    match decode_menu(&raw) {
        Ok(items) => {
            info!(key, items = items.len(), "Loaded stored menu");
            LoadedMenu {
                items,
                origin: MenuOrigin::Stored,
            }
        }
        Err(e) => {
            warn!(key, error = %e, "Failed to load menu, using house menu");
            fallback(&e)
        }
    }
}

fn fallback(reason: &impl ToString) -> LoadedMenu {
    LoadedMenu {
        items: house_menu(),
        origin: MenuOrigin::Fallback {
            reason: reason.to_string(),
        },
    }
}

/// Validate `items` and write them under `key`.
///
/// # Errors
///
/// Returns `CatalogError` if validation, encoding or the storage write fails.
pub fn save_menu(
    storage: &mut dyn KeyValueStore,
    key: &str,
    items: &[MenuItem],
) -> Result<(), CatalogError> {
    validate_menu(items)?;
    let raw = serde_json::to_string(items).map_err(CatalogError::Encode)?;
    storage.set(key, &raw)?;
    info!(key, items = items.len(), "Saved menu");
    Ok(())
}

/// The built-in menu shown when no admin menu is stored.
#[must_use]
pub fn house_menu() -> Vec<MenuItem> {
    vec![
        item("1", "Espresso", "Rich and bold single shot", 250, Category::Coffee, false),
        item("2", "Cappuccino", "Espresso with steamed milk and foam", 400, Category::Coffee, false),
        item("3", "Latte", "Smooth espresso with velvety milk", 450, Category::Coffee, false),
        item("4", "Croissant", "Buttery and flaky French pastry", 350, Category::Pastry, true),
        item("5", "Avocado Toast", "Smashed avocado on toasted sourdough", 750, Category::Food, true),
        item("6", "Grilled Cheese", "Classic cheese sandwich with tomato", 650, Category::Food, true),
        item("7", "Caesar Salad", "Fresh romaine with parmesan", 800, Category::Salad, false),
        item("8", "Iced Tea", "Refreshing chilled tea", 300, Category::Beverage, true),
        item("9", "Set Meal A", "Sandwich + Coffee + Pastry", 1200, Category::SetMeal, false),
        item("10", "Set Meal B", "Salad + Drink + Dessert", 1400, Category::SetMeal, false),
    ]
}

fn item(
    id: &str,
    name: &str,
    description: &str,
    cents: u32,
    category: Category,
    vegetarian: bool,
) -> MenuItem {
    MenuItem {
        id: MenuItemId::new(id),
        name: name.to_owned(),
        description: description.to_owned(),
        price: Price::from_cents(cents),
        category,
        vegetarian,
    }
}
