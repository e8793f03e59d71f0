//! Core types for the QR menu.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod language;
pub mod menu;
pub mod price;
pub mod quantity;

pub use category::{Category, CategoryFilter, ParseCategoryError};
pub use id::*;
pub use language::{Language, ParseLanguageError};
pub use menu::{CartLine, MenuItem, filter_by_category};
pub use price::{Price, PriceError};
pub use quantity::{Quantity, QuantityError};
