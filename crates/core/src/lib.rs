//! QR Menu Core - Shared types library.
//!
//! This crate provides common types used across the QR menu components:
//! - `ordering` - Cart store, menu flow controller and session
//! - `cli` - Command-line driver for menus and ordering sessions
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage access,
//! no logging. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, quantities, categories and languages
//! - [`i18n`] - The UI string table

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod i18n;
pub mod types;

pub use i18n::{TranslationKey, translate};
pub use types::*;
