//! Integration tests for the QR menu.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p qr-menu-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_store` - Cart arithmetic through the public store API
//! - `menu_flow` - Guest journeys through a full session
//! - `persistence` - Menus shared through file-backed storage
//!
//! Everything runs in-process against temporary directories; no services
//! are required.

#![cfg_attr(not(test), forbid(unsafe_code))]
