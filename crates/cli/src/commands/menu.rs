//! Menu management commands.
//!
//! These write the same storage entry guests read when they open a session.
//!
//! # Usage
//!
//! ```bash
//! # Print the menu guests will see
//! qr-menu menu show --category coffee --lang ja
//!
//! # Replace the stored menu from a JSON or YAML file
//! qr-menu menu import menu.yaml
//!
//! # Drop the stored menu so sessions fall back to the house menu
//! qr-menu menu reset
//! ```
//!
//! # Environment Variables
//!
//! - `QR_MENU_STORAGE_PATH` - Storage document path
//! - `QR_MENU_STORAGE_KEY` - Key the menu is stored under

use std::io::Write;
use std::path::Path;

use tracing::info;

use qr_menu_core::{CategoryFilter, Language, MenuItem};
use qr_menu_ordering::catalog::{self, decode_menu};
use qr_menu_ordering::{CartStore, FileStore, KeyValueStore, ScreenView, view};

use crate::config::MenuConfig;
use crate::error::CliError;
use crate::render::render;

/// Print the menu as a guest would see it under `category`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn show(
    config: &MenuConfig,
    category: CategoryFilter,
    language: Option<Language>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let storage = FileStore::new(&config.storage_path);
    let menu = catalog::load_menu(&storage, &config.menu_key);
    info!(items = menu.items.len(), origin = ?menu.origin, "Loaded menu");

    let store = CartStore::new(language.unwrap_or(config.language));
    let view = ScreenView::Menu(view::menu(&menu.items, category, &store));
    render(&view, out)?;
    Ok(())
}

/// Validate the menu in `file` and store it.
///
/// Returns the number of items stored.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, the menu is
/// invalid, or storage cannot be written. Nothing is stored on error.
pub fn import(config: &MenuConfig, file: &Path) -> Result<usize, CliError> {
    let items = read_menu_file(file)?;
    let mut storage = FileStore::new(&config.storage_path);
    catalog::save_menu(&mut storage, &config.menu_key, &items)?;
    info!(
        file = %file.display(),
        items = items.len(),
        key = %config.menu_key,
        "Imported menu"
    );
    Ok(items.len())
}

/// Remove the stored menu.
///
/// # Errors
///
/// Returns an error if storage cannot be read or written.
pub fn reset(config: &MenuConfig) -> Result<(), CliError> {
    let mut storage = FileStore::new(&config.storage_path);
    storage.remove(&config.menu_key)?;
    info!(key = %config.menu_key, "Stored menu removed, sessions will use the house menu");
    Ok(())
}

/// Parse a menu file, choosing the format from its extension.
fn read_menu_file(file: &Path) -> Result<Vec<MenuItem>, CliError> {
    let extension = file
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("json") => {
            let raw = std::fs::read_to_string(file)?;
            Ok(decode_menu(&raw)?)
        }
        Some("yaml" | "yml") => {
            let raw = std::fs::read_to_string(file)?;
            Ok(serde_yaml::from_str(&raw)?)
        }
        _ => Err(CliError::UnsupportedFormat(file.to_path_buf())),
    }
}
