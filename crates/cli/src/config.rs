//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `QR_MENU_STORAGE_PATH` - Storage document path (default: .qr-menu/storage.json)
//! - `QR_MENU_STORAGE_KEY` - Key the menu is stored under (default: restaurantMenu)
//! - `QR_MENU_RESTAURANT_ID` - Restaurant identifier for sessions (default: demo)
//! - `QR_MENU_LANGUAGE` - Initial UI language, one of en/ja/th (default: en)

use std::path::PathBuf;

use thiserror::Error;

use qr_menu_core::Language;
use qr_menu_ordering::catalog::MENU_STORAGE_KEY;

const DEFAULT_STORAGE_PATH: &str = ".qr-menu/storage.json";
const DEFAULT_RESTAURANT_ID: &str = "demo";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuConfig {
    /// Where the key-value storage document lives
    pub storage_path: PathBuf,
    /// Storage key holding the menu
    pub menu_key: String,
    /// Restaurant identifier passed to sessions
    pub restaurant_id: String,
    /// Initial UI language
    pub language: Language,
}

impl MenuConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let language = match lookup("QR_MENU_LANGUAGE") {
            Some(value) => value.parse::<Language>().map_err(|e| {
                ConfigError::InvalidEnvVar("QR_MENU_LANGUAGE".to_string(), e.to_string())
            })?,
            None => Language::default(),
        };

        let restaurant_id = get_or("QR_MENU_RESTAURANT_ID", DEFAULT_RESTAURANT_ID);
        if restaurant_id.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "QR_MENU_RESTAURANT_ID".to_string(),
                "must not be empty".to_string(),
            ));
        }

        Ok(Self {
            storage_path: PathBuf::from(get_or("QR_MENU_STORAGE_PATH", DEFAULT_STORAGE_PATH)),
            menu_key: get_or("QR_MENU_STORAGE_KEY", MENU_STORAGE_KEY),
            restaurant_id,
            language,
        })
    }
}
