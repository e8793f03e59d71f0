//! CLI error type.

use std::path::PathBuf;

use thiserror::Error;

use qr_menu_ordering::{CatalogError, MenuDecodeError, StorageError};

use crate::config::ConfigError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Reading or writing storage failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// A menu could not be validated or saved.
    #[error("Menu error: {0}")]
    Catalog(#[from] CatalogError),

    /// A YAML menu file could not be parsed.
    #[error("Invalid YAML menu: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Terminal or file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The import file extension is not one we can read.
    #[error("Unsupported menu file {0}: expected .json, .yaml or .yml")]
    UnsupportedFormat(PathBuf),
}

impl From<MenuDecodeError> for CliError {
    fn from(e: MenuDecodeError) -> Self {
        Self::Catalog(CatalogError::Invalid(e))
    }
}
