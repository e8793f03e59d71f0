//! Durable key-value storage for menu data.
//!
//! The admin surface and the ordering session only share data through a
//! string-keyed, string-valued store. [`MemoryStore`] backs tests and
//! throwaway sessions; [`FileStore`] persists to a single JSON document.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Errors that can occur when reading or writing storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying file operation failed.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The storage document exists but is not a JSON object of strings.
    #[error("storage document is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// A string key-value store.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Absent keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
