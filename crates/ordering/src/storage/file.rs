use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::{KeyValueStore, StorageError};

/// Storage persisted as one JSON object (`{"key": "value", ...}`) on disk.
///
/// Every call re-reads the document, so values written by another process
/// between calls are picked up. A missing file reads as empty.
///
/// Writes go to a temporary file in the same directory which then replaces
/// the document, so readers see either the old or the new document. A
/// document that does not parse is an error for `get` but is replaced by
/// `set` and `remove`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Use the document at `path`. Nothing is touched until the first call.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// The document to modify, starting over if the current one is corrupt.
    ///
    /// The flag is set when the corrupt document was discarded.
    fn read_for_write(&self) -> Result<(BTreeMap<String, String>, bool), StorageError> {
        match self.read_document() {
            Ok(document) => Ok((document, false)),
            Err(StorageError::Corrupt(e)) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Storage document is corrupt, replacing it"
                );
                Ok((BTreeMap::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    fn write_document(&self, document: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        let mut file = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut file, document)?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;

        debug!(path = %self.path.display(), keys = document.len(), "Wrote storage document");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_document()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let (mut document, _) = self.read_for_write()?;
        document.insert(key.to_owned(), value.to_owned());
        self.write_document(&document)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let (mut document, discarded) = self.read_for_write()?;
        if document.remove(key).is_some() || discarded {
            self.write_document(&document)?;
        }
        Ok(())
    }
}
