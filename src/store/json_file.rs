//! JSON file cart store
//!
//! Durable persistence adapter: one JSON document per cart under a fixed
//! file name, the file-system analogue of a namespaced browser-storage key.
//! A missing file reads as "nothing persisted"; a present-but-unparseable
//! file is a typed error so callers can decide whether to reset it.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::store::{CartSnapshot, CartStore, StoreError};

/// Fixed file name for the persisted cart entry.
pub const STORE_FILE_NAME: &str = "vitrine-cart.json";

/// File-backed persistence adapter.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store that reads and writes the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store using the fixed [`STORE_FILE_NAME`] under a directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(STORE_FILE_NAME))
    }

    /// Path of the persisted entry.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStore for JsonFileStore {
    fn load(&self) -> Result<Option<CartSnapshot>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StoreError::Io(err)),
        };

        let snapshot = serde_json::from_str(&contents)?;

        tracing::debug!(path = %self.path.display(), "loaded persisted cart");

        Ok(Some(snapshot))
    }

    fn save(&mut self, snapshot: &CartSnapshot) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(snapshot)?;

        fs::write(&self.path, contents)?;

        tracing::debug!(
            path = %self.path.display(),
            items = snapshot.items.len(),
            "persisted cart"
        );

        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::Io(err)),
        }
    }
}
