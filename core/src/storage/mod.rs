//! Draft persistence port and adapters.
//!
//! The store holds only in-memory state; every write goes through the
//! [`DraftStorage`] port. The app uses the JSON-file adapter, tests
//! substitute the in-memory adapter.

use crate::types::Draft;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

/// File name of the persisted draft within the data directory.
pub const STORAGE_FILE: &str = "form-storage.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Persistence port for the draft store.
///
/// `load` distinguishes "nothing saved yet" (`Ok(None)`) from a saved
/// value that cannot be read back (`Err`). The store degrades both to
/// the default draft; only the latter is logged.
pub trait DraftStorage {
    fn load(&self) -> Result<Option<Draft>, StorageError>;
    fn save(&self, draft: &Draft) -> Result<(), StorageError>;
}

/// JSON-file adapter: one serialized draft under a fixed file name.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Creates an adapter persisting to [`STORAGE_FILE`] under `data_dir`.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(STORAGE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DraftStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<Draft>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        let draft = serde_json::from_str(&content)?;
        Ok(Some(draft))
    }

    fn save(&self, draft: &Draft) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string(draft)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

/// In-memory adapter holding the serialized draft, for tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    cell: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds the stored payload, e.g. with a corrupt value.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            cell: Mutex::new(Some(raw.into())),
        }
    }

    /// Returns the currently stored payload, if any.
    pub fn raw(&self) -> Option<String> {
        self.cell.lock().unwrap().clone()
    }
}

impl DraftStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Draft>, StorageError> {
        match &*self.cell.lock().unwrap() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, draft: &Draft) -> Result<(), StorageError> {
        *self.cell.lock().unwrap() = Some(serde_json::to_string(draft)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests;
