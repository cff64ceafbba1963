//! Synchronous key-value storage on disk.
//!
//! Mirrors the browser `localStorage` model: string keys, whole values,
//! no partial writes. Each key is kept in its own `<key>.json` file inside
//! the `storage/` subdirectory of the data directory. An optional byte
//! quota makes oversized writes fail the way a browser raises
//! `QuotaExceededError`.

use crate::libs::data_storage::DataStorage;
use crate::libs::error::PersistenceError;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

/// Subdirectory of the data directory holding one file per key.
pub const STORAGE_DIR: &str = "storage";

#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: DataStorage,
    quota_bytes: Option<usize>,
}

impl LocalStorage {
    /// Opens the key-value area of the given data directory.
    pub fn open(data: &DataStorage) -> Self {
        Self::new(DataStorage::with_base_path(data.base_path().join(STORAGE_DIR)))
    }

    /// Uses `storage` directly as the key-value directory.
    pub fn new(storage: DataStorage) -> Self {
        Self { storage, quota_bytes: None }
    }

    pub fn with_quota(mut self, quota_bytes: Option<usize>) -> Self {
        self.quota_bytes = quota_bytes;
        self
    }

    fn item_path(&self, key: &str) -> Result<PathBuf, PersistenceError> {
        Ok(self.storage.get_path(&format!("{}.json", key))?)
    }

    /// Returns the stored value, or `None` when the key has never been set.
    pub fn get_item(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(self.item_path(key)?) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Replaces the value under `key`.
    ///
    /// The value is written to a sibling temp file and renamed into place,
    /// so a failed write leaves the previous value intact.
    pub fn set_item(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        if let Some(quota) = self.quota_bytes {
            if value.len() > quota {
                return Err(PersistenceError::QuotaExceeded { size: value.len(), quota });
            }
        }

        let path = self.item_path(key)?;
        let tmp_path = path.with_extension("json.tmp");
        let mut file = fs::OpenOptions::new().write(true).create(true).truncate(true).open(&tmp_path)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    pub fn remove_item(&self, key: &str) -> Result<(), PersistenceError> {
        match fs::remove_file(self.item_path(key)?) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }

    /// Removes every stored key.
    pub fn clear(&self) -> Result<(), PersistenceError> {
        let base = self.storage.base_path();
        if !base.exists() {
            return Ok(());
        }
        for entry in fs::read_dir(base)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }
}
