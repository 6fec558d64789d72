//! # File Key-Value Repository
//!
//! Stores each key as its own JSON file under the `storage/` folder of the
//! data directory:
//!
//! ```text
//! data/
//! ├── config.yaml
//! └── storage/
//!     └── shopping-calculator-data.json   ← one file per key
//! ```
//!
//! Writes go to a temp file first and are renamed into place, so a crash
//! mid-write never leaves a half-written document behind.

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::PathBuf;

use super::connection::FileConnection;
use crate::storage::traits::KeyValueStorage;

const STORAGE_DIRECTORY: &str = "storage";
const VALUE_EXTENSION: &str = "json";

/// File-backed key-value repository
#[derive(Debug, Clone)]
pub struct FileKeyValueRepository {
    connection: FileConnection,
}

impl FileKeyValueRepository {
    pub fn new(connection: FileConnection) -> Self {
        Self { connection }
    }

    fn storage_directory(&self) -> PathBuf {
        self.connection.base_directory().join(STORAGE_DIRECTORY)
    }

    /// Keys become file names, so only a conservative character set is accepted
    fn validate_key(key: &str) -> Result<()> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.');
        if valid {
            Ok(())
        } else {
            Err(anyhow::anyhow!("Invalid storage key: '{}'", key))
        }
    }

    fn value_path(&self, key: &str) -> Result<PathBuf> {
        Self::validate_key(key)?;
        Ok(self
            .storage_directory()
            .join(format!("{}.{}", key, VALUE_EXTENSION)))
    }
}

impl KeyValueStorage for FileKeyValueRepository {
    fn put_value(&self, key: &str, value: &str) -> Result<()> {
        let path = self.value_path(key)?;
        let dir = self.storage_directory();

        if !dir.exists() {
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create storage directory {}", dir.display()))?;
        }

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, value)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to move value into place at {}", path.display()))?;

        debug!("Stored {} bytes under key '{}'", value.len(), key);
        Ok(())
    }

    fn get_value(&self, key: &str) -> Result<Option<String>> {
        let path = self.value_path(key)?;

        if !path.exists() {
            debug!("No value stored under key '{}'", key);
            return Ok(None);
        }

        let value = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        debug!("Loaded {} bytes from key '{}'", value.len(), key);
        Ok(Some(value))
    }
}
