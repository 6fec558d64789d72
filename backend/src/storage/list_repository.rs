use anyhow::{Context, Result};
use log::{debug, info};

use super::codec::{decode_list, encode_list, DecodeError};
use super::traits::KeyValueStorage;
use crate::domain::models::ListState;

/// Why a stored list could not be loaded
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read stored list: {0:#}")]
    Read(anyhow::Error),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Repository persisting the whole list as one document under one key
#[derive(Debug, Clone)]
pub struct ListRepository<S: KeyValueStorage> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> ListRepository<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the stored list. An absent document is an empty list, not an error.
    pub fn load(&self) -> Result<ListState, LoadError> {
        let blob = self.storage.get_value(&self.key).map_err(LoadError::Read)?;

        match blob {
            Some(blob) => {
                let state = decode_list(&blob)?;
                info!(
                    "Loaded {} items from '{}' (next id {})",
                    state.items.len(),
                    self.key,
                    state.next_id
                );
                Ok(state)
            }
            None => {
                debug!("No stored list under '{}', starting empty", self.key);
                Ok(ListState::default())
            }
        }
    }

    /// Persist the list, replacing whatever was stored before
    pub fn save(&self, state: &ListState) -> Result<()> {
        let blob = encode_list(state).context("Failed to encode shopping list")?;
        self.storage.put_value(&self.key, &blob)?;
        debug!("Saved {} items to '{}'", state.items.len(), self.key);
        Ok(())
    }
}
