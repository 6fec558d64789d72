//! # Shopping List Backend
//!
//! Domain logic and storage for the shopping list calculator. Everything is
//! synchronous; a front end (the CLI, or any view) owns one [`Backend`] and
//! calls the [`ListStore`] operations, then re-renders from
//! [`ListStore::snapshot`].
//!
//! - [`domain`]: item rules, validation, totals, export, the list store
//! - [`storage`]: key-value storage and the stored list document
//! - [`io`]: mapping domain values onto the shared DTOs
//! - [`config`]: `config.yaml` in the data directory

use anyhow::Result;
use log::info;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

pub use config::{AppConfig, ConfigRepository};
pub use domain::commands::items::{AddItemCommand, AddItemResult, ExportResult, SaveEditCommand};
pub use domain::{Clock, FixedClock, ListStore, SystemClock};
pub use storage::{FileConnection, FileKeyValueRepository, ListRepository};

/// Main backend struct that wires config, storage and the list store
pub struct Backend {
    pub config: AppConfig,
    pub store: ListStore<FileKeyValueRepository>,
    connection: FileConnection,
}

impl Backend {
    /// Open the backend in the resolved data directory with the system clock
    pub fn open(data_dir: Option<PathBuf>) -> Result<Self> {
        Self::with_clock(data_dir, Arc::new(SystemClock))
    }

    /// Open the backend with a specific clock
    pub fn with_clock(data_dir: Option<PathBuf>, clock: Arc<dyn Clock>) -> Result<Self> {
        let data_dir = FileConnection::resolve_data_directory(data_dir)?;
        let connection = FileConnection::new(&data_dir)?;

        let config = ConfigRepository::new(connection.clone()).load_or_create()?;
        let repository = ListRepository::new(
            FileKeyValueRepository::new(connection.clone()),
            config.storage_key.clone(),
        );
        let store = ListStore::open(repository, clock, &config);

        info!(
            "Opened shopping list in {} ({} items)",
            connection.base_directory().display(),
            store.items().len()
        );

        Ok(Self {
            config,
            store,
            connection,
        })
    }

    pub fn data_directory(&self) -> &Path {
        self.connection.base_directory()
    }
}
