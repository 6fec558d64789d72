//! # Application Config
//!
//! Settings stored as `config.yaml` at the root of the data directory.
//!
//! ## YAML Format
//!
//! ```yaml
//! storage_key: "shopping-calculator-data"
//! currency_symbol: "¥"
//! export_file_prefix: "shopping-list"
//! data_format_version: "1.0"
//! created_at: "2024-05-01T10:00:00Z"
//! updated_at: "2024-05-01T10:00:00Z"
//! ```
//!
//! A missing file is created with defaults. Missing keys take their default
//! value, so older files keep working when settings are added.

use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::storage::FileConnection;

pub const CONFIG_FILE_NAME: &str = "config.yaml";
pub const DEFAULT_STORAGE_KEY: &str = "shopping-calculator-data";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "¥";
pub const DEFAULT_EXPORT_FILE_PREFIX: &str = "shopping-list";
pub const DATA_FORMAT_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Key the list document is stored under
    pub storage_key: String,
    /// Prefix for displayed prices; also stripped from price input
    pub currency_symbol: String,
    /// Export files are named `<prefix>-<YYYY-MM-DD>.json`
    pub export_file_prefix: String,
    /// Data format version for future migrations
    pub data_format_version: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            export_file_prefix: DEFAULT_EXPORT_FILE_PREFIX.to_string(),
            data_format_version: DATA_FORMAT_VERSION.to_string(),
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Reads and writes `config.yaml` in the data directory
#[derive(Debug, Clone)]
pub struct ConfigRepository {
    connection: FileConnection,
}

impl ConfigRepository {
    pub fn new(connection: FileConnection) -> Self {
        Self { connection }
    }

    pub fn config_path(&self) -> PathBuf {
        self.connection.base_directory().join(CONFIG_FILE_NAME)
    }

    /// Load the config, writing a default one first if none exists
    pub fn load_or_create(&self) -> Result<AppConfig> {
        let config_path = self.config_path();

        if config_path.exists() {
            let yaml_content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let config: AppConfig = serde_yaml::from_str(&yaml_content)
                .with_context(|| format!("Invalid config file {}", config_path.display()))?;
            debug!("Loaded config from {:?}", config_path);
            Ok(config)
        } else {
            let config = AppConfig::default();
            self.save(&config)?;
            info!("Created default config at {:?}", config_path);
            Ok(config)
        }
    }

    /// Save the config using a temp file and rename
    pub fn save(&self, config: &AppConfig) -> Result<()> {
        let config_path = self.config_path();
        let yaml_content = serde_yaml::to_string(config).context("Failed to encode config")?;

        let temp_path = config_path.with_extension("tmp");
        fs::write(&temp_path, yaml_content)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &config_path)
            .with_context(|| format!("Failed to move config into place at {}", config_path.display()))?;

        debug!("Saved config to {:?}", config_path);
        Ok(())
    }
}
