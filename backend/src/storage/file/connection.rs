use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the default data directory
pub const DATA_DIR_ENV_VAR: &str = "SHOPPING_LIST_DATA_DIR";

/// Name of the application folder inside the platform data directory
const APP_DIRECTORY_NAME: &str = "Shopping List";

/// FileConnection owns the data directory every file-backed repository writes into
#[derive(Debug, Clone)]
pub struct FileConnection {
    base_directory: PathBuf,
}

impl FileConnection {
    /// Create a new file connection, creating the base directory if it doesn't exist
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .with_context(|| format!("Failed to create data directory {}", base_path.display()))?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self { base_directory: base_path })
    }

    /// Work out which directory to use for data.
    ///
    /// Order: explicit path, then `SHOPPING_LIST_DATA_DIR`, then the platform
    /// data directory, then the home directory.
    pub fn resolve_data_directory(explicit: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            debug!("Using explicit data directory: {}", path.display());
            return Ok(path);
        }

        if let Ok(path) = std::env::var(DATA_DIR_ENV_VAR) {
            if !path.trim().is_empty() {
                debug!("Using data directory from {}: {}", DATA_DIR_ENV_VAR, path);
                return Ok(PathBuf::from(path.trim()));
            }
        }

        if let Some(data_dir) = dirs::data_dir() {
            return Ok(data_dir.join(APP_DIRECTORY_NAME));
        }

        dirs::home_dir()
            .map(|home| home.join(APP_DIRECTORY_NAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine a data directory"))
    }

    /// Get the base directory
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }
}
