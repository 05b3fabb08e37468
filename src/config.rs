/// Configuration for cinelist
///
/// Read from `~/.cinelist/config.toml`. A missing file means defaults.
/// `CINELIST_STORAGE` overrides the catalog path.

use crate::core::PickStrategy;
use crate::error::{CinelistError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CINELIST_DIR_NAME: &str = ".cinelist";
const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_DB_NAME: &str = "catalog.db";

/// Environment variable overriding `storage_path`
pub const STORAGE_ENV_VAR: &str = "CINELIST_STORAGE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// SQLite catalog file
    pub storage_path: PathBuf,
    /// tracing filter used when RUST_LOG is not set
    pub log_filter: String,
    pub pick_strategy: PickStrategy,
    pub search_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: cinelist_dir().join(DEFAULT_DB_NAME),
            log_filter: "cinelist=info".to_string(),
            pick_strategy: PickStrategy::Random,
            search_limit: 10,
        }
    }
}

impl Config {
    /// Load from the default location, then apply the environment override
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path())?;

        if let Ok(path) = std::env::var(STORAGE_ENV_VAR) {
            if !path.trim().is_empty() {
                config.storage_path = PathBuf::from(path);
            }
        }

        Ok(config)
    }

    /// Load from a file path; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| CinelistError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save config to a file, creating the parent directory
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| CinelistError::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Default config file path
    pub fn config_path() -> PathBuf {
        cinelist_dir().join(CONFIG_FILE_NAME)
    }
}

fn cinelist_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CINELIST_DIR_NAME)
}
