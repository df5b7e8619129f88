//! Application configuration
//!
//! Configuration is loaded from:
//! 1. Default values
//! 2. Config file (~/.config/dailydots/config.toml)
//! 3. Environment variables (DAILYDOTS_* prefix)
//!
//! Environment variables take precedence over config file values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix
const ENV_PREFIX: &str = "DAILYDOTS";

/// File name of the journal collection inside the data directory
pub const ENTRIES_FILE_NAME: &str = "dailydots_journal_entries.json";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the journal entries file
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Log file used when DAILYDOTS_LOG is set (stderr otherwise)
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Number of recent entries shown on the home summary
    #[serde(default = "default_recent_count")]
    pub recent_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_file: None,
            recent_count: default_recent_count(),
        }
    }
}

impl Config {
    /// Load configuration from default location and environment
    ///
    /// Order of precedence (highest to lowest):
    /// 1. Environment variables (DAILYDOTS_DATA_DIR, DAILYDOTS_LOG_FILE, DAILYDOTS_RECENT_COUNT)
    /// 2. Config file (~/.config/dailydots/config.toml or DAILYDOTS_CONFIG)
    /// 3. Default values
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_file_path())
    }

    /// Load configuration from a specific path
    ///
    /// Environment variables are still applied as overrides.
    /// If the file doesn't exist, defaults are used.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.ensure_data_dir()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (useful for testing)
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let mut config: Config =
            toml::from_str(toml_content).context("Failed to parse config TOML")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(format!("{}_DATA_DIR", ENV_PREFIX)) {
            self.data_dir = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var(format!("{}_LOG_FILE", ENV_PREFIX)) {
            self.log_file = if val.is_empty() {
                None
            } else {
                Some(PathBuf::from(val))
            };
        }

        // Non-numeric values are ignored
        if let Ok(val) = std::env::var(format!("{}_RECENT_COUNT", ENV_PREFIX)) {
            if let Ok(count) = val.trim().parse() {
                self.recent_count = count;
            }
        }
    }

    /// Ensure data directory exists
    fn ensure_data_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            std::fs::create_dir_all(&self.data_dir)
                .with_context(|| format!("Failed to create data directory: {:?}", self.data_dir))?;
        }
        Ok(())
    }

    /// Save configuration to the default config file
    pub fn save(&self) -> Result<()> {
        self.save_to_path(&Self::config_file_path())
    }

    /// Save configuration to a specific file
    pub fn save_to_path(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;
        Ok(())
    }

    /// Get the config file path
    ///
    /// Can be overridden with DAILYDOTS_CONFIG environment variable
    pub fn config_file_path() -> PathBuf {
        if let Ok(path) = std::env::var(format!("{}_CONFIG", ENV_PREFIX)) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dailydots")
            .join("config.toml")
    }

    /// Get the path to the journal entries file
    pub fn entries_path(&self) -> PathBuf {
        self.data_dir.join(ENTRIES_FILE_NAME)
    }
}

/// Get the default data directory
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dailydots")
}

fn default_recent_count() -> usize {
    5
}
