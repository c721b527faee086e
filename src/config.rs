//! Application configuration.
//!
//! Configuration is read from `config.yaml` in the platform config directory
//! (or the file named by `TICKETHUB_CONFIG`) and includes:
//! - Where ticket data is stored
//! - The storage slot holding the ticket collection
//! - How long notifications stay on screen

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TicketHubError};
use crate::storage::validate_key;
use crate::types::TICKETS_KEY;

/// Overrides the config file location
pub const CONFIG_ENV: &str = "TICKETHUB_CONFIG";
/// Overrides the data directory from the config file
pub const DATA_DIR_ENV: &str = "TICKETHUB_DATA_DIR";
/// Log filter directives
pub const LOG_ENV: &str = "TICKETHUB_LOG";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the storage slots (default: platform data dir)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Slot holding the ticket collection (default: "tickets")
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Notification display time in milliseconds (default: 3000)
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
}

fn default_storage_key() -> String {
    TICKETS_KEY.to_string()
}

fn default_toast_duration_ms() -> u64 {
    3000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            storage_key: default_storage_key(),
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

fn project_dirs() -> Result<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "tickethub", "tickethub")
        .ok_or_else(|| TicketHubError::Config("cannot determine home directory".to_string()))
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = env::var(CONFIG_ENV)
            && !path.is_empty()
        {
            return Ok(PathBuf::from(path));
        }
        Ok(project_dirs()?.config_dir().join("config.yaml"))
    }

    /// Load configuration from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, or defaults if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_yaml_ng::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject values that cannot be used
    pub fn validate(&self) -> Result<()> {
        validate_key(&self.storage_key)?;
        if self.toast_duration_ms == 0 {
            return Err(TicketHubError::Config(
                "toast_duration_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve the data directory
    ///
    /// Precedence: explicit override, then `TICKETHUB_DATA_DIR`, then the
    /// config file, then the platform data directory.
    pub fn data_dir(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = cli_override {
            return Ok(dir.to_path_buf());
        }
        if let Ok(dir) = env::var(DATA_DIR_ENV)
            && !dir.is_empty()
        {
            return Ok(PathBuf::from(dir));
        }
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        Ok(project_dirs()?.data_dir().to_path_buf())
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}
