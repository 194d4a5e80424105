//! Configuration management for GoChat

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Default gateway address used by a local development stack
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// File name of the credential store, resolved relative to the config file
const CREDENTIALS_FILE: &str = "credentials.yaml";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Gateway base URL; request paths are appended to it verbatim
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout. Requests never time out when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Credential store location (defaults to `credentials.yaml` beside the config file)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials_path: Option<PathBuf>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            timeout_secs: None,
            credentials_path: None,
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".gochat").join("config.yaml"))
    }

    /// Resolve an optional override to a concrete config path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Load configuration from an optional path, falling back to defaults
    /// when the file does not exist yet.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        match Self::load_from(&path) {
            Err(crate::error::Error::Config(ConfigError::NotFound)) => {
                log::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Apply a base URL override from the command line or environment
    pub fn with_api_base_url(mut self, url: Option<&str>) -> Result<Self> {
        if let Some(url) = url {
            self.api_base_url = url.to_string();
        }
        self.validate()?;
        Ok(self)
    }

    /// Reject base URLs reqwest could never request against
    pub fn validate(&self) -> Result<()> {
        let url = self.api_base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "api_base_url must start with http:// or https:// (got {:?})",
                self.api_base_url
            ))
            .into());
        }
        Ok(())
    }

    /// Request timeout, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Where credentials live for a config loaded from `config_path`
    pub fn credentials_path_for(&self, config_path: &Path) -> PathBuf {
        if let Some(path) = &self.credentials_path {
            return path.clone();
        }
        config_path
            .parent()
            .map(|dir| dir.join(CREDENTIALS_FILE))
            .unwrap_or_else(|| PathBuf::from(CREDENTIALS_FILE))
    }
}

/// Write a file readable only by its owner, creating parent directories
pub(crate) fn write_private(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(path, contents)?;

    // Set file permissions to 600 on Unix systems
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(path)?.permissions();
        perms.set_mode(0o600);
        std::fs::set_permissions(path, perms)?;
    }

    Ok(())
}
