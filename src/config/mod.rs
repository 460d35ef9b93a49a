// Application configuration.
// Defaults, optional TOML file in the platform config dir, and env overrides.

pub mod paths;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{PostieError, Result};

/// Default API base URL.
pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com";

/// Environment variable overriding `api_url`.
pub const API_URL_ENV: &str = "POSTIE_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the REST API.
    pub api_url: String,
    /// Channel name attached to every service log entry.
    pub log_channel: String,
    /// Fallback filter when `POSTIE_LOG` is unset.
    pub log_level: String,
    /// Directory for rolling log files. Defaults to the platform data dir.
    pub log_dir: Option<PathBuf>,
    /// Optional per-request timeout. No timeout when unset.
    pub request_timeout_secs: Option<u64>,
    /// Number of messages kept in the activity pane.
    pub console_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            log_channel: "postie".to_string(),
            log_level: "info".to_string(),
            log_dir: None,
            request_timeout_secs: None,
            console_capacity: 200,
        }
    }
}

impl Config {
    /// Load from the platform config file (if any) and the environment.
    pub fn load() -> Result<Self> {
        let mut config = match paths::config_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        config.apply_overrides(std::env::var(API_URL_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Apply environment-derived values on top of file values.
    pub fn apply_overrides(&mut self, api_url: Option<String>) {
        if let Some(url) = api_url.filter(|url| !url.trim().is_empty()) {
            self.api_url = url;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_url.trim().is_empty() {
            return Err(PostieError::Config("api_url must not be empty".to_string()));
        }
        if self.log_channel.trim().is_empty() {
            return Err(PostieError::Config(
                "log_channel must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Resolved log directory, falling back to the working directory.
    pub fn resolved_log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .or_else(paths::log_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
