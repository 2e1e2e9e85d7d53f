//! Data source configuration
//!
//! Controls whether the data-access layer talks to the telemetry API or
//! answers from the demo generator. A `DataConfig` is passed explicitly to
//! [`DataService`](crate::data::DataService); nothing here is global.
//!
//! Stored as JSON:
//!
//! ```json
//! { "use_mock_data": false, "mock_data_on_failure": true, "season": 2024 }
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::DEFAULT_BASE_URL;

/// Overrides [`DataConfig::use_mock_data`]
pub const ENV_USE_MOCK_DATA: &str = "GRIDVIEW_USE_MOCK_DATA";
/// Overrides [`DataConfig::mock_data_on_failure`]
pub const ENV_MOCK_ON_FAILURE: &str = "GRIDVIEW_MOCK_ON_FAILURE";
/// Overrides [`DataConfig::base_url`]
pub const ENV_BASE_URL: &str = "GRIDVIEW_BASE_URL";
/// Overrides [`DataConfig::season`]
pub const ENV_SEASON: &str = "GRIDVIEW_SEASON";

/// Errors loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for [`DataConfig`]
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An environment override could not be parsed
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}

/// Behaviour switches for the data-access layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Answer every request from the demo generator without touching the network
    pub use_mock_data: bool,
    /// Substitute demo data when a remote request fails or comes back empty
    pub mock_data_on_failure: bool,
    /// Telemetry API base URL
    pub base_url: String,
    /// Championship season to query
    pub season: i32,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            use_mock_data: true,
            mock_data_on_failure: true,
            base_url: DEFAULT_BASE_URL.to_string(),
            season: 2024,
        }
    }
}

impl DataConfig {
    /// Query the remote API, falling back to demo data on failure
    pub fn live() -> Self {
        Self {
            use_mock_data: false,
            ..Self::default()
        }
    }

    /// Only ever answer from the demo generator
    pub fn offline() -> Self {
        Self::default()
    }

    /// Set [`DataConfig::use_mock_data`]
    pub fn with_mock_data(mut self, enabled: bool) -> Self {
        self.use_mock_data = enabled;
        self
    }

    /// Set [`DataConfig::mock_data_on_failure`]
    pub fn with_fallback(mut self, enabled: bool) -> Self {
        self.mock_data_on_failure = enabled;
        self
    }

    /// Point at another API deployment
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Read a JSON config file; missing fields take their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the config as pretty JSON, creating parent directories
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(io_err)
    }

    /// `<config dir>/gridview/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gridview").join("config.json"))
    }

    /// Load from the default path if a file exists there, else use defaults
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    /// Apply `GRIDVIEW_*` environment variables on top of this config
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| env::var(key).ok())
    }

    fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_USE_MOCK_DATA) {
            self.use_mock_data = parse_bool(ENV_USE_MOCK_DATA, &value)?;
        }
        if let Some(value) = lookup(ENV_MOCK_ON_FAILURE) {
            self.mock_data_on_failure = parse_bool(ENV_MOCK_ON_FAILURE, &value)?;
        }
        if let Some(value) = lookup(ENV_BASE_URL) {
            self.base_url = value;
        }
        if let Some(value) = lookup(ENV_SEASON) {
            self.season = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_SEASON.to_string(),
                value: value.clone(),
            })?;
        }
        Ok(self)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_prefer_demo_data() {
        let config = DataConfig::default();
        assert!(config.use_mock_data);
        assert!(config.mock_data_on_failure);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.season, 2024);
    }

    #[test]
    fn test_overrides_apply() {
        let config = DataConfig::default()
            .with_overrides(lookup(&[
                (ENV_USE_MOCK_DATA, "false"),
                (ENV_MOCK_ON_FAILURE, "0"),
                (ENV_SEASON, "2023"),
            ]))
            .unwrap();

        assert_eq!(
            config,
            DataConfig {
                use_mock_data: false,
                mock_data_on_failure: false,
                base_url: DEFAULT_BASE_URL.to_string(),
                season: 2023,
            }
        );
    }

    #[test]
    fn test_bad_override_rejected() {
        let err = DataConfig::default()
            .with_overrides(lookup(&[(ENV_USE_MOCK_DATA, "maybe")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
