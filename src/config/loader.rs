use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use reqwest::Url;
use thiserror::Error;
use tracing::debug;

use crate::config::types::Config;

/// Overrides `api.base_url` when set.
pub const API_URL_ENV: &str = "TRIPMATE_API_URL";

const SUCCESS_DELAY_RANGE_MS: RangeInclusive<u64> = 1000..=2000;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// `~/.config/tripmate/config.toml` on Linux, the platform equivalent
    /// elsewhere, or `./tripmate/config.toml` if there is no config dir.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("tripmate").join("config.toml")
    }

    /// Load from the default path, then apply the environment override.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_from(&Self::config_path())?;
        if let Ok(url) = std::env::var(API_URL_ENV) {
            debug!(%url, "api url overridden from environment");
            config.api.base_url = url;
            config.validate()?;
        }
        Ok(config)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks:
    /// - `api.base_url` is an absolute http(s) URL
    /// - `timing.splash_ms` is non-zero
    /// - `timing.success_delay_ms` is within 1000..=2000
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.base_url()?;

        if self.timing.splash_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "timing.splash_ms must be greater than zero".to_string(),
            });
        }

        if !SUCCESS_DELAY_RANGE_MS.contains(&self.timing.success_delay_ms) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "timing.success_delay_ms must be between {} and {}, got {}",
                    SUCCESS_DELAY_RANGE_MS.start(),
                    SUCCESS_DELAY_RANGE_MS.end(),
                    self.timing.success_delay_ms
                ),
            });
        }

        Ok(())
    }

    /// The parsed `api.base_url`.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.api.base_url).map_err(|e| ConfigError::ValidationError {
            message: format!("api.base_url '{}' is not a valid URL: {}", self.api.base_url, e),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!("api.base_url must use http or https, got '{}'", url.scheme()),
            });
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timing.splash_ms, 4000);
        assert_eq!(config.timing.success_delay_ms, 1500);
    }

    #[test]
    fn rejects_non_http_url() {
        let mut config = Config::default();
        config.api.base_url = "ftp://example.com".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn rejects_success_delay_out_of_range() {
        let mut config = Config::default();
        config.timing.success_delay_ms = 2500;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("success_delay_ms"));
    }

    #[test]
    fn config_path_ends_with_expected() {
        assert!(Config::config_path().ends_with("tripmate/config.toml"));
    }
}
