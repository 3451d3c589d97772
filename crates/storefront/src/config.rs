//! Configuration management for storefront.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "storefront";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "STOREFRONT_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `STOREFRONT_`, sections split on
///    `__`, e.g. `STOREFRONT_API__BASE_URL`)
/// 2. TOML config file at `~/.config/storefront/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog API configuration.
    pub api: ApiConfig,
    /// Rendering configuration.
    pub display: DisplayConfig,
}

/// Catalog API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the product endpoints.
    pub base_url: String,
    /// Request timeout in seconds.
    /// Set to 0 to wait indefinitely.
    pub timeout_secs: u64,
}

/// Rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Symbol printed before prices.
    pub currency_symbol: String,
    /// Image shown on a grid card when a product has none.
    pub card_placeholder: String,
    /// Image shown in the detail view when a product has none.
    pub detail_placeholder: String,
    /// Image shown in the admin list when a product has none.
    pub thumbnail_placeholder: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api/clothing".to_string(),
            timeout_secs: 0,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            card_placeholder: "https://via.placeholder.com/300x400?text=No+Image".to_string(),
            detail_placeholder: "https://via.placeholder.com/400x500?text=No+Image".to_string(),
            thumbnail_placeholder: "https://via.placeholder.com/100?text=No+Image".to_string(),
        }
    }
}

impl ApiConfig {
    /// Get the request timeout, if one is configured.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        let base_url = self.api.base_url.trim();
        if base_url.is_empty() {
            return Err(Error::ConfigValidation {
                message: "api.base_url must not be empty".to_string(),
            });
        }

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::ConfigValidation {
                message: format!("api.base_url must be an http(s) URL, got {base_url}"),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.api.base_url, "http://localhost:5000/api/clothing");
        assert_eq!(config.api.timeout_secs, 0);
        assert_eq!(config.display.currency_symbol, "$");
    }

    #[test]
    fn test_default_placeholders() {
        let display = DisplayConfig::default();

        assert!(display.card_placeholder.contains("300x400"));
        assert!(display.detail_placeholder.contains("400x500"));
        assert!(display.thumbnail_placeholder.contains("100?"));
    }

    #[test]
    fn test_timeout_none_when_zero() {
        assert!(ApiConfig::default().timeout().is_none());
    }

    #[test]
    fn test_timeout_some_when_set() {
        let api = ApiConfig {
            timeout_secs: 15,
            ..ApiConfig::default()
        };
        assert_eq!(api.timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_base_url() {
        let mut config = Config::default();
        config.api.base_url = "  ".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("must not be empty"));
    }

    #[test]
    fn test_validate_non_http_base_url() {
        let mut config = Config::default();
        config.api.base_url = "localhost:5000/api".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("http(s)"));
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("storefront"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());
    }

    #[test]
    fn test_load_from_toml_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "storefront.toml",
                r#"
                [api]
                base_url = "https://shop.example/api/clothing"
                timeout_secs = 5

                [display]
                currency_symbol = "€"
                "#,
            )?;

            let config = Config::load_from(Some(PathBuf::from("storefront.toml")))
                .map_err(|e| e.to_string())?;
            assert_eq!(config.api.base_url, "https://shop.example/api/clothing");
            assert_eq!(config.api.timeout_secs, 5);
            assert_eq!(config.display.currency_symbol, "€");
            assert!(config.display.card_placeholder.contains("300x400"));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "storefront.toml",
                r#"
                [api]
                base_url = "https://file.example/api"
                "#,
            )?;
            jail.set_env("STOREFRONT_API__BASE_URL", "https://env.example/api");

            let config = Config::load_from(Some(PathBuf::from("storefront.toml")))
                .map_err(|e| e.to_string())?;
            assert_eq!(config.api.base_url, "https://env.example/api");
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "storefront.toml",
                r#"
                [api]
                base_url = ""
                "#,
            )?;

            let result = Config::load_from(Some(PathBuf::from("storefront.toml")));
            assert!(matches!(result, Err(Error::ConfigValidation { .. })));
            Ok(())
        });
    }

    #[test]
    fn test_config_serialize() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(json.contains("base_url"));
        assert!(json.contains("currency_symbol"));
    }

    #[test]
    fn test_api_config_deserialize_partial() {
        let json = r#"{"timeout_secs": 30}"#;
        let api: ApiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(api.timeout_secs, 30);
        assert_eq!(api.base_url, ApiConfig::default().base_url);
    }
}
