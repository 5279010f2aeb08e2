//! Console configuration module.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SHOP_*`, e.g. `SHOP_UNIQUE_LOGINS=true`)
//! 2. Config file (`shop.toml` in the working directory, optional)
//! 3. Defaults (this file)

use serde::{Deserialize, Serialize};
use shop_core::config::DEFAULT_USER_NAME;
use shop_core::ShopConfig;

/// Base name of the optional config file (`shop.toml`).
pub const CONFIG_FILE: &str = "shop";

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "SHOP";

/// Filter used when neither `RUST_LOG` nor `log_filter` says otherwise.
pub const DEFAULT_LOG_FILTER: &str = "info,shop_core=debug";

/// How the checkout summary is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Shop display name
    pub shop_name: Option<String>,

    /// Login of the synthetic session user
    pub default_user_name: String,

    /// Reject duplicate logins at registration
    pub unique_logins: bool,

    /// tracing-subscriber filter directive
    pub log_filter: String,

    /// Checkout output format
    pub output: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            shop_name: None,
            default_user_name: DEFAULT_USER_NAME.to_string(),
            unique_logins: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            output: OutputFormat::Text,
        }
    }
}

impl AppConfig {
    /// Load configuration from `shop.toml` and `SHOP_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(env_source(None));
        Self::build(builder)
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let config: AppConfig = builder.build()?.try_deserialize()?;

        if config.default_user_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue("default_user_name".to_string()));
        }

        Ok(config)
    }

    /// The part of the configuration the shop itself consumes.
    pub fn shop_config(&self) -> ShopConfig {
        ShopConfig {
            shop_name: self.shop_name.clone(),
            default_user_name: self.default_user_name.clone(),
            unique_logins: self.unique_logins,
        }
    }
}

fn env_source(vars: Option<config::Map<String, String>>) -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .try_parsing(true)
        .source(vars)
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
