//! Application configuration.

use maker_quoter::QuoterConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{AppError, AppResult};

/// Environment variable overriding the configured API key.
pub const API_KEY_ENV: &str = "ORDERBOOK_API_KEY";

/// Environment variable pointing at the config file.
pub const CONFIG_ENV: &str = "MAKER_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Orderbook API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Deployment root, e.g. "http://localhost:8080".
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Maker API key. `ORDERBOOK_API_KEY` takes precedence when set, so the
    /// key can stay out of checked-in config files.
    #[serde(default)]
    pub api_key: String,
}

fn default_base_url() -> String {
    "http://localhost".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
        }
    }
}

impl ApiConfig {
    /// Resolve the API key: environment first, then config.
    pub fn resolve_api_key(&self) -> AppResult<String> {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                return Ok(key);
            }
        }
        if !self.api_key.is_empty() {
            return Ok(self.api_key.clone());
        }
        Err(AppError::Config(format!(
            "no API key: set {API_KEY_ENV} or api.api_key"
        )))
    }
}

/// Reference price feed settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Full ticker URL, query string included.
    #[serde(default = "default_ticker_url")]
    pub ticker_url: String,
}

fn default_ticker_url() -> String {
    "https://www.binance.com/api/v3/ticker/price?symbol=ETHUSDT".to_string()
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            ticker_url: default_ticker_url(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    pub quoter: QuoterConfig,
}

impl AppConfig {
    /// Load configuration: explicit path, else `MAKER_CONFIG`, else the
    /// default location.
    pub fn load(path: Option<&str>) -> AppResult<Self> {
        let path = path
            .map(str::to_string)
            .or_else(|| std::env::var(CONFIG_ENV).ok())
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

        if !Path::new(&path).exists() {
            return Err(AppError::Config(format!("config file not found: {path}")));
        }

        Self::from_file(&path)
    }

    /// Load from a specific file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("failed to read config: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("failed to parse config: {e}")))
    }
}
