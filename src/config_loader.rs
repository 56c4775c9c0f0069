use anyhow::{anyhow, Result};
use log::{debug, info, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::constants::*;
use crate::domain::enums::MarketScope;

/// Environment variable naming the config file
pub const CONFIG_PATH_ENV: &str = "XIV_MARKET_CONFIG";

/// Top-level configuration structure containing all config sections
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub services: ServicesConfig,
    #[serde(default)]
    pub market: MarketConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub app: AppInfo,
}

/// Upstream service endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct ServicesConfig {
    #[serde(default = "default_market_base_url")]
    pub market_base_url: String,

    #[serde(default = "default_item_data_base_url")]
    pub item_data_base_url: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Price query and page settings
#[derive(Debug, Clone, Deserialize)]
pub struct MarketConfig {
    /// Region, data center or world token used when none is given
    #[serde(default = "default_scope")]
    pub default_scope: String,

    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default = "default_listings_per_item")]
    pub listings_per_item: usize,

    #[serde(default = "default_market_fields")]
    pub fields: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    #[serde(default = "default_search_limit")]
    pub result_limit: usize,
}

/// Application information
#[derive(Debug, Clone, Deserialize)]
pub struct AppInfo {
    /// JSON file of localized item names
    #[serde(default)]
    pub translation_table: Option<PathBuf>,

    #[serde(default = "default_placeholder_icon")]
    pub placeholder_icon: String,
}

fn default_market_base_url() -> String {
    DEFAULT_MARKET_BASE_URL.to_string()
}

fn default_item_data_base_url() -> String {
    DEFAULT_ITEM_DATA_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_scope() -> String {
    DEFAULT_SCOPE.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_listings_per_item() -> usize {
    DEFAULT_LISTINGS_PER_ITEM
}

fn default_market_fields() -> String {
    DEFAULT_MARKET_FIELDS.to_string()
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_search_limit() -> usize {
    DEFAULT_SEARCH_LIMIT
}

fn default_placeholder_icon() -> String {
    DEFAULT_PLACEHOLDER_ICON.to_string()
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            market_base_url: default_market_base_url(),
            item_data_base_url: default_item_data_base_url(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            default_scope: default_scope(),
            page_size: default_page_size(),
            listings_per_item: default_listings_per_item(),
            fields: default_market_fields(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            result_limit: default_search_limit(),
        }
    }
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            translation_table: None,
            placeholder_icon: default_placeholder_icon(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Read the file
        let config_str = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file '{}': {}", path.display(), e))?;

        let mut config = Self::from_toml_str(&config_str)
            .map_err(|e| anyhow!("Failed to parse config file '{}': {}", path.display(), e))?;

        // A relative translation table path is relative to the config file
        if let (Some(table), Some(dir)) = (config.app.translation_table.as_mut(), path.parent()) {
            if table.is_relative() {
                *table = dir.join(&*table);
            }
        }

        info!("Loaded configuration from {}", path.display());
        debug!("Default scope: {}, page size: {}", config.market.default_scope, config.market.page_size);

        Ok(config)
    }

    /// Parse and validate TOML text
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let mut config: AppConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config in order: explicit path, `$XIV_MARKET_CONFIG`,
    /// `./config.toml`, `../config.toml`, then built-in defaults.
    ///
    /// An explicit path that fails to load is an error; the fallbacks are not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Self::from_file(path);
        }

        for candidate in ["./config.toml", "../config.toml"] {
            let path = Path::new(candidate);
            if !path.exists() {
                continue;
            }
            match Self::from_file(path) {
                Ok(config) => return Ok(config),
                Err(e) => warn!("Failed to load config from {}: {}", path.display(), e),
            }
        }

        warn!("No config file found, using built-in defaults");
        Ok(Self::default())
    }

    /// Clamp sizes into the ranges the services accept and check the scope
    fn validate(&mut self) -> Result<()> {
        if self.market.page_size == 0 || self.market.page_size > MAX_PAGE_SIZE {
            warn!(
                "page_size {} out of range, clamping to 1..={}",
                self.market.page_size, MAX_PAGE_SIZE
            );
            self.market.page_size = self.market.page_size.clamp(1, MAX_PAGE_SIZE);
        }

        if self.market.listings_per_item == 0 {
            warn!("listings_per_item is 0, using {}", DEFAULT_LISTINGS_PER_ITEM);
            self.market.listings_per_item = DEFAULT_LISTINGS_PER_ITEM;
        }

        self.default_scope()?;
        Ok(())
    }

    /// Helper to get the configured default scope as a typed token
    pub fn default_scope(&self) -> Result<MarketScope> {
        MarketScope::from_str(&self.market.default_scope)
    }
}
