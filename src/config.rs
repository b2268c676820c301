//! # Configuration
//!
//! Settings are read from a TOML file. Every key is optional; missing keys
//! fall back to the compiled defaults below.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `validation.min_name_length` | `1` | Minimum trimmed name length; `1` only requires a non-blank name |
//! | `display.currency_symbol` | `S/` | Prefix for prices in change summaries |
//! | `display.stock_unit` | `units` | Suffix for stock levels in change summaries |
//! | `stock.low_stock_threshold` | `10` | Highest stock level still flagged as low |
//! | `actor.buffer_size` | `32` | Request channel capacity of the product actor |
//!
//! The demo binary reads the file named by `PRODUCT_INVENTORY_CONFIG`.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::diff::DisplayFormat;
use crate::stock::DEFAULT_LOW_STOCK_THRESHOLD;
use crate::validation::ValidationPolicy;

pub const CONFIG_PATH_ENV: &str = "PRODUCT_INVENTORY_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StockConfig {
    pub low_stock_threshold: u32,
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ActorConfig {
    pub buffer_size: usize,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self { buffer_size: 32 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    pub validation: ValidationPolicy,
    pub display: DisplayFormat,
    pub stock: StockConfig,
    pub actor: ActorConfig,
}

impl InventoryConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
