//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP fetch behavior settings
    #[serde(default)]
    pub fetcher: FetcherConfig,

    /// IEEE Xplore API settings
    #[serde(default)]
    pub ieee: IeeeConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.fetcher.user_agent.trim().is_empty() {
            return Err(AppError::validation("fetcher.user_agent is empty"));
        }
        if self.fetcher.timeout_secs == 0 {
            return Err(AppError::validation("fetcher.timeout_secs must be > 0"));
        }
        if let Some(key) = &self.ieee.api_key {
            if key.trim().is_empty() {
                return Err(AppError::validation("ieee.api_key is empty"));
            }
        }
        Ok(())
    }
}

/// HTTP client behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// IEEE Xplore API settings.
///
/// The key is optional; when absent the API source declares itself
/// inapplicable and resolution falls through to the next source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IeeeConfig {
    /// API key, normally injected by the CLI from `IEEE_API_KEY`
    #[serde(default)]
    pub api_key: Option<String>,

    /// Year to proceedings catalog number mapping for S&P
    #[serde(default = "defaults::sp_catalogs")]
    pub sp_catalogs: Vec<CatalogEntry>,
}

impl Default for IeeeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            sp_catalogs: defaults::sp_catalogs(),
        }
    }
}

impl IeeeConfig {
    /// Look up the proceedings catalog number for a given year.
    pub fn catalog_for(&self, year: u16) -> Option<&str> {
        self.sp_catalogs
            .iter()
            .find(|entry| entry.year == year)
            .map(|entry| entry.punumber.as_str())
    }
}

/// One year's proceedings catalog number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Conference year
    pub year: u16,

    /// IEEE Xplore publication number for that year's proceedings
    pub punumber: String,
}

mod defaults {
    use super::CatalogEntry;

    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; top4crawler/1.0)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    pub fn sp_catalogs() -> Vec<CatalogEntry> {
        [
            (2020, "9144328"),
            (2021, "9519381"),
            (2022, "9833550"),
            (2023, "10179215"),
            (2024, "10646615"),
        ]
        .into_iter()
        .map(|(year, punumber)| CatalogEntry {
            year,
            punumber: punumber.to_string(),
        })
        .collect()
    }
}
