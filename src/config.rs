//! Search integration configuration

use crate::recent_searches::{RECENT_SEARCHES_KEY, RECENT_SEARCHES_LIMIT};
use crate::utils::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings of a search integration on one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Selector matching the page's search input, exactly once
    pub input_selector: String,
    /// Help center root URL articles are linked under
    pub base_url: String,
    pub locale: String,
    /// Theme color of the autocomplete panel
    pub primary_color: String,
    /// Used when `primary_color` can't be resolved to RGB
    pub fallback_color: String,
    pub recent_searches: RecentSearchesConfig,
    /// File backing the recent searches; kept in memory when unset
    pub storage_path: Option<PathBuf>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            input_selector: "#query".to_string(),
            base_url: "/hc/".to_string(),
            locale: "en-us".to_string(),
            primary_color: "#3c4fe0".to_string(),
            fallback_color: "#000000".to_string(),
            recent_searches: RecentSearchesConfig::default(),
            storage_path: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecentSearchesConfig {
    pub key: String,
    pub limit: usize,
}

impl Default for RecentSearchesConfig {
    fn default() -> Self {
        Self {
            key: RECENT_SEARCHES_KEY.to_string(),
            limit: RECENT_SEARCHES_LIMIT,
        }
    }
}

impl SearchConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Self::from_json(&content)
    }

    /// Reject values setup can't work with.
    ///
    /// The base URL is only checked loosely; links are built from it as is.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input_selector.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "input_selector",
                reason: "must not be empty".to_string(),
            });
        }
        if self.recent_searches.key.is_empty() {
            return Err(ConfigError::Invalid {
                field: "recent_searches.key",
                reason: "must not be empty".to_string(),
            });
        }
        if self.recent_searches.limit == 0 {
            return Err(ConfigError::Invalid {
                field: "recent_searches.limit",
                reason: "must be at least 1".to_string(),
            });
        }
        if !self.base_url.starts_with('/') && url::Url::parse(&self.base_url).is_err() {
            log::warn!("base_url '{}' is neither absolute nor root-relative", self.base_url);
        }
        if !self.base_url.is_empty() && !self.base_url.ends_with('/') {
            log::warn!("base_url '{}' has no trailing slash", self.base_url);
        }
        Ok(())
    }
}
