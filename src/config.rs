//! Paginator configuration
//!
//! A flat record of scalars that can be built in code or loaded from
//! YAML/JSON. Loading helpers validate the record before returning it.

use crate::error::{Error, Result};
use crate::template::{has_placeholder, DEFAULT_URL_PATTERN};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Items per page when none is configured
pub const DEFAULT_ITEMS_PER_PAGE: u64 = 10;

/// Visible slot budget when none is configured
pub const DEFAULT_MAX_VISIBLE: usize = 10;

/// Construction-time settings for a [`Paginator`](crate::Paginator)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatorConfig {
    /// Total number of items being paginated
    #[serde(default)]
    pub total_items: u64,

    /// Items shown per page (zero yields no pages)
    #[serde(default = "default_items_per_page")]
    pub items_per_page: u64,

    /// Current page, 1-based, not clamped
    #[serde(default = "default_current_page")]
    pub current_page: i64,

    /// URL pattern containing the `(:num)` placeholder
    #[serde(default = "default_url_pattern")]
    pub url_pattern: String,

    /// Slot budget for the rendered control (pages and ellipses)
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
}

fn default_items_per_page() -> u64 {
    DEFAULT_ITEMS_PER_PAGE
}

fn default_current_page() -> i64 {
    1
}

fn default_url_pattern() -> String {
    DEFAULT_URL_PATTERN.to_string()
}

fn default_max_visible() -> usize {
    DEFAULT_MAX_VISIBLE
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            total_items: 0,
            items_per_page: default_items_per_page(),
            current_page: default_current_page(),
            url_pattern: default_url_pattern(),
            max_visible: default_max_visible(),
        }
    }
}

impl PaginatorConfig {
    /// Create a config with the given totals and defaults elsewhere
    pub fn new(total_items: u64, items_per_page: u64, current_page: i64) -> Self {
        Self {
            total_items,
            items_per_page,
            current_page,
            ..Default::default()
        }
    }

    /// Set the URL pattern
    #[must_use]
    pub fn with_url_pattern(mut self, url_pattern: impl Into<String>) -> Self {
        self.url_pattern = url_pattern.into();
        self
    }

    /// Set the visible slot budget
    #[must_use]
    pub fn with_max_visible(mut self, max_visible: usize) -> Self {
        self.max_visible = max_visible;
        self
    }

    /// Check semantic constraints serde cannot express
    pub fn validate(&self) -> Result<()> {
        if !has_placeholder(&self.url_pattern) {
            return Err(Error::invalid_value(
                "url_pattern",
                format!(
                    "'{}' does not contain the (:num) placeholder",
                    self.url_pattern
                ),
            ));
        }

        if self.max_visible == 0 {
            return Err(Error::invalid_value("max_visible", "must be at least 1"));
        }

        Ok(())
    }

    /// Parse and validate a config from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        tracing::debug!("Loaded paginator config from YAML: {:?}", config);
        Ok(config)
    }

    /// Parse and validate a config from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        tracing::debug!("Loaded paginator config from JSON: {:?}", config);
        Ok(config)
    }
}

/// Load a config file
///
/// Files ending in `.json` are parsed as JSON, everything else as YAML.
pub fn load_config(path: impl AsRef<Path>) -> Result<PaginatorConfig> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::file_not_found(path.display().to_string())
        } else {
            Error::Io(e)
        }
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        PaginatorConfig::from_json_str(&content)
    } else {
        PaginatorConfig::from_yaml_str(&content)
    }
}
