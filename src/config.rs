//! Configuration module
//!
//! Loaded from `~/.config/paged-list/config.toml` unless overridden by
//! `PAGED_LIST_CONFIG` or `--config`. Every section and field is optional.
//!
//! ```toml
//! [database]
//! url = "sqlite://./paged-list.db?mode=rwc"
//!
//! [logging]
//! level = "debug"
//! format = "json"
//!
//! [pagination]
//! default_page_size = 25
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::infrastructure::DatabaseConfig;
use crate::shared::{AppError, AppResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseSection,
    pub logging: LoggingSection,
    pub pagination: PaginationSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub url: String,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
        }
    }
}

impl DatabaseSection {
    pub fn connection_url(&self) -> &str {
        &self.url
    }

    pub fn to_database_config(&self) -> DatabaseConfig {
        DatabaseConfig::from_url(self.url.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Bare level for this crate ("debug"), or a full EnvFilter directive
    pub level: String,
    /// "text" or "json"
    pub format: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

/// Fallbacks when the caller does not name a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationSection {
    pub default_page_number: i64,
    pub default_page_size: i64,
}

impl Default for PaginationSection {
    fn default() -> Self {
        Self {
            default_page_number: 1,
            default_page_size: 10,
        }
    }
}

impl AppConfig {
    /// Read the config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> AppResult<Self> {
        toml::from_str(raw).map_err(|e| AppError::Config(e.to_string()))
    }
}

pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("paged-list")
        .join("config.toml")
}
