pub mod entities;
pub mod migrator;
pub mod seed;
pub mod source;

pub use source::{SelectExt, SelectSource};

use tracing::info;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./paged-list.db?mode=rwc")
    pub url: String,
    /// Pool size cap; `None` keeps the driver default
    pub max_connections: Option<u32>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl DatabaseConfig {
    /// Private in-memory SQLite database. Every pooled connection would open
    /// its own empty database, so the pool is pinned to a single connection.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: Some(1),
        }
    }

    /// Create config from a URL, pinning the pool for in-memory SQLite
    pub fn from_url(url: impl Into<String>) -> Self {
        let url = url.into();
        let in_memory = url.contains(":memory:") || url.contains("mode=memory");
        let max_connections = in_memory.then_some(1);
        Self { url, max_connections }
    }
}

/// Initialize database connection
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, sea_orm::DbErr> {
    info!("Connecting to database: {}", config.url);

    let mut options = ConnectOptions::new(config.url.clone());
    if let Some(max) = config.max_connections {
        options.max_connections(max).min_connections(max);
    }

    let db = Database::connect(options).await?;
    info!("Database connected successfully");
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_urls_pin_the_pool() {
        for url in [
            "sqlite::memory:",
            "sqlite://:memory:",
            "sqlite://forum?mode=memory",
            "sqlite://forum?mode=memory&cache=shared",
        ] {
            assert_eq!(DatabaseConfig::from_url(url).max_connections, Some(1), "{url}");
        }
    }

    #[test]
    fn file_urls_keep_driver_default() {
        let cfg = DatabaseConfig::from_url("sqlite://./forum.db?mode=rwc");
        assert_eq!(cfg.max_connections, None);
    }
}
