//! paged-list — print one page of a seeded SQLite table as JSON.
//!
//! ```sh
//! # Second page of two users from a fresh in-memory database
//! paged-list --table users --page 2 --page-size 2
//!
//! # Page an existing database file without re-seeding it
//! paged-list --database-url "sqlite://./forum.db?mode=rwc" --no-seed --table posts
//!
//! # Validate config without touching the database
//! paged-list --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use paged_list::app::{fetch_page, init_tracing, open_database, Table};
use paged_list::{default_config_path, AppConfig, AppError};

/// Paginate sample forum data (users, communities, posts, comments).
#[derive(Parser, Debug)]
#[command(name = "paged-list", version, about)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "PAGED_LIST_CONFIG")]
    config: Option<PathBuf>,

    /// Override the database URL.
    #[arg(long)]
    database_url: Option<String>,

    /// Table to page through.
    #[arg(short, long, value_enum, default_value_t = Table::Users)]
    table: Table,

    /// 1-based page number (defaults to the configured value).
    #[arg(short, long, allow_negative_numbers = true)]
    page: Option<i64>,

    /// Records per page (defaults to the configured value).
    #[arg(short = 's', long, allow_negative_numbers = true)]
    page_size: Option<i64>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Do not insert the sample data.
    #[arg(long)]
    no_seed: bool,

    /// Validate the configuration file and exit.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(url) = cli.database_url {
        config.database.url = url;
    }

    init_tracing(&config);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    if cli.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Database    : {}", config.database.connection_url());
        println!("   Log level   : {}", config.logging.level);
        println!("   Page size   : {}", config.pagination.default_page_size);
        return Ok(());
    }

    let page_number = cli.page.unwrap_or(config.pagination.default_page_number);
    let page_size = cli.page_size.unwrap_or(config.pagination.default_page_size);

    let db = match open_database(&config, !cli.no_seed).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to prepare database: {}", e);
            return Err(e.into());
        }
    };

    match fetch_page(&db, cli.table, page_number, page_size).await? {
        Some(page) => {
            println!("{}", serde_json::to_string_pretty(&page)?);
            Ok(())
        }
        None => {
            let e = AppError::InvalidPage {
                page_number,
                page_size,
            };
            error!("{}", e);
            Err(e.into())
        }
    }
}
