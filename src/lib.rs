//! # paged-list
//!
//! Page/size pagination over any countable, ordered record source.
//!
//! ## Architecture
//!
//! - **domain**: the paginator and the [`RecordSource`] boundary trait
//! - **shared**: page descriptor, validated page request, error types
//! - **infrastructure**: record sources (in-memory sequences, SeaORM
//!   selects) plus schema, migrations and sample data
//! - **config** / **app**: TOML configuration, tracing and database bootstrap
//!   for the command-line tool
//!
//! ```ignore
//! let source = user::Entity::find().order_by_asc(user::Column::Id).source(&db);
//! if let Some(page) = source.paginate(2, 20).await? {
//!     println!("{} of {}", page.len(), page.total_count());
//! }
//! ```

pub mod app;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use domain::{paginate, paginate_request, Paginate, RecordSource};
pub use shared::{AppError, AppResult, PageRequest, PagedList};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SelectExt, SelectSource};
