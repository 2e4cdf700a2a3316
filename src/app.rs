//! Runtime glue shared by the binary and integration tests: tracing setup,
//! database bootstrap and table-by-name paging.

use clap::ValueEnum;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use sea_orm_migration::MigratorTrait;
use serde::Serialize;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::Paginate;
use crate::infrastructure::database::entities::{comment, community, post, user};
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::database::seed;
use crate::infrastructure::{init_database, SelectExt};
use crate::shared::{AppResult, PagedList};

/// Tables that can be paged from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Table {
    Users,
    Communities,
    Posts,
    Comments,
}

pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(filter_directive(&config.logging.level))
    });

    let registry = tracing_subscriber::registry().with(env_filter);
    if config.logging.format.eq_ignore_ascii_case("json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// A bare level applies to this crate only; sqlx and sea-orm log every
/// statement at info and stay at warn. Full directives pass through.
fn filter_directive(level: &str) -> String {
    let level = level.trim();
    if level.contains('=') || level.contains(',') {
        level.to_string()
    } else {
        format!("warn,paged_list={}", level)
    }
}

/// Connect, run migrations, and optionally load the sample data.
pub async fn open_database(config: &AppConfig, with_sample_data: bool) -> AppResult<DatabaseConnection> {
    let db = init_database(&config.database.to_database_config()).await?;

    info!("Running database migrations...");
    Migrator::up(&db, None).await?;
    info!("Migrations completed");

    if with_sample_data {
        seed::seed_all(&db).await?;
    }

    Ok(db)
}

/// Page through `table` in primary-key order and render the page as JSON.
///
/// `Ok(None)` means the request itself was rejected (non-positive page
/// number or size).
pub async fn fetch_page(
    db: &DatabaseConnection,
    table: Table,
    page_number: i64,
    page_size: i64,
) -> AppResult<Option<serde_json::Value>> {
    match table {
        Table::Users => {
            let source = user::Entity::find()
                .order_by_asc(user::Column::Id)
                .source(db);
            to_json(source.paginate(page_number, page_size).await?)
        }
        Table::Communities => {
            let source = community::Entity::find()
                .order_by_asc(community::Column::Id)
                .source(db);
            to_json(source.paginate(page_number, page_size).await?)
        }
        Table::Posts => {
            let source = post::Entity::find()
                .order_by_asc(post::Column::Id)
                .source(db);
            to_json(source.paginate(page_number, page_size).await?)
        }
        Table::Comments => {
            let source = comment::Entity::find()
                .order_by_asc(comment::Column::Id)
                .source(db);
            to_json(source.paginate(page_number, page_size).await?)
        }
    }
}

fn to_json<T: Serialize>(page: Option<PagedList<T>>) -> AppResult<Option<serde_json::Value>> {
    Ok(page.map(|p| serde_json::to_value(&p)).transpose()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_level_is_scoped_to_this_crate() {
        assert_eq!(filter_directive("debug"), "warn,paged_list=debug");
        assert_eq!(filter_directive(" info "), "warn,paged_list=info");
    }

    #[test]
    fn full_directives_pass_through() {
        assert_eq!(filter_directive("sqlx=debug"), "sqlx=debug");
        assert_eq!(filter_directive("info,sea_orm=trace"), "info,sea_orm=trace");
    }
}
