use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid page request: page_number={page_number}, page_size={page_size}")]
    InvalidPage { page_number: i64, page_size: i64 },
}

pub type AppResult<T> = Result<T, AppError>;
