//! Infrastructure layer - concrete record sources and database wiring

pub mod database;
pub mod storage;

pub use database::{init_database, DatabaseConfig, SelectExt, SelectSource};
