pub mod config;
pub mod database;
pub mod transaction;

pub use config::DatabaseConfig;
pub use database::{Database, DbConnection, DbPool};
