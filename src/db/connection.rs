//! Database connection pool and server diagnostics.

use crate::config::DatabaseConfig;
use super::employee;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr, Statement};
use std::time::Duration;
use tracing::log::LevelFilter;

/// Open a small pool. The tool issues statements sequentially, so a couple of
/// connections are plenty.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    tracing::info!(
        "Connecting to postgres://{}@{}:{}/{}",
        config.username,
        config.host,
        config.port,
        config.name
    );

    let mut opt = ConnectOptions::new(config.connection_string());
    opt.max_connections(2)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true)
        .sqlx_logging_level(LevelFilter::Debug);

    Database::connect(opt).await
}

/// Check the connection with a trivial query.
pub async fn test_connection(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute_unprepared("SELECT 1").await?;
    Ok(())
}

/// Get PostgreSQL version string.
pub async fn get_version(db: &DatabaseConnection) -> Result<String, DbErr> {
    let row = db
        .query_one(Statement::from_string(
            DatabaseBackend::Postgres,
            "SELECT version() AS version".to_owned(),
        ))
        .await?;

    match row {
        Some(row) => row.try_get("", "version"),
        None => Ok("Unknown".to_owned()),
    }
}

/// Row counts of the application tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCounts {
    pub employees: u64,
}

pub async fn get_table_counts(db: &DatabaseConnection) -> Result<TableCounts, DbErr> {
    let employees = employee::count(db).await?;
    Ok(TableCounts { employees })
}
