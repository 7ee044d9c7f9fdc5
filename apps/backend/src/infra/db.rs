//! Database bootstrap: connect and migrate in one entrypoint.

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbProfile};
use crate::error::AppError;

/// Connect to the database for the given profile and bring the schema up to
/// date. This is the single entrypoint used by both `main` and the tests.
pub async fn bootstrap_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile)?;
    let conn = connect_db(&url).await?;

    migration::migrate(&conn, migration::MigrationCommand::Up)
        .await
        .map_err(|e| AppError::db(format!("migration failed: {e}")))?;

    info!(profile = ?profile, "database bootstrapped");
    Ok(conn)
}

/// Connect without migrating.
///
/// SQLite in-memory databases are pinned to a single pooled connection:
/// every connection in a larger pool would otherwise see its own empty
/// database.
pub async fn connect_db(url: &str) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(url);
    if url.starts_with("sqlite::memory:") {
        opt.min_connections(1).max_connections(1);
    } else {
        opt.min_connections(1)
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(5));
    }
    opt.sqlx_logging(false);

    Database::connect(opt)
        .await
        .map_err(|e| AppError::db(format!("failed to connect to database: {e}")))
}
