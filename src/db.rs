use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{ConnectOptions, SqlitePool};
use std::str::FromStr;
use std::time::Duration;
use tracing::log::LevelFilter;

/// WAL journal, 5s busy timeout, NORMAL sync, a larger page cache, enforced
/// foreign keys and in-memory temp tables. Set on the connect options so
/// every pooled connection gets them, not only the first.
fn connect_options(database_url: &str) -> Result<SqliteConnectOptions> {
    Ok(SqliteConnectOptions::from_str(database_url)?
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .synchronous(SqliteSynchronous::Normal)
        .pragma("cache_size", "-20000")
        .foreign_keys(true)
        .pragma("temp_store", "memory")
        .log_statements(LevelFilter::Debug))
}

/// Pool for queries, with several connections for concurrent reads.
pub async fn create_read_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(connect_options(database_url)?)
        .await?;

    tracing::info!(max_connections, "created read pool");

    Ok(pool)
}

/// Pool for writes. A single connection keeps SQLite writers serialized and
/// avoids SQLITE_BUSY.
pub async fn create_write_pool(database_url: &str) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(connect_options(database_url)?.create_if_missing(true))
        .await?;

    tracing::info!("created write pool");

    Ok(pool)
}

/// Single pool for CLI commands and tests.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(connect_options(database_url)?.create_if_missing(true))
        .await?;

    tracing::info!(max_connections, "created pool");

    Ok(pool)
}
