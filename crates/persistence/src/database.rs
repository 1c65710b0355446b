//! Connection pool setup and schema migrations.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::Result;

/// URL of a private in-memory database.
pub const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Returns true if `database_url` points at an in-memory database.
pub fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Opens a connection pool for `database_url`.
///
/// File databases are created if missing. An in-memory database lives only
/// as long as its connection, so it gets exactly one connection that is
/// never recycled, whatever `max_connections` says.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let connect_options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections.max(1))
    };

    let pool = pool_options.connect_with(connect_options).await?;
    tracing::debug!(database_url, "connected to sqlite");
    Ok(pool)
}

/// Runs the database migrations.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    Ok(())
}

/// Opens a fresh, migrated in-memory database.
pub async fn connect_in_memory() -> Result<SqlitePool> {
    let pool = connect(IN_MEMORY_URL, 1).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}
