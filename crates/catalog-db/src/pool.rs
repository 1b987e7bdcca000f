//! Database connection pool

use std::str::FromStr;
use std::time::Duration;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::DbResult;

/// Database connection pool type alias
pub type DbPool = SqlitePool;

/// Embedded schema migrations
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Pool tuning knobs
#[derive(Debug, Clone)]
pub struct PoolOptions {
    /// Upper bound on open connections
    pub max_connections: u32,
    /// How long a caller waits for a free connection
    pub acquire_timeout: Duration,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            max_connections: 5,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// Create a new database connection pool with default options
pub async fn create_pool(database_url: &str) -> DbResult<DbPool> {
    create_pool_with_options(database_url, PoolOptions::default()).await
}

/// Create a new database connection pool
pub async fn create_pool_with_options(
    database_url: &str,
    options: PoolOptions,
) -> DbResult<DbPool> {
    let connect = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(options.max_connections)
        .acquire_timeout(options.acquire_timeout)
        .connect_with(connect)
        .await?;

    Ok(pool)
}

/// Create a migrated in-memory database.
///
/// Every SQLite in-memory connection is its own database, so the pool holds
/// exactly one connection that is never recycled.
pub async fn create_memory_pool() -> DbResult<DbPool> {
    let connect = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(connect)
        .await?;

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Apply all pending migrations
pub async fn run_migrations(pool: &DbPool) -> DbResult<()> {
    tracing::info!("Running database migrations");
    MIGRATOR.run(pool).await?;
    Ok(())
}
