//! Database connection pool and schema migrations
//!
//! Uses sqlx PgPool with explicit connection limits. Handlers borrow the
//! pool from application state; there is no global session.

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Schema migrations embedded from the workspace `migrations/` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("../migrations");

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/showbook").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a PostgreSQL connection pool with a custom connection limit.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Apply any migrations the database has not seen yet.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    tracing::info!("Running database migrations...");
    MIGRATOR.run(pool).await?;
    tracing::info!("Database schema is up to date");
    Ok(())
}
