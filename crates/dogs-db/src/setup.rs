//! Database setup and initialization.
//!
//! This module provides `setup_database()` for connecting to the `SQLite`
//! store described by a [`DatabaseConfig`] and bringing its schema up to date
//! with the embedded migrations.

use std::str::FromStr;

use anyhow::{Context, Result};
use dogs_core::DatabaseConfig;
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Versioned schema migrations, embedded at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Connects to the `SQLite` database and applies pending migrations.
///
/// This function:
/// 1. Creates the parent directory and database file if missing
/// 2. Opens a connection pool sized from the config
/// 3. Runs every migration not yet recorded in `_sqlx_migrations`
///
/// In-memory databases exist per connection, so an in-memory URL always
/// gets a single connection that is never recycled.
///
/// # Errors
///
/// Returns an error if:
/// - The URL cannot be parsed
/// - The database file cannot be opened or created
/// - A migration fails
///
/// # Example
///
/// ```rust,no_run
/// use dogs_core::DatabaseConfig;
/// use dogs_db::setup_database;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = DatabaseConfig {
///     url: "sqlite://data/dogs.db".to_string(),
///     max_connections: 5,
/// };
/// let pool = setup_database(&config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(config: &DatabaseConfig) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.url)
        .with_context(|| format!("Invalid database URL: {}", config.url))?
        .create_if_missing(true);

    let pool_options = if config.is_in_memory() {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        // Ensure parent directory exists
        if let Some(parent) = options.get_filename().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create database directory {}", parent.display())
                })?;
            }
        }
        SqlitePoolOptions::new().max_connections(config.max_connections.max(1))
    };

    let pool = pool_options
        .connect_with(options)
        .await
        .with_context(|| format!("Failed to connect to {}", config.url))?;

    MIGRATOR
        .run(&pool)
        .await
        .context("Failed to apply database migrations")?;

    tracing::info!(
        target: "dogs.db",
        url = %config.url,
        in_memory = config.is_in_memory(),
        "Database ready"
    );

    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// Creates a fresh in-memory database with the full production schema.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    setup_database(&DatabaseConfig::in_memory()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_setup_test_database() {
        let pool = setup_test_database().await.unwrap();

        // Verify tables exist by querying them
        let _: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM dogs")
            .fetch_one(&pool)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_setup_is_idempotent_for_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig {
            url: format!("sqlite://{}", dir.path().join("nested/dogs.db").display()),
            max_connections: 2,
        };

        let pool = setup_database(&config).await.unwrap();
        pool.close().await;

        // Second run finds migrations already applied
        let pool = setup_database(&config).await.unwrap();
        let (applied,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM _sqlx_migrations")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(applied, 1);
    }
}
