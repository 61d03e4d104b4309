//! Composition utilities for building `AppCore` with `SQLite` backends.
//!
//! This module is focused purely on construction and should not contain
//! any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use dogs_core::{AppCore, Repos};

use crate::repositories::{SqliteDogRepository, SqliteTableMaintenance};

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    ///
    /// Returns a `Repos` struct from `dogs-core` containing trait-object-wrapped
    /// repositories.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(
            Arc::new(SqliteDogRepository::new(pool.clone())),
            Arc::new(SqliteTableMaintenance::new(pool)),
        )
    }

    /// Build a complete `AppCore` instance from a pool.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// let repos = CoreFactory::build_repos(pool);
    /// let core = AppCore::new(repos);
    /// ```
    pub fn build_app_core(pool: SqlitePool) -> AppCore {
        AppCore::new(Self::build_repos(pool))
    }

    /// Create a dog repository from a pool.
    pub fn dog_repository(pool: SqlitePool) -> Arc<SqliteDogRepository> {
        Arc::new(SqliteDogRepository::new(pool))
    }

    /// Create a table maintenance handle from a pool.
    pub fn table_maintenance(pool: SqlitePool) -> Arc<SqliteTableMaintenance> {
        Arc::new(SqliteTableMaintenance::new(pool))
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production migrations
/// already applied.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create a dog repository using this test database.
    pub fn dog_repository(&self) -> SqliteDogRepository {
        SqliteDogRepository::new(self.pool.clone())
    }

    /// Create a table maintenance handle using this test database.
    pub fn table_maintenance(&self) -> SqliteTableMaintenance {
        SqliteTableMaintenance::new(self.pool.clone())
    }
}
