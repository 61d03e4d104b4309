//! `SQLite` implementation of the `TableMaintenance` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use dogs_core::{RepositoryError, TableMaintenance};

use super::row_mappers::map_sqlx_error;

/// Every entity table created by the migrations.
///
/// Table names cannot be bound as query parameters, so `delete_all` only
/// ever interpolates names from this list.
pub const ENTITY_TABLES: &[&str] = &["dogs"];

/// `SQLite` implementation of the `TableMaintenance` trait.
pub struct SqliteTableMaintenance {
    pool: SqlitePool,
}

impl SqliteTableMaintenance {
    /// Create a new `SQLite` table maintenance handle.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TableMaintenance for SqliteTableMaintenance {
    fn tables(&self) -> Vec<String> {
        ENTITY_TABLES.iter().map(|t| (*t).to_string()).collect()
    }

    async fn delete_all(&self, table: &str) -> Result<u64, RepositoryError> {
        let Some(known) = ENTITY_TABLES.iter().find(|t| **t == table) else {
            return Err(RepositoryError::UnknownTable(table.to_string()));
        };

        let result = sqlx::query(&format!("DELETE FROM {known}"))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        tracing::debug!(
            target: "dogs.db",
            table = *known,
            rows = result.rows_affected(),
            "Cleared table"
        );
        Ok(result.rows_affected())
    }
}
