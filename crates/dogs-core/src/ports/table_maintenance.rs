//! Table maintenance port.
//!
//! Bulk operations that act on whole tables rather than single records.
//! Used by the test harness to reset state between tests.

use async_trait::async_trait;

use super::RepositoryError;

/// Whole-table operations over the store's known entity tables.
#[async_trait]
pub trait TableMaintenance: Send + Sync {
    /// Names of every entity table the store manages.
    fn tables(&self) -> Vec<String>;

    /// Delete every row from `table`, returning the number of rows removed.
    ///
    /// Identifier sequences are left untouched. Fails with
    /// [`RepositoryError::UnknownTable`] for names outside [`Self::tables`].
    async fn delete_all(&self, table: &str) -> Result<u64, RepositoryError>;
}
