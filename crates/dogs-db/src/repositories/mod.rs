//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod row_mappers;
mod sqlite_dog_repository;
mod sqlite_table_maintenance;

pub use sqlite_dog_repository::SqliteDogRepository;
pub use sqlite_table_maintenance::{ENTITY_TABLES, SqliteTableMaintenance};
