//! `SQLite` persistence for the dogs service.
//!
//! Implements the `dogs-core` ports with `sqlx`, owns the schema
//! migrations, and provides composition helpers for adapters.

#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export TestDb for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;

// Re-export repository implementations
pub use repositories::{ENTITY_TABLES, SqliteDogRepository, SqliteTableMaintenance};

// Re-export setup functions for convenient access
pub use setup::{MIGRATOR, setup_database};
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;

// Re-export the pool type so adapters don't need a direct sqlx dependency
pub use sqlx::SqlitePool;
