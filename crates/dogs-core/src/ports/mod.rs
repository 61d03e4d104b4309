//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Traits are minimal and CRUD-focused for repositories

pub mod dog_repository;
pub mod table_maintenance;

use std::sync::Arc;
use thiserror::Error;

pub use dog_repository::DogRepository;
pub use table_maintenance::TableMaintenance;

/// Container for all repository trait objects.
///
/// Lets adapters wire repositories without coupling to concrete
/// implementations. Lives in `dogs-core` so that `AppCore` can accept it
/// without depending on `dogs-db`.
#[derive(Clone)]
pub struct Repos {
    /// Dog repository for persisting dog records.
    pub dogs: Arc<dyn DogRepository>,
    /// Maintenance operations over every known table.
    pub tables: Arc<dyn TableMaintenance>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(dogs: Arc<dyn DogRepository>, tables: Arc<dyn TableMaintenance>) -> Self {
        Self { dogs, tables }
    }
}

/// Domain-specific errors for repository operations.
///
/// Abstracts away storage implementation details (e.g., sqlx errors) so that
/// services and adapters never see driver types.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (unreachable database, I/O, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// The store rejected the write (NOT NULL, CHECK, unique constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// The table is not one of the known entity tables.
    #[error("Unknown table: {0}")]
    UnknownTable(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (HTTP status codes, exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
