//! Dog repository trait definition.
//!
//! This port defines the interface for dog persistence.
//! Implementations handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Dog, NewDog};

/// Repository for dog records.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - The store assigns `Dog::id`; callers never supply one
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DogRepository: Send + Sync {
    /// Insert a new dog and return the stored record with its assigned id.
    async fn insert(&self, dog: &NewDog) -> Result<Dog, RepositoryError>;

    /// Get a dog by its identifier.
    async fn get_by_id(&self, id: i64) -> Result<Dog, RepositoryError>;

    /// Count stored dogs.
    async fn count(&self) -> Result<i64, RepositoryError>;
}
