//! Dog service - orchestrates dog creation and lookup.

use crate::domain::{Dog, NewDog};
use crate::ports::{CoreError, DogRepository};
use std::sync::Arc;

/// Service for dog operations.
pub struct DogService {
    repo: Arc<dyn DogRepository>,
}

impl DogService {
    /// Create a new dog service.
    pub fn new(repo: Arc<dyn DogRepository>) -> Self {
        Self { repo }
    }

    /// Persist a new dog and return the stored record.
    ///
    /// `dog` has already been shape-checked by the adapter; no further
    /// rules are applied here.
    pub async fn create(&self, dog: NewDog) -> Result<Dog, CoreError> {
        let created = self.repo.insert(&dog).await?;
        tracing::debug!(target: "dogs.service", id = created.id, "dog created");
        Ok(created)
    }

    /// Get a stored dog by id.
    pub async fn get(&self, id: i64) -> Result<Dog, CoreError> {
        self.repo.get_by_id(id).await.map_err(CoreError::from)
    }
}
