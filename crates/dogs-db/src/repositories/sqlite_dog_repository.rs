//! `SQLite` implementation of the `DogRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use dogs_core::{Dog, DogRepository, NewDog, RepositoryError};

use super::row_mappers::{DOG_SELECT_COLUMNS, map_sqlx_error, row_to_dog};

/// `SQLite` implementation of the `DogRepository` trait.
pub struct SqliteDogRepository {
    pool: SqlitePool,
}

impl SqliteDogRepository {
    /// Create a new `SQLite` dog repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DogRepository for SqliteDogRepository {
    async fn insert(&self, dog: &NewDog) -> Result<Dog, RepositoryError> {
        let query = format!(
            "INSERT INTO dogs (name, age, breed) VALUES (?, ?, ?) RETURNING {DOG_SELECT_COLUMNS}"
        );

        let row = sqlx::query(&query)
            .bind(&dog.name)
            .bind(dog.age)
            .bind(&dog.breed)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let created = row_to_dog(&row)?;
        tracing::debug!(target: "dogs.db", id = created.id, "Inserted dog");
        Ok(created)
    }

    async fn get_by_id(&self, id: i64) -> Result<Dog, RepositoryError> {
        let query = format!("SELECT {DOG_SELECT_COLUMNS} FROM dogs WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("dog id={id}")))?;

        row_to_dog(&row)
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM dogs")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(count)
    }
}
