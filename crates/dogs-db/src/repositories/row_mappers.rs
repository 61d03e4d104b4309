//! Row mapping helpers for `SQLite` queries.

use dogs_core::{Dog, RepositoryError};
use sqlx::Row;
use sqlx::error::ErrorKind;

/// Shared SELECT column list for dog queries.
pub const DOG_SELECT_COLUMNS: &str = "id, name, age, breed";

/// Parse a database row into a Dog.
pub fn row_to_dog(row: &sqlx::sqlite::SqliteRow) -> Result<Dog, RepositoryError> {
    Ok(Dog {
        id: row
            .try_get::<i64, _>("id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        name: row
            .try_get("name")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        age: row
            .try_get::<i32, _>("age")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        breed: row
            .try_get("breed")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
    })
}

/// Map `SQLx` errors to `RepositoryError`.
///
/// Constraint failures reported by the driver become `Constraint`; anything
/// else (pool timeouts, I/O, closed pool) is a `Storage` failure.
pub fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &e {
        match db_err.kind() {
            ErrorKind::UniqueViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation
            | ErrorKind::ForeignKeyViolation => {
                return RepositoryError::Constraint(db_err.message().to_string());
            }
            _ => {}
        }
    }
    RepositoryError::Storage(e.to_string())
}
