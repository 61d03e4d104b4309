//! Dog domain types.

use serde::{Deserialize, Serialize};

/// A dog as stored by the persistence layer.
///
/// The `id` is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub breed: String,
}

/// Data for creating a new dog.
///
/// Carries no identifier: the store assigns one on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDog {
    pub name: String,
    pub age: i32,
    pub breed: String,
}

impl NewDog {
    /// Build a creation request from its three fields.
    pub fn new(name: impl Into<String>, age: i32, breed: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            breed: breed.into(),
        }
    }
}
