//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports and domain types. They don't know
//! about concrete implementations.

mod app_core;
mod dog_service;

pub use app_core::AppCore;
pub use dog_service::DogService;
