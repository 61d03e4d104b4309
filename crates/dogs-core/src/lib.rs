//! Core domain types, ports and services for the dogs service.
//!
//! This crate has no knowledge of HTTP or SQL. Adapters (`dogs-db`,
//! `dogs-axum`) implement the ports and drive the services.

#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use config::{AppConfig, ConfigError, DatabaseConfig, HttpConfig};
pub use domain::{Dog, NewDog};
pub use ports::{CoreError, DogRepository, Repos, RepositoryError, TableMaintenance};
pub use services::{AppCore, DogService};
