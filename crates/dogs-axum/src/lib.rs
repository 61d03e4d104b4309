//! Axum HTTP adapter for the dogs service.
//!
//! Exposes `POST /dogs` and `GET /health`, wires `dogs-core` services to the
//! `dogs-db` store in [`bootstrap`], and ships the in-process test harness in
//! [`testing`].

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings for test infrastructure
#[cfg(test)]
use tempfile as _;

// Dependencies used by the binary only
use clap as _;
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod testing;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::{FeatureModule, create_router};
pub use state::AppState;
