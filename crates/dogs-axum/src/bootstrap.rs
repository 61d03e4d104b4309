//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. All concrete implementations are instantiated here.

use std::sync::Arc;

use anyhow::Result;
use dogs_core::{AppConfig, AppCore, DatabaseConfig, HttpConfig, Repos};
use dogs_db::{CoreFactory, SqlitePool, setup_database};

use crate::routes::FeatureModule;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listener address.
    pub http: HttpConfig,
    /// Store connection settings.
    pub database: DatabaseConfig,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Build server config from loaded application config.
    pub fn from_app_config(config: AppConfig) -> Self {
        Self {
            http: config.http,
            database: config.database,
            cors: CorsConfig::default(),
        }
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Application context for the Axum adapter.
///
/// Holds all initialized services for the web server.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<AppCore>,
    /// Repository trait objects, shared with `core`.
    pub repos: Repos,
    /// The store connection pool, kept for shutdown.
    pub pool: SqlitePool,
}

impl AxumContext {
    /// Wire services around an already-migrated pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        let repos = CoreFactory::build_repos(pool.clone());
        let core = Arc::new(AppCore::new(repos.clone()));
        Self { core, repos, pool }
    }
}

/// Bootstrap the Axum server with all services.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        target: "dogs.bootstrap",
        database_url = %config.database.url,
        max_connections = config.database.max_connections,
        "Axum bootstrap"
    );

    // Create database pool with migrations applied
    let pool = setup_database(&config.database).await?;

    Ok(AxumContext::from_pool(pool))
}

/// Start the web server and serve until Ctrl-C.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;
    let pool = ctx.pool.clone();

    let app = crate::routes::create_router(ctx, FeatureModule::ALL, &config.cors);

    let addr = config.http.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("dogs server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down, closing database pool");
    pool.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
