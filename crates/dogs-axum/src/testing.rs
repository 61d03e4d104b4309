//! Test harness for driving a full application instance in-process.
//!
//! A suite creates one [`TestApp`] against the dedicated test configuration
//! (`.int.env` next to this crate's manifest, never the production `.env`),
//! clears every table after each case, and closes the app at the end:
//!
//! ```ignore
//! let app = create_test_app(&[FeatureModule::Dogs]).await?;
//! let response = app.post_json("/dogs", &json!({ "name": "Dingo", "age": 3, "breed": "Beagle" })).await;
//! app.clear_all_tables().await?;
//! app.close().await;
//! ```

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, header};
use axum::response::Response;
use dogs_core::{AppConfig, AppCore, ConfigError, Repos, RepositoryError, TableMaintenance};
use dogs_db::{SqlitePool, setup_database};
use futures_util::future::try_join_all;
use thiserror::Error;
use tower::ServiceExt;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::routes::{FeatureModule, create_router};

/// Env file holding the test configuration.
pub const TEST_ENV_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/.int.env");

/// Failure while building a [`TestApp`]. Aborts the calling test.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Failed to load test configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Database(#[from] anyhow::Error),
}

/// A running application instance plus its store connection.
pub struct TestApp {
    router: Router,
    core: Arc<AppCore>,
    repos: Repos,
    pool: SqlitePool,
}

impl TestApp {
    /// The application router. Cheap to clone.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Core services, for asserting on state without going through HTTP.
    pub fn core(&self) -> &AppCore {
        &self.core
    }

    /// Repository handles bound to the test database.
    pub const fn repos(&self) -> &Repos {
        &self.repos
    }

    /// The active store connection.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Send a request through the router.
    pub async fn request(&self, request: Request<Body>) -> Response {
        match self.router.clone().oneshot(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        }
    }

    /// `POST` a JSON body to `uri`.
    pub async fn post_json(&self, uri: &str, body: &serde_json::Value) -> Response {
        self.post_raw(uri, "application/json", body.to_string()).await
    }

    /// `POST` an arbitrary body with the given content type.
    pub async fn post_raw(&self, uri: &str, content_type: &str, body: String) -> Response {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body));

        match request {
            Ok(request) => self.request(request).await,
            Err(e) => panic!("invalid test request for {uri}: {e}"),
        }
    }

    /// Delete all rows from every known table.
    pub async fn clear_all_tables(&self) -> Result<(), RepositoryError> {
        clear_all_tables(self.repos.tables.as_ref()).await
    }

    /// Close the store connection and drop the application.
    pub async fn close(self) {
        self.pool.close().await;
    }
}

/// Build an application wired to the test configuration and database,
/// mounting only `modules`.
pub async fn create_test_app(modules: &[FeatureModule]) -> Result<TestApp, SetupError> {
    let config = AppConfig::from_env_file(Path::new(TEST_ENV_FILE))?;
    create_test_app_with_config(&config, modules).await
}

/// Like [`create_test_app`], with an explicit configuration.
pub async fn create_test_app_with_config(
    config: &AppConfig,
    modules: &[FeatureModule],
) -> Result<TestApp, SetupError> {
    let pool = setup_database(&config.database).await?;
    let ctx = AxumContext::from_pool(pool.clone());
    let core = Arc::clone(&ctx.core);
    let repos = ctx.repos.clone();

    let router = create_router(ctx, modules, &CorsConfig::AllowAll);

    Ok(TestApp {
        router,
        core,
        repos,
        pool,
    })
}

/// Delete all rows from every table `tables` knows about, concurrently.
///
/// Identifier sequences are not reset.
pub async fn clear_all_tables(tables: &dyn TableMaintenance) -> Result<(), RepositoryError> {
    let names = tables.tables();
    try_join_all(names.iter().map(|name| tables.delete_all(name))).await?;
    Ok(())
}
