//! Route definitions and router construction.
//!
//! Routes are grouped into [`FeatureModule`]s so that the production server
//! and the test harness can mount the same handlers, the latter choosing
//! only the modules a test suite exercises.

use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// A mountable group of routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureModule {
    /// `POST /dogs`
    Dogs,
}

impl FeatureModule {
    /// Every feature module, as mounted by the production server.
    pub const ALL: &'static [Self] = &[Self::Dogs];

    /// Routes contributed by this module, without state applied.
    fn routes(self) -> Router<AppState> {
        match self {
            Self::Dogs => Router::new().route("/dogs", post(handlers::dogs::create)),
        }
    }
}

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Create the Axum router with `/health` plus the given feature modules.
pub fn create_router(
    ctx: AxumContext,
    modules: &[FeatureModule],
    cors_config: &CorsConfig,
) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    let features = modules
        .iter()
        .fold(Router::new(), |router, module| router.merge(module.routes()));

    Router::new()
        .route("/health", get(health_check))
        .merge(features.with_state(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn test_router(modules: &[FeatureModule]) -> Router {
        let db = dogs_db::TestDb::new().await.unwrap();
        let ctx = AxumContext::from_pool(db.pool().clone());
        create_router(ctx, modules, &CorsConfig::AllowAll)
    }

    #[tokio::test]
    async fn test_health_is_always_mounted() {
        let app = test_router(&[]).await;

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_dogs_route_absent_without_module() {
        let app = test_router(&[]).await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/dogs")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name":"Dingo","age":3,"breed":"Beagle"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_on_dogs_is_method_not_allowed() {
        let app = test_router(FeatureModule::ALL).await;

        let response = app
            .oneshot(Request::builder().uri("/dogs").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
