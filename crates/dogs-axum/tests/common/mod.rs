//! Shared helpers for dogs-axum integration tests.

use axum::response::Response;
use http_body_util::BodyExt;

/// Collect a response body as JSON.
pub async fn json_body(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
