//! Dog handlers.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use dogs_core::NewDog;

use crate::dto::{CreateDogRequest, CreatedDogResponse};
use crate::error::HttpError;
use crate::state::AppState;

/// Create a dog.
///
/// Only the body's shape is checked here; any string or integer values are
/// accepted. Responds `201 Created` with `{ "id": <id> }`.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateDogRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedDogResponse>), HttpError> {
    let Json(req) = payload?;
    let created = state.core.dogs().create(NewDog::from(req)).await?;
    tracing::info!(target: "dogs.http", id = created.id, "Created dog");

    Ok((StatusCode::CREATED, Json(CreatedDogResponse::from(&created))))
}
