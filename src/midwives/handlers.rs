use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    error::ApiError,
    extractors::{JsonBody, RecordId},
    midwives::{dto::CreateMidwifeRequest, repo_types::Midwife},
    mothers::Mother,
    state::AppState,
};

// No list-all route: midwife accounts are not enumerable over HTTP.
pub fn midwife_routes() -> Router<AppState> {
    Router::new()
        .route("/midwife", post(create_midwife))
        .route("/midwife/:id", get(get_midwife).delete(delete_midwife))
        .route("/midwife/:id/mothers", get(get_midwife_mothers))
}

#[instrument(skip(state, payload))]
pub async fn create_midwife(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateMidwifeRequest>,
) -> Result<(StatusCode, Json<Midwife>), ApiError> {
    let midwife = state.store.create_midwife(payload).await?;
    info!(midwife_id = midwife.id, "midwife created");
    Ok((StatusCode::CREATED, Json(midwife)))
}

#[instrument(skip(state))]
pub async fn get_midwife(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<Midwife>, ApiError> {
    Ok(Json(state.store.midwife_by_id(id).await?))
}

#[instrument(skip(state))]
pub async fn delete_midwife(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<String>, ApiError> {
    state.store.delete_midwife(id).await?;
    info!(midwife_id = id, "midwife deleted");
    Ok(Json(format!("successfully deleted midwife of id {}", id)))
}

#[instrument(skip(state))]
pub async fn get_midwife_mothers(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<Vec<Mother>>, ApiError> {
    Ok(Json(state.store.mothers_for_midwife(id).await?))
}
