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
    mothers::{dto::CreateMotherRequest, repo_types::Mother},
    state::AppState,
};

pub fn mother_routes() -> Router<AppState> {
    Router::new()
        .route("/mother", post(create_mother))
        .route("/mother/:id", get(get_mother).delete(delete_mother))
}

#[instrument(skip(state, payload))]
pub async fn create_mother(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateMotherRequest>,
) -> Result<(StatusCode, Json<Mother>), ApiError> {
    let mother = state.store.create_mother(payload).await?;
    info!(mother_id = mother.id, midwife_id = ?mother.midwife_id, "mother created");
    Ok((StatusCode::CREATED, Json(mother)))
}

#[instrument(skip(state))]
pub async fn get_mother(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<Mother>, ApiError> {
    Ok(Json(state.store.mother_by_id(id).await?))
}

#[instrument(skip(state))]
pub async fn delete_mother(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<String>, ApiError> {
    state.store.delete_mother(id).await?;
    info!(mother_id = id, "mother deleted");
    Ok(Json(format!("successfully deleted mother of id {}", id)))
}
