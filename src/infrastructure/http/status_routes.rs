use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use super::error_response;
use crate::application::dto::StatusCheckCreateDto;
use crate::domain::entities::StatusCheck;
use crate::infrastructure::state::AppState;

pub async fn create_status_check(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StatusCheckCreateDto>,
) -> Result<Json<StatusCheck>, (StatusCode, String)> {
    state
        .status_service
        .record(&req.client_name)
        .await
        .map(Json)
        .map_err(error_response)
}

pub async fn list_status_checks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StatusCheck>>, (StatusCode, String)> {
    state
        .status_service
        .list()
        .await
        .map(Json)
        .map_err(error_response)
}
