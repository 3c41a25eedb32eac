//! Combat API routes

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use super::error_response;
use crate::application::dto::{parse_combat_id, parse_game_state_id, StartCombatQueryDto};
use crate::application::services::CombatService;
use crate::domain::entities::CombatEncounter;
use crate::infrastructure::state::AppState;

/// Start combat between a session party and the demo enemies
pub async fn start_combat(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StartCombatQueryDto>,
) -> Result<(StatusCode, Json<CombatEncounter>), (StatusCode, String)> {
    let game_session_id = parse_game_state_id(&query.game_state_id).map_err(error_response)?;

    let combat = state
        .combat_service
        .start_for_session(game_session_id, query.enemy_count)
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(combat)))
}

pub async fn get_combat(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CombatEncounter>, (StatusCode, String)> {
    let id = parse_combat_id(&id).map_err(error_response)?;

    state
        .combat_service
        .get_combat(id)
        .await
        .map(Json)
        .map_err(error_response)
}

pub async fn end_combat(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CombatEncounter>, (StatusCode, String)> {
    let id = parse_combat_id(&id).map_err(error_response)?;

    state
        .combat_service
        .end_combat(id)
        .await
        .map(Json)
        .map_err(error_response)
}
