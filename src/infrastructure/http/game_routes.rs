//! Game session and content listing routes

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use super::error_response;
use crate::application::dto::{
    parse_game_state_id, EnemiesResponseDto, GameStateResponseDto, InitializeGameQueryDto,
    StoryScenesResponseDto, WelcomeResponseDto,
};
use crate::application::services::GameSessionService;
use crate::domain::entities::GameSession;
use crate::infrastructure::state::AppState;

pub async fn welcome() -> Json<WelcomeResponseDto> {
    Json(WelcomeResponseDto {
        message: "Welcome to Eldritch Depths: The Whispering Shadows".to_string(),
    })
}

/// Start a new session with illustrated scenes and enemies
pub async fn initialize_game(
    State(state): State<Arc<AppState>>,
    Query(query): Query<InitializeGameQueryDto>,
) -> Result<Json<GameStateResponseDto>, (StatusCode, String)> {
    let player_id = query
        .player_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| state.config.default_player_id.clone());

    let initialized = state
        .game_session_service
        .initialize_session(&player_id)
        .await
        .map_err(error_response)?;

    Ok(Json(GameStateResponseDto::from(initialized)))
}

pub async fn get_game_state(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<GameSession>, (StatusCode, String)> {
    let id = parse_game_state_id(&id).map_err(error_response)?;

    state
        .game_session_service
        .get_session(id)
        .await
        .map(Json)
        .map_err(error_response)
}

pub async fn list_story_scenes(State(state): State<Arc<AppState>>) -> Json<StoryScenesResponseDto> {
    Json(StoryScenesResponseDto {
        scenes: state.game_session_service.list_story_scenes().await,
    })
}

pub async fn list_enemies(State(state): State<Arc<AppState>>) -> Json<EnemiesResponseDto> {
    Json(EnemiesResponseDto {
        enemies: state.game_session_service.list_enemies().await,
    })
}
