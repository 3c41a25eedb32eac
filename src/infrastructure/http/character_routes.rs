//! Character API routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use super::error_response;
use crate::application::dto::{
    parse_character_class, parse_character_id, parse_game_state_id,
    CharacterAbilitiesResponseDto, CreateCharacterRequestDto,
};
use crate::application::services::{CharacterService, CreateCharacterRequest};
use crate::domain::entities::Character;
use crate::infrastructure::state::AppState;

/// Create a character, optionally joining a session party
pub async fn create_character(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateCharacterRequestDto>,
) -> Result<(StatusCode, Json<Character>), (StatusCode, String)> {
    let character_class = parse_character_class(&req.character_class).map_err(error_response)?;
    let game_session_id = req
        .game_state_id
        .as_deref()
        .map(parse_game_state_id)
        .transpose()
        .map_err(error_response)?;

    let character = state
        .character_service
        .create_character(CreateCharacterRequest {
            name: req.name,
            character_class,
            game_session_id,
        })
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(character)))
}

pub async fn get_character(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Character>, (StatusCode, String)> {
    let character_id = parse_character_id(&id).map_err(error_response)?;

    let character = state
        .character_service
        .get_character(character_id)
        .await
        .map_err(error_response)?;

    Ok(Json(character))
}

/// Ability descriptions for a class
pub async fn class_abilities(
    State(state): State<Arc<AppState>>,
    Path(class): Path<String>,
) -> Result<Json<CharacterAbilitiesResponseDto>, (StatusCode, String)> {
    let character_class = parse_character_class(&class).map_err(error_response)?;

    Ok(Json(CharacterAbilitiesResponseDto {
        character_class,
        abilities: state.character_service.class_abilities(character_class),
    }))
}
