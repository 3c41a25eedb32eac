use serde::{Deserialize, Serialize};

use crate::application::error::GameError;
use crate::domain::value_objects::{CharacterClass, CharacterId, GameSessionId};

#[derive(Debug, Deserialize)]
pub struct CreateCharacterRequestDto {
    pub name: String,
    /// Kept as a string so an unknown class is a validation error, not a decode error
    pub character_class: String,
    #[serde(default)]
    pub game_state_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CharacterAbilitiesResponseDto {
    pub character_class: CharacterClass,
    pub abilities: Vec<String>,
}

pub fn parse_character_class(raw: &str) -> Result<CharacterClass, GameError> {
    Ok(raw.parse::<CharacterClass>()?)
}

pub fn parse_game_state_id(raw: &str) -> Result<GameSessionId, GameError> {
    raw.parse()
        .map_err(|_| GameError::Validation(format!("Invalid game state ID: {raw}")))
}

pub fn parse_character_id(raw: &str) -> Result<CharacterId, GameError> {
    raw.parse()
        .map_err(|_| GameError::Validation(format!("Invalid character ID: {raw}")))
}
