use serde::Deserialize;

use crate::application::error::GameError;
use crate::domain::value_objects::CombatId;

/// Query string for `POST /api/combat/start`
#[derive(Debug, Deserialize)]
pub struct StartCombatQueryDto {
    pub game_state_id: String,
    #[serde(default)]
    pub enemy_count: Option<usize>,
}

pub fn parse_combat_id(raw: &str) -> Result<CombatId, GameError> {
    raw.parse()
        .map_err(|_| GameError::Validation(format!("Invalid combat ID: {raw}")))
}
