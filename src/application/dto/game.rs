use serde::{Deserialize, Serialize};

use crate::application::services::InitializedSession;
use crate::domain::entities::{Enemy, GameSession, StoryScene};

#[derive(Debug, Default, Deserialize)]
pub struct InitializeGameQueryDto {
    #[serde(default)]
    pub player_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GameStateResponseDto {
    pub game_state: GameSession,
    pub story_scenes: Vec<StoryScene>,
    pub enemies: Vec<Enemy>,
}

impl From<InitializedSession> for GameStateResponseDto {
    fn from(value: InitializedSession) -> Self {
        Self {
            game_state: value.session,
            story_scenes: value.story_scenes,
            enemies: value.enemies,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StoryScenesResponseDto {
    pub scenes: Vec<StoryScene>,
}

#[derive(Debug, Serialize)]
pub struct EnemiesResponseDto {
    pub enemies: Vec<Enemy>,
}

#[derive(Debug, Serialize)]
pub struct WelcomeResponseDto {
    pub message: String,
}
