//! Game Session Service - session bootstrap and content listings

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::application::error::{GameError, GameResult};
use crate::application::ports::outbound::GameSessionRepositoryPort;
use crate::application::services::ImageService;
use crate::domain::catalog::ContentCatalog;
use crate::domain::entities::{Enemy, GameSession, StoryScene};
use crate::domain::value_objects::GameSessionId;

/// Everything a client needs to render a fresh game
#[derive(Debug, Clone)]
pub struct InitializedSession {
    pub session: GameSession,
    pub story_scenes: Vec<StoryScene>,
    pub enemies: Vec<Enemy>,
}

#[async_trait]
pub trait GameSessionService: Send + Sync {
    /// Create and persist a new session at character creation, with the
    /// illustrated story and enemy roster
    async fn initialize_session(&self, player_id: &str) -> GameResult<InitializedSession>;

    async fn get_session(&self, id: GameSessionId) -> GameResult<GameSession>;

    async fn list_story_scenes(&self) -> Vec<StoryScene>;

    async fn list_enemies(&self) -> Vec<Enemy>;
}

pub struct GameSessionServiceImpl {
    catalog: Arc<ContentCatalog>,
    images: Arc<ImageService>,
    sessions: Arc<dyn GameSessionRepositoryPort>,
}

impl GameSessionServiceImpl {
    pub fn new(
        catalog: Arc<ContentCatalog>,
        images: Arc<ImageService>,
        sessions: Arc<dyn GameSessionRepositoryPort>,
    ) -> Self {
        Self {
            catalog,
            images,
            sessions,
        }
    }
}

#[async_trait]
impl GameSessionService for GameSessionServiceImpl {
    #[instrument(skip(self))]
    async fn initialize_session(&self, player_id: &str) -> GameResult<InitializedSession> {
        let (story_scenes, enemies) =
            tokio::join!(self.list_story_scenes(), self.list_enemies());

        let session = GameSession::new(player_id);
        self.sessions.create(&session).await?;

        info!(game_state_id = %session.id, player_id, "Initialized game session");
        Ok(InitializedSession {
            session,
            story_scenes,
            enemies,
        })
    }

    async fn get_session(&self, id: GameSessionId) -> GameResult<GameSession> {
        self.sessions
            .get(id)
            .await?
            .ok_or_else(|| GameError::not_found("Game state", id))
    }

    async fn list_story_scenes(&self) -> Vec<StoryScene> {
        self.images.illustrate_scenes(self.catalog.scenes()).await
    }

    async fn list_enemies(&self) -> Vec<Enemy> {
        self.images
            .illustrate_enemies(self.catalog.instantiate_enemies())
            .await
    }
}
