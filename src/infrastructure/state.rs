//! Shared application state

use std::sync::Arc;

use anyhow::Result;

use crate::application::ports::outbound::ImageGenerationPort;
use crate::application::services::{
    CharacterServiceImpl, CombatServiceImpl, GameSessionServiceImpl, ImageService, StatusService,
};
use crate::domain::catalog::ContentCatalog;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::imagen::{ImagenClient, UnconfiguredImageGenerator};
use crate::infrastructure::persistence::SqliteRepository;
use crate::infrastructure::placeholder::PixelArtPlaceholder;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub image_service: Arc<ImageService>,
    // Application services
    pub character_service: CharacterServiceImpl,
    pub combat_service: CombatServiceImpl,
    pub game_session_service: GameSessionServiceImpl,
    pub status_service: StatusService,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self> {
        let repository = SqliteRepository::connect(&config.database_url).await?;

        let generator: Arc<dyn ImageGenerationPort> = match &config.gemini_api_key {
            Some(key) => {
                tracing::info!("Image generation enabled with model {}", config.imagen_model);
                Arc::new(ImagenClient::new(
                    &config.imagen_base_url,
                    &config.imagen_model,
                    key,
                ))
            }
            None => {
                tracing::warn!("GEMINI_API_KEY not set, all images will be placeholders");
                Arc::new(UnconfiguredImageGenerator)
            }
        };

        Ok(Self::with_components(config, repository, generator))
    }

    /// Wire services around an already opened repository and image generator
    pub fn with_components(
        config: AppConfig,
        repository: SqliteRepository,
        generator: Arc<dyn ImageGenerationPort>,
    ) -> Self {
        let catalog = Arc::new(ContentCatalog::arkham_demo());
        let image_service = Arc::new(ImageService::new(
            generator,
            Arc::new(PixelArtPlaceholder),
            config.image_timeout,
        ));

        let sessions = Arc::new(repository.sessions());

        let character_service = CharacterServiceImpl::new(
            image_service.clone(),
            Arc::new(repository.characters()),
            sessions.clone(),
        );
        let combat_service = CombatServiceImpl::new(
            catalog.clone(),
            image_service.clone(),
            sessions.clone(),
            Arc::new(repository.combats()),
            config.combat_enemy_count,
        );
        let game_session_service =
            GameSessionServiceImpl::new(catalog, image_service.clone(), sessions);
        let status_service = StatusService::new(Arc::new(repository.status_checks()));

        Self {
            config,
            image_service,
            character_service,
            combat_service,
            game_session_service,
            status_service,
        }
    }
}
