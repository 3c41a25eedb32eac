//! Character Service - the character factory
//!
//! Builds investigators from their class template, asks the image service for
//! a portrait and persists the result. A portrait failure never blocks
//! creation.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::application::error::{GameError, GameResult};
use crate::application::ports::outbound::{CharacterRepositoryPort, GameSessionRepositoryPort};
use crate::application::services::ImageService;
use crate::domain::entities::Character;
use crate::domain::value_objects::{CharacterClass, CharacterId, GameSessionId};

/// Request to create a new character
#[derive(Debug, Clone)]
pub struct CreateCharacterRequest {
    pub name: String,
    pub character_class: CharacterClass,
    /// Session whose party the character joins, if any
    pub game_session_id: Option<GameSessionId>,
}

#[async_trait]
pub trait CharacterService: Send + Sync {
    /// Build a character with a portrait, without persisting it
    async fn build_character(&self, name: &str, character_class: CharacterClass) -> Character;

    /// Create, persist and optionally enlist a character in a session party
    async fn create_character(&self, request: CreateCharacterRequest) -> GameResult<Character>;

    async fn get_character(&self, id: CharacterId) -> GameResult<Character>;

    /// Human-readable ability descriptions for a class
    fn class_abilities(&self, character_class: CharacterClass) -> Vec<String>;
}

pub struct CharacterServiceImpl {
    images: Arc<ImageService>,
    characters: Arc<dyn CharacterRepositoryPort>,
    sessions: Arc<dyn GameSessionRepositoryPort>,
}

impl CharacterServiceImpl {
    pub fn new(
        images: Arc<ImageService>,
        characters: Arc<dyn CharacterRepositoryPort>,
        sessions: Arc<dyn GameSessionRepositoryPort>,
    ) -> Self {
        Self {
            images,
            characters,
            sessions,
        }
    }
}

#[async_trait]
impl CharacterService for CharacterServiceImpl {
    #[instrument(skip(self))]
    async fn build_character(&self, name: &str, character_class: CharacterClass) -> Character {
        let portrait = self.images.generate_portrait(character_class, name).await;
        Character::new(name, character_class).with_sprite(portrait.into_image())
    }

    #[instrument(skip(self), fields(name = %request.name, class = %request.character_class))]
    async fn create_character(&self, request: CreateCharacterRequest) -> GameResult<Character> {
        // Unknown sessions fail before a portrait is requested
        if let Some(id) = request.game_session_id {
            if self.sessions.get(id).await?.is_none() {
                return Err(GameError::not_found("Game state", id));
            }
        }

        let character = self
            .build_character(&request.name, request.character_class)
            .await;

        match request.game_session_id {
            Some(id) => {
                let session = self
                    .sessions
                    .enlist_character(id, &character)
                    .await?
                    .ok_or_else(|| GameError::not_found("Game state", id))?;
                info!(
                    character_id = %character.id,
                    game_state_id = %session.id,
                    party_size = session.party.len(),
                    "Character joined party"
                );
            }
            None => {
                self.characters.create(&character).await?;
                info!(character_id = %character.id, "Created character");
            }
        }

        Ok(character)
    }

    async fn get_character(&self, id: CharacterId) -> GameResult<Character> {
        self.characters
            .get(id)
            .await?
            .ok_or_else(|| GameError::not_found("Character", id))
    }

    fn class_abilities(&self, character_class: CharacterClass) -> Vec<String> {
        character_class
            .template()
            .ability_descriptions
            .iter()
            .map(|d| d.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use mockall::predicate::*;

    use super::*;
    use crate::application::ports::outbound::{
        ImageGenerationError, MockCharacterRepositoryPort, MockGameSessionRepositoryPort,
        MockImageGenerationPort, MockPlaceholderImagePort, RepositoryError,
    };
    use crate::domain::entities::GameSession;
    use crate::domain::value_objects::GeneratedImage;

    fn failing_images() -> Arc<ImageService> {
        let mut generator = MockImageGenerationPort::new();
        generator
            .expect_generate()
            .returning(|_| Err(ImageGenerationError::Http("connection refused".to_string())));
        let mut placeholders = MockPlaceholderImagePort::new();
        placeholders
            .expect_render()
            .returning(|_| GeneratedImage::new("image/svg+xml", "cGxhY2Vob2xkZXI="));
        Arc::new(ImageService::new(
            Arc::new(generator),
            Arc::new(placeholders),
            Duration::from_secs(1),
        ))
    }

    #[tokio::test]
    async fn test_every_class_matches_its_template() {
        let service = CharacterServiceImpl::new(
            failing_images(),
            Arc::new(MockCharacterRepositoryPort::new()),
            Arc::new(MockGameSessionRepositoryPort::new()),
        );

        let cases = [
            (CharacterClass::Detective, "Lucky Shot", 90),
            (CharacterClass::Witch, "Blood Magic", 70),
            (CharacterClass::Scientist, "Analyze", 80),
            (CharacterClass::Healer, "Dagon's Embrace", 85),
        ];
        for (class, ability, max_hp) in cases {
            let character = service.build_character("Tester", class).await;
            assert_eq!(character.character_class, class);
            assert_eq!(character.max_hp, max_hp);
            assert_eq!(character.hp, max_hp);
            assert!(character.abilities.iter().any(|a| a == ability));
            assert_eq!(
                character.abilities,
                class
                    .template()
                    .abilities
                    .iter()
                    .map(|a| a.to_string())
                    .collect::<Vec<_>>()
            );
            // Image failure degrades to a placeholder, never to an error
            assert!(character.sprite_image.is_some());
        }
    }

    #[tokio::test]
    async fn test_create_standalone_character_persists_it() {
        let mut characters = MockCharacterRepositoryPort::new();
        characters
            .expect_create()
            .withf(|c: &Character| c.name == "Murphy")
            .times(1)
            .returning(|_| Ok(()));

        let service = CharacterServiceImpl::new(
            failing_images(),
            Arc::new(characters),
            Arc::new(MockGameSessionRepositoryPort::new()),
        );

        let character = service
            .create_character(CreateCharacterRequest {
                name: "Murphy".to_string(),
                character_class: CharacterClass::Detective,
                game_session_id: None,
            })
            .await
            .unwrap();

        assert_eq!(character.max_hp, 90);
    }

    #[tokio::test]
    async fn test_create_in_session_joins_party() {
        let session = GameSession::new("demo_player");
        let session_id = session.id;

        let mut sessions = MockGameSessionRepositoryPort::new();
        sessions
            .expect_get()
            .with(eq(session_id))
            .returning(move |_| Ok(Some(session.clone())));
        sessions
            .expect_enlist_character()
            .withf(move |id: &GameSessionId, c: &Character| {
                *id == session_id && c.name == "Marcus"
            })
            .times(1)
            .returning(|id: GameSessionId, c: &Character| {
                let mut session = GameSession::new("demo_player");
                session.id = id;
                session.add_to_party(c.clone());
                Ok(Some(session))
            });

        // The session write stores the character too
        let mut characters = MockCharacterRepositoryPort::new();
        characters.expect_create().never();

        let service =
            CharacterServiceImpl::new(failing_images(), Arc::new(characters), Arc::new(sessions));

        let character = service
            .create_character(CreateCharacterRequest {
                name: "Marcus".to_string(),
                character_class: CharacterClass::Healer,
                game_session_id: Some(session_id),
            })
            .await
            .unwrap();

        assert_eq!(character.character_class, CharacterClass::Healer);
    }

    #[tokio::test]
    async fn test_unknown_session_creates_nothing() {
        let mut sessions = MockGameSessionRepositoryPort::new();
        sessions.expect_get().returning(|_| Ok(None));
        sessions.expect_enlist_character().never();

        let mut characters = MockCharacterRepositoryPort::new();
        characters.expect_create().never();

        let service =
            CharacterServiceImpl::new(failing_images(), Arc::new(characters), Arc::new(sessions));

        let result = service
            .create_character(CreateCharacterRequest {
                name: "Ghost".to_string(),
                character_class: CharacterClass::Witch,
                game_session_id: Some(GameSessionId::new()),
            })
            .await;

        assert!(matches!(result, Err(GameError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_repository_failure_is_propagated() {
        let mut characters = MockCharacterRepositoryPort::new();
        characters
            .expect_create()
            .returning(|_| Err(RepositoryError::Database("disk full".to_string())));

        let service = CharacterServiceImpl::new(
            failing_images(),
            Arc::new(characters),
            Arc::new(MockGameSessionRepositoryPort::new()),
        );

        let result = service
            .create_character(CreateCharacterRequest {
                name: "Eliza".to_string(),
                character_class: CharacterClass::Scientist,
                game_session_id: None,
            })
            .await;

        assert!(matches!(result, Err(GameError::Repository(_))));
    }

    #[tokio::test]
    async fn test_failed_party_join_leaves_no_character() {
        let session = GameSession::new("demo_player");
        let session_id = session.id;

        let mut sessions = MockGameSessionRepositoryPort::new();
        sessions
            .expect_get()
            .returning(move |_| Ok(Some(session.clone())));
        sessions
            .expect_enlist_character()
            .returning(|_, _| Err(RepositoryError::Database("database is locked".to_string())));
        let mut characters = MockCharacterRepositoryPort::new();
        characters.expect_create().never();

        let service =
            CharacterServiceImpl::new(failing_images(), Arc::new(characters), Arc::new(sessions));

        let result = service
            .create_character(CreateCharacterRequest {
                name: "Morgana".to_string(),
                character_class: CharacterClass::Witch,
                game_session_id: Some(session_id),
            })
            .await;

        assert!(matches!(result, Err(GameError::Repository(_))));
    }

    #[tokio::test]
    async fn test_get_missing_character() {
        let mut characters = MockCharacterRepositoryPort::new();
        characters.expect_get().returning(|_| Ok(None));

        let service = CharacterServiceImpl::new(
            failing_images(),
            Arc::new(characters),
            Arc::new(MockGameSessionRepositoryPort::new()),
        );

        let result = service.get_character(CharacterId::new()).await;
        assert!(matches!(result, Err(GameError::NotFound { entity: "Character", .. })));
    }

    #[test]
    fn test_class_abilities() {
        let service = CharacterServiceImpl::new(
            failing_images(),
            Arc::new(MockCharacterRepositoryPort::new()),
            Arc::new(MockGameSessionRepositoryPort::new()),
        );

        let abilities = service.class_abilities(CharacterClass::Detective);
        assert_eq!(abilities.len(), 3);
        assert_eq!(abilities[0], "Lucky Shot - Random damage 1-999");
    }
}
