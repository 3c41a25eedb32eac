//! Repository ports - Interfaces for data persistence
//!
//! These traits define the contracts that infrastructure repositories must implement.
//! Application services depend on these traits, not concrete implementations.

use async_trait::async_trait;

use crate::domain::entities::{Character, CombatEncounter, GameSession, StatusCheck};
use crate::domain::value_objects::{CharacterId, CombatId, GameSessionId};

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// =============================================================================
// Game Session Repository Port
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GameSessionRepositoryPort: Send + Sync {
    async fn create(&self, session: &GameSession) -> Result<(), RepositoryError>;

    async fn get(&self, id: GameSessionId) -> Result<Option<GameSession>, RepositoryError>;

    /// Store a new character and append it to the session party as one
    /// atomic write. Returns `None`, writing nothing, when the session is missing.
    async fn enlist_character(
        &self,
        id: GameSessionId,
        character: &Character,
    ) -> Result<Option<GameSession>, RepositoryError>;
}

// =============================================================================
// Character Repository Port
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepositoryPort: Send + Sync {
    async fn create(&self, character: &Character) -> Result<(), RepositoryError>;

    async fn get(&self, id: CharacterId) -> Result<Option<Character>, RepositoryError>;
}

// =============================================================================
// Combat Repository Port
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CombatRepositoryPort: Send + Sync {
    async fn create(&self, combat: &CombatEncounter) -> Result<(), RepositoryError>;

    async fn get(&self, id: CombatId) -> Result<Option<CombatEncounter>, RepositoryError>;

    async fn update(&self, combat: &CombatEncounter) -> Result<(), RepositoryError>;
}

// =============================================================================
// Status Check Repository Port
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusCheckRepositoryPort: Send + Sync {
    async fn create(&self, check: &StatusCheck) -> Result<(), RepositoryError>;

    /// Most recent checks first, at most `limit`
    async fn list(&self, limit: u32) -> Result<Vec<StatusCheck>, RepositoryError>;
}
