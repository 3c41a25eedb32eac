//! Errors surfaced by application services

use crate::application::ports::outbound::RepositoryError;
use crate::domain::value_objects::UnknownCharacterClass;

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Input rejected before any record was created
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl GameError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

impl From<UnknownCharacterClass> for GameError {
    fn from(err: UnknownCharacterClass) -> Self {
        Self::Validation(err.to_string())
    }
}

pub type GameResult<T> = Result<T, GameError>;
