//! Outbound ports - Interfaces that the application requires from external systems

mod image_generation_port;
mod repository_port;

pub use image_generation_port::{ImageGenerationError, ImageGenerationPort, PlaceholderImagePort};
pub use repository_port::{
    CharacterRepositoryPort, CombatRepositoryPort, GameSessionRepositoryPort, RepositoryError,
    StatusCheckRepositoryPort,
};

#[cfg(test)]
pub use image_generation_port::{MockImageGenerationPort, MockPlaceholderImagePort};
#[cfg(test)]
pub use repository_port::{
    MockCharacterRepositoryPort, MockCombatRepositoryPort, MockGameSessionRepositoryPort,
    MockStatusCheckRepositoryPort,
};
