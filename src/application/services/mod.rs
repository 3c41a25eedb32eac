//! Application services - Use case implementations
//!
//! Each service receives its collaborators (catalog, image service,
//! repository ports) at construction and returns domain entities.

pub mod character_service;
pub mod combat_service;
pub mod game_session_service;
pub mod image_service;
pub mod status_service;

pub use character_service::{CharacterService, CharacterServiceImpl, CreateCharacterRequest};
pub use combat_service::{CombatService, CombatServiceImpl};
pub use game_session_service::{GameSessionService, GameSessionServiceImpl, InitializedSession};
pub use image_service::{ImageOutcome, ImageService};
pub use status_service::StatusService;
