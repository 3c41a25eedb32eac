//! Domain entities - Core business objects with identity

mod character;
mod combat;
mod enemy;
mod game_session;
mod status_check;
mod story_scene;

pub use character::Character;
pub use combat::CombatEncounter;
pub use enemy::{Enemy, EnemyTemplate};
pub use game_session::GameSession;
pub use status_check::StatusCheck;
pub use story_scene::{SceneChoice, StoryScene};
