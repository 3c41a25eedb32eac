//! Value objects - Immutable objects defined by their attributes

mod character_class;
mod enemy_kind;
mod ids;
mod image;

pub use character_class::{CharacterClass, UnknownCharacterClass};
pub use enemy_kind::EnemyKind;
pub use ids::*;
pub use image::{GeneratedImage, ImageSubject};
