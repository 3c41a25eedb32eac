//! Domain layer - Core game rules with no I/O
//!
//! This layer contains:
//! - Entities: Character, Enemy, GameSession, CombatEncounter, StoryScene
//! - Value Objects: typed ids, character classes, enemy kinds, images
//! - Catalog: the compiled-in story and enemy roster

pub mod catalog;
pub mod entities;
pub mod value_objects;
