//! Game session entity - One player's run through the story

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Character;
use crate::domain::value_objects::GameSessionId;

/// Scene every new session starts in
pub const CHARACTER_CREATION_SCENE: &str = "character_creation";

/// Session-level state exposed to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    pub id: GameSessionId,
    pub player_id: String,
    pub current_scene: String,
    /// Insertion order is display and turn-eligibility order
    pub party: Vec<Character>,
    pub current_story_progress: u32,
    pub inventory: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GameSession {
    pub fn new(player_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: GameSessionId::new(),
            player_id: player_id.into(),
            current_scene: CHARACTER_CREATION_SCENE.to_string(),
            party: Vec::new(),
            current_story_progress: 0,
            inventory: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn add_to_party(&mut self, character: Character) {
        self.party.push(character);
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

// Inventory changes come from scene choices, which are not resolved yet
#[allow(dead_code)]
impl GameSession {
    /// Add an item; the inventory holds each item at most once
    pub fn add_item(&mut self, item: impl Into<String>) -> bool {
        let item = item.into();
        if self.inventory.contains(&item) {
            return false;
        }
        self.inventory.push(item);
        self.touch();
        true
    }

    pub fn remove_item(&mut self, item: &str) -> bool {
        if let Some(pos) = self.inventory.iter().position(|i| i == item) {
            self.inventory.remove(pos);
            self.touch();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::CharacterClass;

    #[test]
    fn test_new_session_starts_at_character_creation() {
        let session = GameSession::new("demo_player");

        assert_eq!(session.player_id, "demo_player");
        assert_eq!(session.current_scene, "character_creation");
        assert!(session.party.is_empty());
        assert!(session.inventory.is_empty());
        assert_eq!(session.current_story_progress, 0);
    }

    #[test]
    fn test_party_keeps_insertion_order() {
        let mut session = GameSession::new("demo_player");
        session.add_to_party(Character::new("Murphy", CharacterClass::Detective));
        session.add_to_party(Character::new("Marcus", CharacterClass::Healer));

        let names: Vec<_> = session.party.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Murphy", "Marcus"]);
        assert!(session.updated_at >= session.created_at);
    }

    #[test]
    fn test_inventory_has_no_duplicates() {
        let mut session = GameSession::new("demo_player");

        assert!(session.add_item("silver_key"));
        assert!(!session.add_item("silver_key"));
        assert_eq!(session.inventory.len(), 1);

        assert!(session.remove_item("silver_key"));
        assert!(!session.remove_item("silver_key"));
    }
}
