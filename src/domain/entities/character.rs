//! Character entity - A player investigator in the party

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{CharacterClass, CharacterId, GeneratedImage};

/// Experience needed for each level gained
pub const XP_PER_LEVEL: u32 = 100;

/// A player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub character_class: CharacterClass,
    pub level: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub sanity: u32,
    pub max_sanity: u32,
    pub experience: u32,
    pub abilities: Vec<String>,
    /// Narrative flavor unique to the class
    pub dark_secret: String,
    pub sprite_image: Option<GeneratedImage>,
    pub created_at: DateTime<Utc>,
}

impl Character {
    /// Build a fresh level-1 character from its class template
    pub fn new(name: impl Into<String>, character_class: CharacterClass) -> Self {
        let template = character_class.template();
        Self {
            id: CharacterId::new(),
            name: name.into(),
            character_class,
            level: 1,
            hp: template.max_hp,
            max_hp: template.max_hp,
            sanity: template.max_sanity,
            max_sanity: template.max_sanity,
            experience: 0,
            abilities: template.abilities.iter().map(|a| a.to_string()).collect(),
            dark_secret: template.dark_secret.to_string(),
            sprite_image: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_sprite(mut self, image: GeneratedImage) -> Self {
        self.sprite_image = Some(image);
        self
    }
}

// Stat mutators for combat resolution, which no service performs yet
#[allow(dead_code)]
impl Character {
    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    pub fn heal(&mut self, amount: u32) {
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
    }

    pub fn lose_sanity(&mut self, amount: u32) {
        self.sanity = self.sanity.saturating_sub(amount);
    }

    pub fn restore_sanity(&mut self, amount: u32) {
        self.sanity = self.sanity.saturating_add(amount).min(self.max_sanity);
    }

    /// Add experience; the level always reflects total experience earned
    pub fn gain_experience(&mut self, amount: u32) {
        self.experience = self.experience.saturating_add(amount);
        self.level = 1 + self.experience / XP_PER_LEVEL;
    }

    pub fn is_incapacitated(&self) -> bool {
        self.hp == 0 || self.sanity == 0
    }
}
