//! Enemy entity - A combat-scoped opponent instantiated from a template

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{EnemyId, EnemyKind, GeneratedImage};

/// Static description of an enemy in the roster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyTemplate {
    pub name: &'static str,
    pub kind: EnemyKind,
    pub max_hp: u32,
    pub sanity_damage: u32,
    pub abilities: &'static [&'static str],
    pub description: &'static str,
}

/// An enemy instance with its own identity and health pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EnemyId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EnemyKind,
    pub hp: u32,
    pub max_hp: u32,
    pub sanity_damage: u32,
    pub abilities: Vec<String>,
    pub sprite_image: Option<GeneratedImage>,
    pub description: String,
}

impl Enemy {
    pub fn from_template(template: &EnemyTemplate) -> Self {
        Self {
            id: EnemyId::new(),
            name: template.name.to_string(),
            kind: template.kind,
            hp: template.max_hp,
            max_hp: template.max_hp,
            sanity_damage: template.sanity_damage,
            abilities: template.abilities.iter().map(|a| a.to_string()).collect(),
            sprite_image: None,
            description: template.description.to_string(),
        }
    }

    pub fn with_sprite(mut self, image: GeneratedImage) -> Self {
        self.sprite_image = Some(image);
        self
    }
}

// Combat resolution is not wired to a service yet
#[allow(dead_code)]
impl Enemy {
    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }
}
