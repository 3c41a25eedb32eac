//! Combat encounter entity - turn order and the combat lifecycle
//!
//! An encounter is `Active` from the moment it is created and becomes `Ended`
//! once [`CombatEncounter::end`] is called. Initiative is a uniform random
//! permutation of every combatant; no stat weighting is applied.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::domain::entities::{Character, Enemy};
use crate::domain::value_objects::{CombatId, GameSessionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombatantKind {
    Character,
    Enemy,
}

impl CombatantKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Enemy => "enemy",
        }
    }
}

/// Reference to one participant in the turn order.
///
/// Serialized as `"character:<uuid>"` or `"enemy:<uuid>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CombatantRef {
    pub kind: CombatantKind,
    pub id: Uuid,
}

impl CombatantRef {
    pub fn character(character: &Character) -> Self {
        Self {
            kind: CombatantKind::Character,
            id: *character.id.as_uuid(),
        }
    }

    pub fn enemy(enemy: &Enemy) -> Self {
        Self {
            kind: CombatantKind::Enemy,
            id: *enemy.id.as_uuid(),
        }
    }
}

impl fmt::Display for CombatantRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind.as_str(), self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid combatant reference: {0}")]
pub struct InvalidCombatantRef(pub String);

impl FromStr for CombatantRef {
    type Err = InvalidCombatantRef;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidCombatantRef(s.to_string());
        let (kind, id) = s.split_once(':').ok_or_else(invalid)?;
        let kind = match kind {
            "character" => CombatantKind::Character,
            "enemy" => CombatantKind::Enemy,
            _ => return Err(invalid()),
        };
        let id = Uuid::parse_str(id).map_err(|_| invalid())?;
        Ok(Self { kind, id })
    }
}

impl Serialize for CombatantRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CombatantRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatStatus {
    Active,
    Ended,
}

/// Build one entry per party member and per enemy, then shuffle uniformly
pub fn calculate_turn_order<R: Rng + ?Sized>(
    party: &[Character],
    enemies: &[Enemy],
    rng: &mut R,
) -> Vec<CombatantRef> {
    let mut order: Vec<CombatantRef> = party
        .iter()
        .map(CombatantRef::character)
        .chain(enemies.iter().map(CombatantRef::enemy))
        .collect();
    order.shuffle(rng);
    order
}

/// A single combat between the party and a set of enemies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatEncounter {
    pub id: CombatId,
    #[serde(rename = "game_state_id")]
    pub game_session_id: GameSessionId,
    pub party: Vec<Character>,
    pub enemies: Vec<Enemy>,
    pub current_turn: usize,
    pub turn_order: Vec<CombatantRef>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl CombatEncounter {
    /// Start combat: snapshot both sides and roll a random initiative order
    pub fn start<R: Rng + ?Sized>(
        game_session_id: GameSessionId,
        party: Vec<Character>,
        enemies: Vec<Enemy>,
        rng: &mut R,
    ) -> Self {
        let turn_order = calculate_turn_order(&party, &enemies, rng);
        Self {
            id: CombatId::new(),
            game_session_id,
            party,
            enemies,
            current_turn: 0,
            turn_order,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// Mark the encounter as over. Ending an ended encounter does nothing.
    pub fn end(&mut self) {
        self.is_active = false;
    }
}

// Lifecycle queries for turn advancement, which is not implemented
#[allow(dead_code)]
impl CombatEncounter {
    pub fn status(&self) -> CombatStatus {
        if self.is_active {
            CombatStatus::Active
        } else {
            CombatStatus::Ended
        }
    }

    /// Combatant whose turn it currently is
    pub fn current_combatant(&self) -> Option<CombatantRef> {
        if !self.is_active {
            return None;
        }
        self.turn_order.get(self.current_turn).copied()
    }
}
