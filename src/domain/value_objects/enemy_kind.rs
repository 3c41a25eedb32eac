use std::fmt;

use serde::{Deserialize, Serialize};

/// Broad category of an enemy, used for sprite prompts and placeholder art
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    Cultist,
    CosmicHorror,
    Boss,
}

impl EnemyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cultist => "cultist",
            Self::CosmicHorror => "cosmic_horror",
            Self::Boss => "boss",
        }
    }
}

impl fmt::Display for EnemyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
