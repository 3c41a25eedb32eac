//! Character classes and their fixed templates

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The four playable investigator classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    Detective,
    Witch,
    Scientist,
    Healer,
}

/// Starting stats, abilities and narrative flavor for a class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassTemplate {
    pub max_hp: u32,
    pub max_sanity: u32,
    pub abilities: &'static [&'static str],
    /// Ability names paired with a one-line description, for the class picker
    pub ability_descriptions: &'static [&'static str],
    pub dark_secret: &'static str,
}

impl CharacterClass {
    #[cfg(test)]
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Detective,
        CharacterClass::Witch,
        CharacterClass::Scientist,
        CharacterClass::Healer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Detective => "detective",
            Self::Witch => "witch",
            Self::Scientist => "scientist",
            Self::Healer => "healer",
        }
    }

    pub fn template(&self) -> ClassTemplate {
        match self {
            Self::Detective => ClassTemplate {
                max_hp: 90,
                max_sanity: 100,
                abilities: &["Lucky Shot", "Investigate", "Sixth Sense"],
                ability_descriptions: &[
                    "Lucky Shot - Random damage 1-999",
                    "Investigate - Reveal enemy weaknesses",
                    "Sixth Sense - Detect hidden threats",
                ],
                dark_secret: "Bears a Shoggoth's eye that grants vision but ages him rapidly",
            },
            Self::Witch => ClassTemplate {
                max_hp: 70,
                max_sanity: 100,
                abilities: &["Blood Magic", "Hex", "Eldritch Blast"],
                ability_descriptions: &[
                    "Blood Magic - Powerful spells that cost HP",
                    "Hex - Curse enemies with status effects",
                    "Eldritch Blast - Dark energy attack",
                ],
                dark_secret: "Her spells cost HP as they require blood sacrifice",
            },
            Self::Scientist => ClassTemplate {
                max_hp: 80,
                max_sanity: 100,
                abilities: &["Analyze", "Alchemical Bomb", "Mutation"],
                ability_descriptions: &[
                    "Analyze - Study enemy patterns",
                    "Alchemical Bomb - Area damage with poison",
                    "Mutation - Transform body parts for combat",
                ],
                dark_secret: "Her body mutates from Nyarlathotep's experiments",
            },
            Self::Healer => ClassTemplate {
                max_hp: 85,
                max_sanity: 100,
                abilities: &["Dagon's Embrace", "Purify", "Plague Touch"],
                ability_descriptions: &[
                    "Dagon's Embrace - Heal 50% HP but lower Sanity resistance",
                    "Purify - Remove curses and poison",
                    "Plague Touch - Heal allies by damaging enemies",
                ],
                dark_secret: "His cures spread Yog-Sothoth's plagues",
            },
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown character class: {0}")]
pub struct UnknownCharacterClass(pub String);

impl FromStr for CharacterClass {
    type Err = UnknownCharacterClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "detective" => Ok(Self::Detective),
            "witch" => Ok(Self::Witch),
            "scientist" => Ok(Self::Scientist),
            "healer" => Ok(Self::Healer),
            _ => Err(UnknownCharacterClass(s.to_string())),
        }
    }
}
