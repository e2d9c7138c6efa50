//! Shared identifiers: sides, classes, species, attributes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CombatantError;

/// Which side of the duel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Character,
    Monster,
}

impl Side {
    /// The side that acts after this one
    pub fn opponent(self) -> Side {
        match self {
            Side::Character => Side::Monster,
            Side::Monster => Side::Character,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Character => write!(f, "character"),
            Side::Monster => write!(f, "monster"),
        }
    }
}

/// Core attributes of a combatant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub strength: i32,
    pub agility: i32,
    pub endurance: i32,
}

impl Attributes {
    pub fn new(strength: i32, agility: i32, endurance: i32) -> Self {
        Attributes {
            strength,
            agility,
            endurance,
        }
    }
}

/// Player character classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    Rogue,
    Warrior,
    Barbarian,
}

impl CharacterClass {
    /// Highest level a class can reach
    pub const MAX_LEVEL: u8 = 3;

    pub fn all() -> &'static [CharacterClass] {
        &[
            CharacterClass::Rogue,
            CharacterClass::Warrior,
            CharacterClass::Barbarian,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            CharacterClass::Rogue => "rogue",
            CharacterClass::Warrior => "warrior",
            CharacterClass::Barbarian => "barbarian",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterClass::Rogue => write!(f, "Rogue"),
            CharacterClass::Warrior => write!(f, "Warrior"),
            CharacterClass::Barbarian => write!(f, "Barbarian"),
        }
    }
}

impl FromStr for CharacterClass {
    type Err = CombatantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CharacterClass::all()
            .iter()
            .copied()
            .find(|c| c.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CombatantError::UnknownClass(s.to_string()))
    }
}

/// Monster species, each with a fixed ability set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Goblin,
    Skeleton,
    Slime,
    Ghost,
    Golem,
    Dragon,
}

impl Species {
    pub fn all() -> &'static [Species] {
        &[
            Species::Goblin,
            Species::Skeleton,
            Species::Slime,
            Species::Ghost,
            Species::Golem,
            Species::Dragon,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Species::Goblin => "goblin",
            Species::Skeleton => "skeleton",
            Species::Slime => "slime",
            Species::Ghost => "ghost",
            Species::Golem => "golem",
            Species::Dragon => "dragon",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Species::Goblin => write!(f, "Goblin"),
            Species::Skeleton => write!(f, "Skeleton"),
            Species::Slime => write!(f, "Slime"),
            Species::Ghost => write!(f, "Ghost"),
            Species::Golem => write!(f, "Golem"),
            Species::Dragon => write!(f, "Dragon"),
        }
    }
}

impl FromStr for Species {
    type Err = CombatantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Species::all()
            .iter()
            .copied()
            .find(|sp| sp.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CombatantError::UnknownSpecies(s.to_string()))
    }
}
