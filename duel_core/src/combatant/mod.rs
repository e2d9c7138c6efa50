//! Combatant snapshots - the read-only view of one side for a single battle

mod validation;

use armory_core::Weapon;
use serde::{Deserialize, Serialize};

use crate::error::CombatantError;
use crate::types::{Attributes, CharacterClass, Side, Species};

/// Learned class levels of a player (0 = unlearned)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassLevels {
    #[serde(default)]
    pub rogue: u8,
    #[serde(default)]
    pub warrior: u8,
    #[serde(default)]
    pub barbarian: u8,
}

impl ClassLevels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for one class
    pub fn with(mut self, class: CharacterClass, level: u8) -> Self {
        *self.level_mut(class) = level;
        self
    }

    /// Build from `(class identifier, level)` pairs as stored by the session layer
    pub fn from_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, u8)>,
    ) -> Result<Self, CombatantError> {
        let mut levels = Self::new();
        for (id, level) in pairs {
            let class: CharacterClass = id.parse()?;
            *levels.level_mut(class) = level;
        }
        Ok(levels)
    }

    pub fn level(&self, class: CharacterClass) -> u8 {
        match class {
            CharacterClass::Rogue => self.rogue,
            CharacterClass::Warrior => self.warrior,
            CharacterClass::Barbarian => self.barbarian,
        }
    }

    fn level_mut(&mut self, class: CharacterClass) -> &mut u8 {
        match class {
            CharacterClass::Rogue => &mut self.rogue,
            CharacterClass::Warrior => &mut self.warrior,
            CharacterClass::Barbarian => &mut self.barbarian,
        }
    }

    /// Iterate over every class with its level, learned or not
    pub fn iter(&self) -> impl Iterator<Item = (CharacterClass, u8)> + '_ {
        CharacterClass::all().iter().map(move |c| (*c, self.level(*c)))
    }
}

/// What decides a combatant's abilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AbilityProfile {
    Player { levels: ClassLevels },
    Monster { species: Species },
}

/// Immutable stat snapshot of one side for the duration of a battle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub attributes: Attributes,
    pub current_health: i32,
    pub max_health: i32,
    pub weapon: Weapon,
    pub profile: AbilityProfile,
}

impl Combatant {
    /// Snapshot of a player character
    pub fn player(
        name: impl Into<String>,
        attributes: Attributes,
        current_health: i32,
        max_health: i32,
        weapon: Weapon,
        levels: ClassLevels,
    ) -> Self {
        Combatant {
            name: name.into(),
            attributes,
            current_health,
            max_health,
            weapon,
            profile: AbilityProfile::Player { levels },
        }
    }

    /// Snapshot of a monster at full health
    pub fn monster(
        species: Species,
        name: impl Into<String>,
        attributes: Attributes,
        health: i32,
        weapon: Weapon,
    ) -> Self {
        Combatant {
            name: name.into(),
            attributes,
            current_health: health,
            max_health: health,
            weapon,
            profile: AbilityProfile::Monster { species },
        }
    }

    pub fn strength(&self) -> i32 {
        self.attributes.strength
    }

    pub fn agility(&self) -> i32 {
        self.attributes.agility
    }

    pub fn endurance(&self) -> i32 {
        self.attributes.endurance
    }

    /// Level in a class; always 0 for monsters
    pub fn class_level(&self, class: CharacterClass) -> u8 {
        match &self.profile {
            AbilityProfile::Player { levels } => levels.level(class),
            AbilityProfile::Monster { .. } => 0,
        }
    }

    pub fn species(&self) -> Option<Species> {
        match self.profile {
            AbilityProfile::Monster { species } => Some(species),
            AbilityProfile::Player { .. } => None,
        }
    }

    /// The side this snapshot's profile belongs on
    pub fn natural_side(&self) -> Side {
        match self.profile {
            AbilityProfile::Player { .. } => Side::Character,
            AbilityProfile::Monster { .. } => Side::Monster,
        }
    }
}
