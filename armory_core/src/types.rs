use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ArmoryError;

/// Damage types for weapons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Slashing,
    Crushing,
    Piercing,
}

impl DamageType {
    /// Get all damage type variants
    pub fn all() -> &'static [DamageType] {
        &[
            DamageType::Slashing,
            DamageType::Crushing,
            DamageType::Piercing,
        ]
    }

    /// Identifier used in config files and transport formats
    pub fn id(&self) -> &'static str {
        match self {
            DamageType::Slashing => "slashing",
            DamageType::Crushing => "crushing",
            DamageType::Piercing => "piercing",
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DamageType::Slashing => write!(f, "Slashing"),
            DamageType::Crushing => write!(f, "Crushing"),
            DamageType::Piercing => write!(f, "Piercing"),
        }
    }
}

impl FromStr for DamageType {
    type Err = ArmoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DamageType::all()
            .iter()
            .copied()
            .find(|t| t.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ArmoryError::UnknownDamageType(s.to_string()))
    }
}

/// A weapon as carried into battle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    /// Display name
    pub name: String,
    /// Flat damage added to the wielder's strength
    pub damage: i32,
    pub damage_type: DamageType,
}

impl Weapon {
    pub fn new(name: impl Into<String>, damage: i32, damage_type: DamageType) -> Self {
        Weapon {
            name: name.into(),
            damage,
            damage_type,
        }
    }

    /// A weapon is well-formed when it has a name and non-negative damage
    pub fn is_well_formed(&self) -> bool {
        !self.name.trim().is_empty() && self.damage >= 0
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} damage, {})", self.name, self.damage, self.damage_type)
    }
}
