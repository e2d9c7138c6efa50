//! Battle rules configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::ConfigError;

/// How the Warrior's first-turn bonus is applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstStrike {
    /// Add the attacker's weapon damage once more
    #[default]
    AddWeaponDamage,
    /// Double the running total
    DoubleTotal,
}

/// Tunable battle rules, passed explicitly to the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRules {
    /// Maximum number of half-turns before the battle is abandoned
    #[serde(default = "default_max_turns")]
    pub max_turns: u32,
    #[serde(default)]
    pub first_strike: FirstStrike,
}

impl Default for BattleRules {
    fn default() -> Self {
        BattleRules {
            max_turns: default_max_turns(),
            first_strike: FirstStrike::default(),
        }
    }
}

fn default_max_turns() -> u32 {
    200
}

impl BattleRules {
    /// Load rules from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let rules: BattleRules = super::load_toml(path)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Parse rules from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let rules: BattleRules = super::parse_toml(content)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    pub fn with_first_strike(mut self, first_strike: FirstStrike) -> Self {
        self.first_strike = first_strike;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_turns == 0 {
            return Err(ConfigError::Validation(
                "max_turns must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
