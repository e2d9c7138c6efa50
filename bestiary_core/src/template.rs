use crate::config::MonsterConfig;
use duel_core::{Attributes, Combatant, DamageType, Species, Weapon};
use serde::{Deserialize, Serialize};

/// Stats a species spawns with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterTemplate {
    pub species: Species,
    pub name: String,
    pub health: i32,
    pub weapon_damage: i32,
    pub damage_type: DamageType,
    pub attributes: Attributes,
    /// Flavor text shown to the player
    pub special_ability: String,
    /// Weapon id in the armory granted on defeat
    pub reward_weapon: String,
}

impl MonsterTemplate {
    pub(crate) fn from_config(config: MonsterConfig) -> Result<Self, String> {
        if config.health <= 0 {
            return Err(format!("{} must have positive health", config.species));
        }
        if config.weapon_damage < 0 {
            return Err(format!("{} has negative weapon damage", config.species));
        }
        for (attribute, value) in [
            ("strength", config.strength),
            ("agility", config.agility),
            ("endurance", config.endurance),
        ] {
            if value <= 0 {
                return Err(format!("{} {} must be positive", config.species, attribute));
            }
        }

        Ok(MonsterTemplate {
            species: config.species,
            name: config.name.unwrap_or_else(|| config.species.to_string()),
            health: config.health,
            weapon_damage: config.weapon_damage,
            damage_type: config.damage_type,
            attributes: Attributes::new(config.strength, config.agility, config.endurance),
            special_ability: config.special_ability,
            reward_weapon: config.reward_weapon,
        })
    }

    /// Full-health battle snapshot of this monster
    pub fn to_combatant(&self) -> Combatant {
        Combatant::monster(
            self.species,
            self.name.clone(),
            self.attributes,
            self.health,
            Weapon::new(
                format!("{}'s attack", self.name),
                self.weapon_damage,
                self.damage_type,
            ),
        )
    }
}
