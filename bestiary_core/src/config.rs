use duel_core::{DamageType, Species};
use serde::Deserialize;

/// TOML configuration for a bestiary file
#[derive(Debug, Deserialize)]
pub struct BestiaryFileConfig {
    #[serde(default)]
    pub monsters: Vec<MonsterConfig>,
}

/// Configuration for a single monster species
#[derive(Debug, Deserialize)]
pub struct MonsterConfig {
    pub species: Species,
    #[serde(default)]
    pub name: Option<String>,
    pub health: i32,
    pub weapon_damage: i32,
    #[serde(default = "default_damage_type")]
    pub damage_type: DamageType,
    pub strength: i32,
    pub agility: i32,
    pub endurance: i32,
    #[serde(default)]
    pub special_ability: String,
    pub reward_weapon: String,
}

fn default_damage_type() -> DamageType {
    DamageType::Crushing
}
