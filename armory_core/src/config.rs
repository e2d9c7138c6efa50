use serde::Deserialize;

use crate::types::DamageType;

/// TOML configuration for a weapon catalog file
#[derive(Debug, Deserialize)]
pub struct ArmoryFileConfig {
    #[serde(default)]
    pub weapons: Vec<WeaponConfig>,
}

/// Configuration for a single weapon entry
#[derive(Debug, Deserialize)]
pub struct WeaponConfig {
    pub id: String,
    pub name: String,
    pub damage: i32,
    pub damage_type: DamageType,
}
