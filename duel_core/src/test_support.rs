//! Fixtures shared by unit tests

use armory_core::{DamageType, Weapon};

use crate::combatant::{ClassLevels, Combatant};
use crate::types::{Attributes, CharacterClass, Species};

pub fn make_player(
    strength: i32,
    agility: i32,
    endurance: i32,
    weapon: Weapon,
    levels: ClassLevels,
) -> Combatant {
    Combatant::player(
        "Hero",
        Attributes::new(strength, agility, endurance),
        30,
        30,
        weapon,
        levels,
    )
}

pub fn make_monster(
    species: Species,
    health: i32,
    weapon_damage: i32,
    stats: (i32, i32, i32),
) -> Combatant {
    Combatant::monster(
        species,
        species.to_string(),
        Attributes::new(stats.0, stats.1, stats.2),
        health,
        Weapon::new("Claws", weapon_damage, DamageType::Piercing),
    )
}

pub fn sword() -> Weapon {
    Weapon::new("Sword", 3, DamageType::Slashing)
}

pub fn club() -> Weapon {
    Weapon::new("Club", 3, DamageType::Crushing)
}

pub fn dagger() -> Weapon {
    Weapon::new("Dagger", 2, DamageType::Piercing)
}

pub fn levels(class: CharacterClass, level: u8) -> ClassLevels {
    ClassLevels::new().with(class, level)
}

/// A goblin with plenty of health so it outlasts short tests
pub fn sturdy_goblin() -> Combatant {
    make_monster(Species::Goblin, 1000, 2, (1, 1, 1))
}
