//! The stock ability table, in application order

use super::modifier::{AbilityModifier, Effect, ModifierContext, Owner, Role};
use crate::config::FirstStrike;
use crate::types::{CharacterClass, Species};
use armory_core::DamageType;

/// Every stock modifier, attacker-side entries first
pub fn modifiers() -> Vec<AbilityModifier> {
    vec![
        // Attacker side
        AbilityModifier {
            id: "rogue_sneak_attack",
            label: "Sneak attack",
            owner: Owner::Class(CharacterClass::Rogue),
            role: Role::Attacker,
            min_level: 1,
            condition: sneak_attack,
        },
        AbilityModifier {
            id: "rogue_poison",
            label: "Poison",
            owner: Owner::Class(CharacterClass::Rogue),
            role: Role::Attacker,
            min_level: 3,
            condition: poison,
        },
        AbilityModifier {
            id: "warrior_first_strike",
            label: "Action surge",
            owner: Owner::Class(CharacterClass::Warrior),
            role: Role::Attacker,
            min_level: 1,
            condition: first_strike,
        },
        AbilityModifier {
            id: "barbarian_rage",
            label: "Rage",
            owner: Owner::Class(CharacterClass::Barbarian),
            role: Role::Attacker,
            min_level: 1,
            condition: rage,
        },
        AbilityModifier {
            id: "barbarian_rage_fatigue",
            label: "Rage fatigue",
            owner: Owner::Class(CharacterClass::Barbarian),
            role: Role::Attacker,
            min_level: 1,
            condition: rage_fatigue,
        },
        AbilityModifier {
            id: "ghost_sneak_attack",
            label: "Ghost strikes from the shadows",
            owner: Owner::Species(Species::Ghost),
            role: Role::Attacker,
            min_level: 0,
            condition: sneak_attack,
        },
        AbilityModifier {
            id: "dragon_breath",
            label: "Dragon breathes fire",
            owner: Owner::Species(Species::Dragon),
            role: Role::Attacker,
            min_level: 0,
            condition: dragon_breath,
        },
        // Defender side
        AbilityModifier {
            id: "warrior_shield",
            label: "Shield",
            owner: Owner::Class(CharacterClass::Warrior),
            role: Role::Defender,
            min_level: 2,
            condition: shield,
        },
        AbilityModifier {
            id: "barbarian_stoneskin",
            label: "Stoneskin",
            owner: Owner::Class(CharacterClass::Barbarian),
            role: Role::Defender,
            min_level: 2,
            condition: stoneskin,
        },
        AbilityModifier {
            id: "skeleton_brittle_bones",
            label: "Skeleton shatters under crushing blows",
            owner: Owner::Species(Species::Skeleton),
            role: Role::Defender,
            min_level: 0,
            condition: brittle_bones,
        },
        AbilityModifier {
            id: "slime_slashing_immunity",
            label: "Slime is immune to slashing weapons",
            owner: Owner::Species(Species::Slime),
            role: Role::Defender,
            min_level: 0,
            condition: slashing_immunity,
        },
        AbilityModifier {
            id: "golem_stoneskin",
            label: "Golem's stone skin",
            owner: Owner::Species(Species::Golem),
            role: Role::Defender,
            min_level: 0,
            condition: stoneskin,
        },
    ]
}

fn sneak_attack(ctx: &ModifierContext<'_>) -> Option<Effect> {
    (ctx.attacker.agility() > ctx.defender.agility()).then_some(Effect::Add(1))
}

/// Grows by one every half-turn after the first
fn poison(ctx: &ModifierContext<'_>) -> Option<Effect> {
    let amount = (ctx.turn_amount() - 1).max(0);
    (amount > 0).then_some(Effect::Add(amount))
}

fn first_strike(ctx: &ModifierContext<'_>) -> Option<Effect> {
    if ctx.turn != 1 {
        return None;
    }
    Some(match ctx.rules.first_strike {
        FirstStrike::AddWeaponDamage => Effect::Add(ctx.attacker.weapon.damage),
        FirstStrike::DoubleTotal => Effect::Multiply(2),
    })
}

fn rage(ctx: &ModifierContext<'_>) -> Option<Effect> {
    (ctx.turn <= 3).then_some(Effect::Add(2))
}

fn rage_fatigue(ctx: &ModifierContext<'_>) -> Option<Effect> {
    (ctx.turn > 3).then_some(Effect::Add(-1))
}

fn dragon_breath(ctx: &ModifierContext<'_>) -> Option<Effect> {
    (ctx.turn % 3 == 0).then_some(Effect::Add(3))
}

fn shield(ctx: &ModifierContext<'_>) -> Option<Effect> {
    (ctx.defender.strength() > ctx.attacker.strength()).then_some(Effect::Absorb(3))
}

fn stoneskin(ctx: &ModifierContext<'_>) -> Option<Effect> {
    Some(Effect::Add(-ctx.defender.endurance()))
}

fn brittle_bones(ctx: &ModifierContext<'_>) -> Option<Effect> {
    (ctx.attacker.weapon.damage_type == DamageType::Crushing).then_some(Effect::Multiply(2))
}

/// Removes the weapon's share of the hit; strength and ability bonuses still land
fn slashing_immunity(ctx: &ModifierContext<'_>) -> Option<Effect> {
    (ctx.attacker.weapon.damage_type == DamageType::Slashing)
        .then_some(Effect::Add(-ctx.attacker.weapon.damage))
}
