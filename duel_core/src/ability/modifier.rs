use std::fmt;

use crate::combatant::Combatant;
use crate::config::BattleRules;
use crate::types::{CharacterClass, Species};

/// Which side of an exchange a modifier works for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Attacker,
    Defender,
}

/// Who grants a modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    /// A player class, from `min_level` upward
    Class(CharacterClass),
    Species(Species),
}

/// Adjustment applied to the running damage total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Add (or subtract, when negative) a flat amount
    Add(i32),
    /// Multiply the running total
    Multiply(i32),
    /// Subtract a flat amount, never going below zero
    Absorb(i32),
}

impl Effect {
    pub fn apply(self, total: i32) -> i32 {
        match self {
            Effect::Add(amount) => total.saturating_add(amount),
            Effect::Multiply(factor) => total.saturating_mul(factor),
            Effect::Absorb(amount) => total.saturating_sub(amount).max(0),
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Add(amount) if *amount >= 0 => write!(f, "+{} damage", amount),
            Effect::Add(amount) => write!(f, "-{} damage", amount.unsigned_abs()),
            Effect::Multiply(factor) => write!(f, "x{} damage", factor),
            Effect::Absorb(amount) => write!(f, "-{} damage", amount),
        }
    }
}

/// Everything a modifier may look at. No other state is visible to it.
#[derive(Debug, Clone, Copy)]
pub struct ModifierContext<'a> {
    pub attacker: &'a Combatant,
    pub defender: &'a Combatant,
    /// Half-turn counter, starting at 1
    pub turn: u32,
    pub rules: &'a BattleRules,
}

impl ModifierContext<'_> {
    /// The turn counter as a damage amount
    pub fn turn_amount(&self) -> i32 {
        i32::try_from(self.turn).unwrap_or(i32::MAX)
    }
}

/// A named, deterministic damage adjustment
#[derive(Clone, Copy)]
pub struct AbilityModifier {
    pub id: &'static str,
    /// Log label, e.g. "Sneak attack"
    pub label: &'static str,
    pub owner: Owner,
    pub role: Role,
    /// Minimum class level; ignored for species
    pub min_level: u8,
    /// Returns the effect when the modifier's condition holds
    pub condition: fn(&ModifierContext<'_>) -> Option<Effect>,
}

impl fmt::Debug for AbilityModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AbilityModifier")
            .field("id", &self.id)
            .field("owner", &self.owner)
            .field("role", &self.role)
            .field("min_level", &self.min_level)
            .finish_non_exhaustive()
    }
}

impl AbilityModifier {
    /// Whether `combatant` has this ability at all
    pub fn granted_to(&self, combatant: &Combatant) -> bool {
        match self.owner {
            Owner::Class(class) => {
                let level = combatant.class_level(class);
                level > 0 && level >= self.min_level
            }
            Owner::Species(species) => combatant.species() == Some(species),
        }
    }

    /// The combatant in `ctx` whose ability this would be
    pub fn holder<'a>(&self, ctx: &ModifierContext<'a>) -> &'a Combatant {
        match self.role {
            Role::Attacker => ctx.attacker,
            Role::Defender => ctx.defender,
        }
    }

    /// Evaluate against an exchange; `None` when not granted or not triggered
    pub fn evaluate(&self, ctx: &ModifierContext<'_>) -> Option<Effect> {
        if !self.granted_to(self.holder(ctx)) {
            return None;
        }
        (self.condition)(ctx)
    }
}
