//! Damage pipeline - base damage plus ordered ability modifiers

mod calculation;

pub use calculation::{base_damage, calculate_damage};

use crate::ability::{Effect, Role};

/// One modifier that fired during a damage calculation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedModifier {
    pub id: &'static str,
    pub label: &'static str,
    pub role: Role,
    pub effect: Effect,
    /// Running total before and after this modifier
    pub before: i32,
    pub after: i32,
}

/// Result of running the damage pipeline for one hit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DamageOutcome {
    /// Weapon damage plus strength
    pub base: i32,
    /// Total after attacker-side modifiers
    pub after_attacker: i32,
    /// Final, non-negative damage dealt
    pub total: i32,
    pub applied: Vec<AppliedModifier>,
}

impl DamageOutcome {
    /// Whether defenses soaked up the whole hit
    pub fn fully_absorbed(&self) -> bool {
        self.total == 0
    }

    pub fn applied_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.applied.iter().map(|m| m.id)
    }
}
