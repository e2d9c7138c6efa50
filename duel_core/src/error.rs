//! Error types for battle resolution

use thiserror::Error;

use crate::types::Side;

/// Reason a combatant snapshot cannot enter a battle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombatantError {
    #[error("max health must be positive, got {0}")]
    NonPositiveMaxHealth(i32),
    #[error("current health {current} outside 1..={max}")]
    HealthOutOfRange { current: i32, max: i32 },
    #[error("{attribute} must be positive, got {value}")]
    NonPositiveAttribute { attribute: &'static str, value: i32 },
    #[error("weapon is missing or malformed: {0}")]
    MalformedWeapon(String),
    #[error("{class} level {level} exceeds the maximum of {max}")]
    LevelOutOfRange { class: String, level: u8, max: u8 },
    #[error("unknown class: {0}")]
    UnknownClass(String),
    #[error("unknown species: {0}")]
    UnknownSpecies(String),
    #[error("expected a {expected} profile")]
    ProfileMismatch { expected: Side },
}

/// Error resolving a battle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleError {
    /// Raised before any turn executes
    #[error("invalid {side} combatant: {reason}")]
    InvalidCombatant { side: Side, reason: CombatantError },
    /// Rules failed validation
    #[error("invalid battle rules: {0}")]
    InvalidRules(String),
    /// Neither side reached zero health within the turn cap
    #[error("battle exceeded {turns} half-turns without a winner")]
    Timeout { turns: u32 },
}
