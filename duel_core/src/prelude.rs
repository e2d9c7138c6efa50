//! Prelude module for convenient imports
//!
//! ```rust
//! use duel_core::prelude::*;
//! ```

// Core types
pub use crate::combatant::{AbilityProfile, ClassLevels, Combatant};
pub use crate::types::{Attributes, CharacterClass, Side, Species};

// Combat
pub use crate::combat::{BattleEngine, BattleResult, Dice, ScriptedDice};
pub use crate::error::{BattleError, CombatantError};
pub use crate::log::BattleLog;

// Config
pub use crate::config::{BattleRules, FirstStrike};

// Abilities (for advanced use)
pub use crate::ability::{AbilityModifier, AbilityRegistry, Effect, Owner, Role};
