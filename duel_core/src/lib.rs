//! duel_core - Battle resolution engine for player vs monster duels
//!
//! This library provides:
//! - Combatant: read-only snapshot of one side of a battle
//! - AbilityRegistry: ordered class and species damage modifiers
//! - Damage pipeline: base damage, attacker modifiers, defender modifiers, clamp
//! - BattleEngine: turn order, hit rolls and the state machine that runs a
//!   battle to its end
//! - BattleLog: the human-readable record returned with every result
//!
//! # Quick Start
//!
//! ```rust
//! use duel_core::prelude::*;
//! use duel_core::{DamageType, Weapon};
//!
//! let hero = Combatant::player(
//!     "Hero",
//!     Attributes::new(5, 5, 5),
//!     20,
//!     20,
//!     Weapon::new("Sword", 3, DamageType::Slashing),
//!     ClassLevels::new().with(CharacterClass::Warrior, 1),
//! );
//! let goblin = Combatant::monster(
//!     Species::Goblin,
//!     "Goblin",
//!     Attributes::new(1, 1, 1),
//!     5,
//!     Weapon::new("Dagger", 2, DamageType::Piercing),
//! );
//!
//! let engine = BattleEngine::new(BattleRules::default());
//! let result = engine.fight(&hero, &goblin, &mut ScriptedDice::always_hit()).unwrap();
//! assert!(result.character_won());
//! ```

pub mod ability;
pub mod combat;
pub mod combatant;
pub mod config;
pub mod damage;
pub mod error;
pub mod log;
pub mod prelude;
pub mod types;

#[cfg(test)]
mod test_support;

// Core API - what most users need
pub use combat::{BattleEngine, BattleResult, Dice, ScriptedDice};
pub use combatant::{AbilityProfile, ClassLevels, Combatant};
pub use error::{BattleError, CombatantError};
pub use log::{BattleEvent, BattleLog};
pub use types::{Attributes, CharacterClass, Side, Species};

// Configuration
pub use config::{BattleRules, FirstStrike};

// Advanced: custom abilities
pub use ability::{AbilityModifier, AbilityRegistry};

// Re-export weapon types used in every snapshot
pub use armory_core::{DamageType, Weapon};
