//! armory_core - Weapon definitions shared by the duel engine and its catalogs
//!
//! This library provides:
//! - DamageType: how a weapon hurts (slashing, crushing, piercing)
//! - Weapon: the damage snapshot a combatant carries into battle
//! - Armory: a weapon catalog loaded from TOML

mod armory;
mod config;
pub mod types;

pub use armory::Armory;
pub use types::{DamageType, Weapon};

use std::path::PathBuf;
use thiserror::Error;

/// Error loading or querying the weapon catalog
#[derive(Debug, Error)]
pub enum ArmoryError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: Option<PathBuf>,
    },
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Unknown damage type: {0}")]
    UnknownDamageType(String),
}
