//! bestiary_core - Monster catalog feeding snapshots to the duel engine

mod config;
mod registry;
mod template;

pub use registry::Bestiary;
pub use template::MonsterTemplate;

use duel_core::Species;
use std::path::PathBuf;
use thiserror::Error;

/// Error loading bestiary configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: Option<PathBuf>,
    },
    #[error("Parse error in '{path}': {error}")]
    Parse {
        error: toml::de::Error,
        path: PathBuf,
    },
    #[error("Validation error in '{path}': {message}")]
    Validation { message: String, path: PathBuf },
}

/// Error producing a monster or its reward
#[derive(Debug, Error)]
pub enum SpawnError {
    #[error("Unknown species: {0}")]
    UnknownSpecies(Species),
    #[error("Bestiary is empty")]
    Empty,
    #[error("Unknown reward weapon '{weapon}' for {species}")]
    UnknownReward { species: Species, weapon: String },
}
