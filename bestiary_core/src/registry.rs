use crate::config::BestiaryFileConfig;
use crate::template::MonsterTemplate;
use crate::{ConfigError, SpawnError};
use armory_core::{Armory, DamageType, Weapon};
use duel_core::{Attributes, Combatant, Species};
use rand::Rng;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Registry of monster species, loaded from TOML files
#[derive(Debug, Clone, Default)]
pub struct Bestiary {
    monsters: BTreeMap<Species, MonsterTemplate>,
}

impl Bestiary {
    /// Create an empty bestiary
    pub fn new() -> Self {
        Self::default()
    }

    /// The six stock species
    pub fn standard() -> Self {
        let mut bestiary = Self::new();
        for (species, health, weapon_damage, (strength, agility, endurance), ability, reward) in [
            (Species::Goblin, 5, 2, (1, 1, 1), "", "dagger"),
            (
                Species::Skeleton,
                10,
                2,
                (2, 2, 1),
                "Takes double damage from crushing weapons",
                "club",
            ),
            (
                Species::Slime,
                8,
                1,
                (3, 1, 2),
                "Slashing weapons deal it no damage",
                "spear",
            ),
            (Species::Ghost, 6, 3, (1, 3, 1), "Has the sneak attack ability", "sword"),
            (Species::Golem, 10, 1, (3, 1, 3), "Has the stone skin ability", "axe"),
            (
                Species::Dragon,
                20,
                4,
                (3, 3, 3),
                "Breathes fire every third turn (+3 damage)",
                "legendary_sword",
            ),
        ] {
            bestiary.insert(MonsterTemplate {
                species,
                name: species.to_string(),
                health,
                weapon_damage,
                damage_type: DamageType::Crushing,
                attributes: Attributes::new(strength, agility, endurance),
                special_ability: ability.to_string(),
                reward_weapon: reward.to_string(),
            });
        }
        bestiary
    }

    /// Load all monster files from a directory (recursively)
    ///
    /// A species defined in several files keeps the last definition read.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let mut bestiary = Self::new();
        bestiary.load_dir(dir)?;
        debug!(path = ?dir, species = bestiary.len(), "Bestiary loaded");
        Ok(bestiary)
    }

    fn load_dir(&mut self, dir: &Path) -> Result<(), ConfigError> {
        if !dir.exists() {
            return Ok(());
        }

        let entries = std::fs::read_dir(dir).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(dir.to_path_buf()),
        })?;

        // Sorted so overrides do not depend on directory iteration order
        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ConfigError::Io {
                error: e,
                path: Some(dir.to_path_buf()),
            })?;
            paths.push(entry.path());
        }
        paths.sort();

        for path in paths {
            if path.is_dir() {
                self.load_dir(&path)?;
            } else if path.extension().is_some_and(|ext| ext == "toml") {
                self.load_file(&path)?;
            }
        }

        Ok(())
    }

    /// Load a single bestiary file
    pub fn load_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(path.to_path_buf()),
        })?;

        let config: BestiaryFileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse {
                error: e,
                path: path.to_path_buf(),
            })?;

        for monster in config.monsters {
            let template =
                MonsterTemplate::from_config(monster).map_err(|message| ConfigError::Validation {
                    message,
                    path: path.to_path_buf(),
                })?;
            self.insert(template);
        }
        Ok(())
    }

    /// Add or replace a species
    pub fn insert(&mut self, template: MonsterTemplate) {
        self.monsters.insert(template.species, template);
    }

    /// Get a species template
    pub fn get(&self, species: Species) -> Option<&MonsterTemplate> {
        self.monsters.get(&species)
    }

    pub fn contains(&self, species: Species) -> bool {
        self.monsters.contains_key(&species)
    }

    /// List all species in catalog order
    pub fn species(&self) -> impl Iterator<Item = Species> + '_ {
        self.monsters.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }

    /// Full-health battle snapshot of a species
    pub fn spawn(&self, species: Species) -> Result<Combatant, SpawnError> {
        self.get(species)
            .map(MonsterTemplate::to_combatant)
            .ok_or(SpawnError::UnknownSpecies(species))
    }

    /// Pick a species uniformly at random
    pub fn random_encounter<R: Rng>(&self, rng: &mut R) -> Result<&MonsterTemplate, SpawnError> {
        if self.monsters.is_empty() {
            return Err(SpawnError::Empty);
        }
        let index = rng.gen_range(0..self.monsters.len());
        self.monsters.values().nth(index).ok_or(SpawnError::Empty)
    }

    /// Weapon granted for defeating a species
    pub fn reward_for<'a>(
        &self,
        species: Species,
        armory: &'a Armory,
    ) -> Result<&'a Weapon, SpawnError> {
        let template = self.get(species).ok_or(SpawnError::UnknownSpecies(species))?;
        armory
            .get(&template.reward_weapon)
            .ok_or_else(|| SpawnError::UnknownReward {
                species,
                weapon: template.reward_weapon.clone(),
            })
    }

    /// Check every reward weapon exists in `armory`
    pub fn validate_rewards(&self, armory: &Armory) -> Result<(), SpawnError> {
        for species in self.species() {
            self.reward_for(species, armory)?;
        }
        Ok(())
    }
}
