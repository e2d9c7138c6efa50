use crate::config::ArmoryFileConfig;
use crate::types::{DamageType, Weapon};
use crate::ArmoryError;
use std::collections::BTreeMap;
use std::path::Path;

/// Catalog of weapons keyed by id
#[derive(Debug, Clone, Default)]
pub struct Armory {
    weapons: BTreeMap<String, Weapon>,
}

impl Armory {
    /// Create an empty armory
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock weapon set the game ships with
    pub fn standard() -> Self {
        let mut armory = Self::new();
        for (id, name, damage, damage_type) in [
            ("sword", "Sword", 3, DamageType::Slashing),
            ("club", "Club", 3, DamageType::Crushing),
            ("dagger", "Dagger", 2, DamageType::Piercing),
            ("axe", "Axe", 4, DamageType::Slashing),
            ("spear", "Spear", 3, DamageType::Piercing),
            ("legendary_sword", "Legendary Sword", 10, DamageType::Slashing),
        ] {
            armory
                .weapons
                .insert(id.to_string(), Weapon::new(name, damage, damage_type));
        }
        armory
    }

    /// Load a weapon catalog from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ArmoryError> {
        let content = std::fs::read_to_string(path).map_err(|e| ArmoryError::Io {
            error: e,
            path: Some(path.to_path_buf()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse a weapon catalog from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ArmoryError> {
        let config: ArmoryFileConfig = toml::from_str(content)?;

        let mut armory = Self::new();
        for entry in config.weapons {
            if entry.damage < 0 {
                return Err(ArmoryError::Validation(format!(
                    "weapon '{}' has negative damage {}",
                    entry.id, entry.damage
                )));
            }
            if armory.weapons.contains_key(&entry.id) {
                return Err(ArmoryError::Validation(format!(
                    "duplicate weapon id '{}'",
                    entry.id
                )));
            }
            armory.weapons.insert(
                entry.id,
                Weapon::new(entry.name, entry.damage, entry.damage_type),
            );
        }
        Ok(armory)
    }

    /// Get a weapon by id
    pub fn get(&self, id: &str) -> Option<&Weapon> {
        self.weapons.get(id)
    }

    /// Check if a weapon exists
    pub fn contains(&self, id: &str) -> bool {
        self.weapons.contains_key(id)
    }

    /// List all weapon ids in sorted order
    pub fn weapon_ids(&self) -> impl Iterator<Item = &str> {
        self.weapons.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_armory() {
        let armory = Armory::standard();
        assert_eq!(armory.len(), 6);

        let club = armory.get("club").unwrap();
        assert_eq!(club.damage, 3);
        assert_eq!(club.damage_type, DamageType::Crushing);

        let legendary = armory.get("legendary_sword").unwrap();
        assert_eq!(legendary.damage, 10);
    }

    #[test]
    fn test_parse_catalog() {
        let armory = Armory::from_toml_str(
            r#"
[[weapons]]
id = "mace"
name = "Mace"
damage = 4
damage_type = "crushing"

[[weapons]]
id = "rapier"
name = "Rapier"
damage = 2
damage_type = "piercing"
"#,
        )
        .unwrap();

        assert!(armory.contains("mace"));
        assert_eq!(armory.get("rapier").unwrap().damage_type, DamageType::Piercing);
        assert_eq!(armory.weapon_ids().collect::<Vec<_>>(), vec!["mace", "rapier"]);
    }

    #[test]
    fn test_empty_catalog() {
        let armory = Armory::from_toml_str("").unwrap();
        assert!(armory.is_empty());
    }

    #[test]
    fn test_negative_damage_rejected() {
        let result = Armory::from_toml_str(
            r#"
[[weapons]]
id = "cursed"
name = "Cursed Blade"
damage = -2
damage_type = "slashing"
"#,
        );
        assert!(matches!(result, Err(ArmoryError::Validation(_))));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Armory::from_toml_str(
            r#"
[[weapons]]
id = "sword"
name = "Sword"
damage = 3
damage_type = "slashing"

[[weapons]]
id = "sword"
name = "Other Sword"
damage = 5
damage_type = "slashing"
"#,
        );
        assert!(matches!(result, Err(ArmoryError::Validation(msg)) if msg.contains("sword")));
    }

    #[test]
    fn test_unknown_damage_type_is_parse_error() {
        let result = Armory::from_toml_str(
            r#"
[[weapons]]
id = "whip"
name = "Whip"
damage = 1
damage_type = "lashing"
"#,
        );
        assert!(matches!(result, Err(ArmoryError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Armory::load_from_path(Path::new("/nonexistent/weapons.toml"));
        assert!(matches!(result, Err(ArmoryError::Io { .. })));
    }
}
