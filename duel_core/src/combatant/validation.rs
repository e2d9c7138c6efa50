//! Pre-battle validation of combatant snapshots

use super::{AbilityProfile, Combatant};
use crate::error::CombatantError;
use crate::types::{CharacterClass, Side};

impl Combatant {
    /// Check the snapshot is fit to enter a battle
    ///
    /// A combatant at zero health is rejected here rather than treated as
    /// already defeated.
    pub fn validate(&self) -> Result<(), CombatantError> {
        if self.max_health <= 0 {
            return Err(CombatantError::NonPositiveMaxHealth(self.max_health));
        }
        if self.current_health <= 0 || self.current_health > self.max_health {
            return Err(CombatantError::HealthOutOfRange {
                current: self.current_health,
                max: self.max_health,
            });
        }

        for (attribute, value) in [
            ("strength", self.attributes.strength),
            ("agility", self.attributes.agility),
            ("endurance", self.attributes.endurance),
        ] {
            if value <= 0 {
                return Err(CombatantError::NonPositiveAttribute { attribute, value });
            }
        }

        if !self.weapon.is_well_formed() {
            return Err(CombatantError::MalformedWeapon(self.weapon.to_string()));
        }

        if let AbilityProfile::Player { levels } = &self.profile {
            for (class, level) in levels.iter() {
                if level > CharacterClass::MAX_LEVEL {
                    return Err(CombatantError::LevelOutOfRange {
                        class: class.id().to_string(),
                        level,
                        max: CharacterClass::MAX_LEVEL,
                    });
                }
            }
        }

        Ok(())
    }

    /// Validate and check the profile fits the slot it was placed in
    pub fn validate_for(&self, side: Side) -> Result<(), CombatantError> {
        if self.natural_side() != side {
            return Err(CombatantError::ProfileMismatch { expected: side });
        }
        self.validate()
    }
}
