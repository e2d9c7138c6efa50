//! Ability modifier registry
//!
//! Modifiers are looked up by role and owner and always applied in
//! registration order, whatever order a combatant's classes were learned in.

mod modifier;
pub mod standard;

pub use modifier::{AbilityModifier, Effect, ModifierContext, Owner, Role};

use crate::combatant::Combatant;

/// Registry of ability modifiers
#[derive(Debug, Clone)]
pub struct AbilityRegistry {
    modifiers: Vec<AbilityModifier>,
}

impl AbilityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        AbilityRegistry {
            modifiers: Vec::new(),
        }
    }

    /// Registry holding the stock class and species abilities
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for modifier in standard::modifiers() {
            registry.register(modifier);
        }
        registry
    }

    /// Register a modifier; it applies after every modifier registered before it
    pub fn register(&mut self, modifier: AbilityModifier) {
        self.modifiers.push(modifier);
    }

    /// Get a modifier by ID
    pub fn get(&self, id: &str) -> Option<&AbilityModifier> {
        self.modifiers.iter().find(|m| m.id == id)
    }

    /// Modifiers of `role` that `holder` has, in registration order
    pub fn granted<'a>(
        &'a self,
        role: Role,
        holder: &'a Combatant,
    ) -> impl Iterator<Item = &'a AbilityModifier> + 'a {
        self.modifiers
            .iter()
            .filter(move |m| m.role == role && m.granted_to(holder))
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }
}

impl Default for AbilityRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::ClassLevels;
    use crate::config::{BattleRules, FirstStrike};
    use crate::test_support::*;
    use crate::types::{CharacterClass, Species};
    use armory_core::{DamageType, Weapon};

    fn evaluate(
        registry: &AbilityRegistry,
        id: &str,
        attacker: &Combatant,
        defender: &Combatant,
        turn: u32,
    ) -> Option<Effect> {
        let rules = BattleRules::default();
        let ctx = ModifierContext {
            attacker,
            defender,
            turn,
            rules: &rules,
        };
        registry.get(id).unwrap().evaluate(&ctx)
    }

    #[test]
    fn test_standard_registry_order() {
        let registry = AbilityRegistry::standard();
        let ids: Vec<_> = registry.modifiers.iter().map(|m| m.id).collect();
        assert_eq!(
            ids,
            vec![
                "rogue_sneak_attack",
                "rogue_poison",
                "warrior_first_strike",
                "barbarian_rage",
                "barbarian_rage_fatigue",
                "ghost_sneak_attack",
                "dragon_breath",
                "warrior_shield",
                "barbarian_stoneskin",
                "skeleton_brittle_bones",
                "slime_slashing_immunity",
                "golem_stoneskin",
            ]
        );
    }

    #[test]
    fn test_granted_follows_registration_order() {
        let registry = AbilityRegistry::standard();
        let levels = ClassLevels::new()
            .with(CharacterClass::Barbarian, 1)
            .with(CharacterClass::Rogue, 3);
        let player = make_player(5, 5, 5, dagger(), levels);

        let ids: Vec<_> = registry
            .granted(Role::Attacker, &player)
            .map(|m| m.id)
            .collect();
        assert_eq!(
            ids,
            vec![
                "rogue_sneak_attack",
                "rogue_poison",
                "barbarian_rage",
                "barbarian_rage_fatigue"
            ]
        );
        assert_eq!(registry.granted(Role::Defender, &player).count(), 0);
    }

    #[test]
    fn test_unlearned_class_grants_nothing() {
        let registry = AbilityRegistry::standard();
        let player = make_player(5, 5, 5, dagger(), ClassLevels::new());
        assert_eq!(registry.granted(Role::Attacker, &player).count(), 0);
        assert_eq!(registry.granted(Role::Defender, &player).count(), 0);
    }

    #[test]
    fn test_sneak_attack_needs_higher_agility() {
        let registry = AbilityRegistry::standard();
        let goblin = sturdy_goblin();
        let quick = make_player(1, 5, 1, dagger(), levels(CharacterClass::Rogue, 1));
        let slow = make_player(1, 1, 1, dagger(), levels(CharacterClass::Rogue, 1));

        assert_eq!(
            evaluate(&registry, "rogue_sneak_attack", &quick, &goblin, 1),
            Some(Effect::Add(1))
        );
        assert_eq!(evaluate(&registry, "rogue_sneak_attack", &slow, &goblin, 1), None);
    }

    #[test]
    fn test_poison_requires_level_three() {
        let registry = AbilityRegistry::standard();
        let goblin = sturdy_goblin();
        let novice = make_player(1, 1, 1, dagger(), levels(CharacterClass::Rogue, 2));
        let master = make_player(1, 1, 1, dagger(), levels(CharacterClass::Rogue, 3));

        assert_eq!(evaluate(&registry, "rogue_poison", &novice, &goblin, 5), None);
        assert_eq!(evaluate(&registry, "rogue_poison", &master, &goblin, 1), None);
        assert_eq!(
            evaluate(&registry, "rogue_poison", &master, &goblin, 2),
            Some(Effect::Add(1))
        );
        assert_eq!(
            evaluate(&registry, "rogue_poison", &master, &goblin, 7),
            Some(Effect::Add(6))
        );
    }

    #[test]
    fn test_first_strike_variants() {
        let registry = AbilityRegistry::standard();
        let goblin = sturdy_goblin();
        let warrior = make_player(5, 5, 5, sword(), levels(CharacterClass::Warrior, 1));

        assert_eq!(
            evaluate(&registry, "warrior_first_strike", &warrior, &goblin, 1),
            Some(Effect::Add(3))
        );
        assert_eq!(evaluate(&registry, "warrior_first_strike", &warrior, &goblin, 2), None);

        let rules = BattleRules::default().with_first_strike(FirstStrike::DoubleTotal);
        let ctx = ModifierContext {
            attacker: &warrior,
            defender: &goblin,
            turn: 1,
            rules: &rules,
        };
        assert_eq!(
            registry.get("warrior_first_strike").unwrap().evaluate(&ctx),
            Some(Effect::Multiply(2))
        );
    }

    #[test]
    fn test_rage_then_fatigue() {
        let registry = AbilityRegistry::standard();
        let goblin = sturdy_goblin();
        let barbarian = make_player(5, 5, 5, sword(), levels(CharacterClass::Barbarian, 1));

        for turn in 1..=3 {
            assert_eq!(
                evaluate(&registry, "barbarian_rage", &barbarian, &goblin, turn),
                Some(Effect::Add(2))
            );
            assert_eq!(
                evaluate(&registry, "barbarian_rage_fatigue", &barbarian, &goblin, turn),
                None
            );
        }
        assert_eq!(evaluate(&registry, "barbarian_rage", &barbarian, &goblin, 4), None);
        assert_eq!(
            evaluate(&registry, "barbarian_rage_fatigue", &barbarian, &goblin, 4),
            Some(Effect::Add(-1))
        );
    }

    #[test]
    fn test_shield_needs_stronger_defender() {
        let registry = AbilityRegistry::standard();
        let goblin = sturdy_goblin();
        let veteran = make_player(5, 5, 5, sword(), levels(CharacterClass::Warrior, 2));
        let recruit = make_player(5, 5, 5, sword(), levels(CharacterClass::Warrior, 1));
        let weakling = make_player(1, 5, 5, sword(), levels(CharacterClass::Warrior, 2));

        assert_eq!(
            evaluate(&registry, "warrior_shield", &goblin, &veteran, 2),
            Some(Effect::Absorb(3))
        );
        assert_eq!(evaluate(&registry, "warrior_shield", &goblin, &recruit, 2), None);
        assert_eq!(evaluate(&registry, "warrior_shield", &goblin, &weakling, 2), None);
    }

    #[test]
    fn test_stoneskin_uses_defender_endurance() {
        let registry = AbilityRegistry::standard();
        let goblin = sturdy_goblin();
        let barbarian = make_player(5, 5, 4, sword(), levels(CharacterClass::Barbarian, 2));
        assert_eq!(
            evaluate(&registry, "barbarian_stoneskin", &goblin, &barbarian, 2),
            Some(Effect::Add(-4))
        );

        let golem = make_monster(Species::Golem, 10, 1, (3, 1, 3));
        let player = make_player(5, 5, 5, sword(), ClassLevels::new());
        assert_eq!(
            evaluate(&registry, "golem_stoneskin", &player, &golem, 1),
            Some(Effect::Add(-3))
        );
    }

    #[test]
    fn test_species_abilities_only_for_their_species() {
        let registry = AbilityRegistry::standard();
        let player = make_player(1, 1, 1, club(), ClassLevels::new());
        let goblin = sturdy_goblin();

        assert_eq!(evaluate(&registry, "skeleton_brittle_bones", &player, &goblin, 1), None);
        assert_eq!(evaluate(&registry, "dragon_breath", &goblin, &player, 3), None);
    }

    #[test]
    fn test_ghost_strikes_when_quicker() {
        let registry = AbilityRegistry::standard();
        let ghost = make_monster(Species::Ghost, 10, 2, (2, 3, 1));
        let slower = make_player(5, 2, 5, sword(), ClassLevels::new());
        let matched = make_player(5, 3, 5, sword(), ClassLevels::new());
        let quicker = make_player(5, 5, 5, sword(), ClassLevels::new());

        assert_eq!(
            evaluate(&registry, "ghost_sneak_attack", &ghost, &slower, 1),
            Some(Effect::Add(1))
        );
        assert_eq!(evaluate(&registry, "ghost_sneak_attack", &ghost, &matched, 1), None);
        assert_eq!(evaluate(&registry, "ghost_sneak_attack", &ghost, &quicker, 1), None);
    }

    #[test]
    fn test_dragon_breath_every_third_turn() {
        let registry = AbilityRegistry::standard();
        let dragon = make_monster(Species::Dragon, 20, 4, (3, 3, 3));
        let player = make_player(5, 5, 5, sword(), ClassLevels::new());

        assert_eq!(evaluate(&registry, "dragon_breath", &dragon, &player, 2), None);
        assert_eq!(
            evaluate(&registry, "dragon_breath", &dragon, &player, 3),
            Some(Effect::Add(3))
        );
        assert_eq!(
            evaluate(&registry, "dragon_breath", &dragon, &player, 6),
            Some(Effect::Add(3))
        );
    }

    #[test]
    fn test_weapon_type_defenses() {
        let registry = AbilityRegistry::standard();
        let skeleton = make_monster(Species::Skeleton, 10, 2, (2, 2, 1));
        let slime = make_monster(Species::Slime, 8, 1, (3, 1, 2));
        let axe = Weapon::new("Axe", 4, DamageType::Slashing);
        let crusher = make_player(5, 5, 5, club(), ClassLevels::new());
        let slasher = make_player(5, 5, 5, axe, ClassLevels::new());

        assert_eq!(
            evaluate(&registry, "skeleton_brittle_bones", &crusher, &skeleton, 1),
            Some(Effect::Multiply(2))
        );
        assert_eq!(evaluate(&registry, "skeleton_brittle_bones", &slasher, &skeleton, 1), None);
        assert_eq!(
            evaluate(&registry, "slime_slashing_immunity", &slasher, &slime, 1),
            Some(Effect::Add(-4))
        );
        assert_eq!(evaluate(&registry, "slime_slashing_immunity", &crusher, &slime, 1), None);
    }

    #[test]
    fn test_register_custom_modifier() {
        fn always_one(_: &ModifierContext<'_>) -> Option<Effect> {
            Some(Effect::Add(1))
        }

        let mut registry = AbilityRegistry::new();
        assert!(registry.is_empty());
        registry.register(AbilityModifier {
            id: "goblin_frenzy",
            label: "Frenzy",
            owner: Owner::Species(Species::Goblin),
            role: Role::Attacker,
            min_level: 0,
            condition: always_one,
        });
        assert_eq!(registry.len(), 1);

        let goblin = sturdy_goblin();
        assert_eq!(registry.granted(Role::Attacker, &goblin).count(), 1);
    }
}
