//! Battle resolution - drive the state machine to a terminal outcome

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use super::dice::Dice;
use super::hit::hit_chance;
use super::result::BattleResult;
use super::state::{BattleState, Matchup, Transition};
use crate::ability::AbilityRegistry;
use crate::combatant::Combatant;
use crate::config::BattleRules;
use crate::error::BattleError;
use crate::types::Side;

/// Resolves battles between a character and a monster
///
/// The engine holds only immutable configuration, so one engine can resolve
/// any number of battles concurrently; each call gets its own state and
/// random source.
#[derive(Debug, Clone, Default)]
pub struct BattleEngine {
    registry: AbilityRegistry,
    rules: BattleRules,
}

impl BattleEngine {
    /// Engine with the stock abilities and the given rules
    pub fn new(rules: BattleRules) -> Self {
        BattleEngine {
            registry: AbilityRegistry::standard(),
            rules,
        }
    }

    /// Replace the ability registry
    pub fn with_registry(mut self, registry: AbilityRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn rules(&self) -> &BattleRules {
        &self.rules
    }

    pub fn registry(&self) -> &AbilityRegistry {
        &self.registry
    }

    /// Fight to the end
    ///
    /// The rules and both snapshots are validated before any turn runs. Returns
    /// [`BattleError::Timeout`] when `max_turns` half-turns pass without a
    /// winner.
    pub fn fight<D: Dice + ?Sized>(
        &self,
        character: &Combatant,
        monster: &Combatant,
        dice: &mut D,
    ) -> Result<BattleResult, BattleError> {
        self.rules
            .validate()
            .map_err(|e| BattleError::InvalidRules(e.to_string()))?;
        for (side, combatant) in [(Side::Character, character), (Side::Monster, monster)] {
            combatant
                .validate_for(side)
                .map_err(|reason| BattleError::InvalidCombatant { side, reason })?;
        }

        let matchup = Matchup {
            character,
            monster,
            registry: &self.registry,
            rules: &self.rules,
        };

        let mut state = BattleState::start(&matchup);
        debug!(
            character = %character.name,
            monster = %monster.name,
            first = %state.attacker(),
            character_hit_chance = hit_chance(character.agility(), monster.agility()),
            monster_hit_chance = hit_chance(monster.agility(), character.agility()),
            "Battle started"
        );
        while state.turn() <= self.rules.max_turns {
            state = match state.step(&matchup, dice) {
                Transition::Continue(next) => next,
                Transition::Finished(result) => {
                    info!(
                        character = %character.name,
                        monster = %monster.name,
                        winner = %result.winner,
                        turns = result.turns_taken,
                        "Battle finished"
                    );
                    return Ok(result);
                }
            };
        }

        warn!(
            character = %character.name,
            monster = %monster.name,
            max_turns = self.rules.max_turns,
            "Battle hit the turn cap"
        );
        Err(BattleError::Timeout {
            turns: self.rules.max_turns,
        })
    }

    /// Fight with a seeded ChaCha RNG; the same seed replays the same battle
    pub fn fight_seeded(
        &self,
        character: &Combatant,
        monster: &Combatant,
        seed: u64,
    ) -> Result<BattleResult, BattleError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.fight(character, monster, &mut rng)
    }
}
