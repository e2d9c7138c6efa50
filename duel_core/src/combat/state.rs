//! Battle state machine
//!
//! A `BattleState` is threaded by value through [`BattleState::step`]: each
//! half-turn consumes the old state and yields either the next state or the
//! finished [`BattleResult`]. Nothing outside the value is mutated.

use tracing::debug;

use super::dice::Dice;
use super::hit::roll_to_hit;
use super::initiative::first_attacker;
use super::result::BattleResult;
use crate::ability::{AbilityRegistry, ModifierContext};
use crate::combatant::Combatant;
use crate::config::BattleRules;
use crate::damage::{calculate_damage, DamageOutcome};
use crate::log::{BattleEvent, BattleLog};
use crate::types::Side;

/// Everything fixed for the length of a battle
#[derive(Debug, Clone, Copy)]
pub struct Matchup<'a> {
    pub character: &'a Combatant,
    pub monster: &'a Combatant,
    pub registry: &'a AbilityRegistry,
    pub rules: &'a BattleRules,
}

impl<'a> Matchup<'a> {
    pub fn combatant(&self, side: Side) -> &'a Combatant {
        match side {
            Side::Character => self.character,
            Side::Monster => self.monster,
        }
    }
}

/// Mutable-per-battle state, owned by a single resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleState {
    turn: u32,
    attacker: Side,
    character_health: i32,
    monster_health: i32,
    log: BattleLog,
}

/// What a single half-turn produced, before it is committed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HalfTurn {
    pub turn: u32,
    pub attacker: Side,
    /// `None` on a miss
    pub damage: Option<DamageOutcome>,
    /// Defender health after the hit
    pub defender_health: i32,
    pub events: Vec<BattleEvent>,
}

impl HalfTurn {
    pub fn hit(&self) -> bool {
        self.damage.is_some()
    }

    pub fn damage_dealt(&self) -> i32 {
        self.damage.as_ref().map_or(0, |d| d.total)
    }
}

/// Result of advancing the state machine by one half-turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Continue(BattleState),
    Finished(BattleResult),
}

impl BattleState {
    /// Fresh state: turn 1, initiative decided, opening line logged
    pub fn start(matchup: &Matchup<'_>) -> Self {
        let mut log = BattleLog::new();
        log.push(&BattleEvent::Start {
            character: matchup.character.name.clone(),
            character_health: matchup.character.current_health,
            monster: matchup.monster.name.clone(),
            monster_health: matchup.monster.current_health,
        });

        BattleState {
            turn: 1,
            attacker: first_attacker(matchup.character, matchup.monster),
            character_health: matchup.character.current_health,
            monster_health: matchup.monster.current_health,
            log,
        }
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Side acting in the current half-turn
    pub fn attacker(&self) -> Side {
        self.attacker
    }

    pub fn health(&self, side: Side) -> i32 {
        match side {
            Side::Character => self.character_health,
            Side::Monster => self.monster_health,
        }
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    /// Play out the current half-turn without committing it
    ///
    /// Consumes exactly one roll from `dice`.
    pub fn resolve_half_turn<D: Dice + ?Sized>(
        &self,
        matchup: &Matchup<'_>,
        dice: &mut D,
    ) -> HalfTurn {
        let attacker = matchup.combatant(self.attacker);
        let defender = matchup.combatant(self.attacker.opponent());
        let defender_health = self.health(self.attacker.opponent());

        let mut events = vec![BattleEvent::Announce {
            turn: self.turn,
            attacker: attacker.name.clone(),
        }];

        if !roll_to_hit(attacker.agility(), defender.agility(), dice) {
            events.push(BattleEvent::Miss);
            return HalfTurn {
                turn: self.turn,
                attacker: self.attacker,
                damage: None,
                defender_health,
                events,
            };
        }

        let ctx = ModifierContext {
            attacker,
            defender,
            turn: self.turn,
            rules: matchup.rules,
        };
        let outcome = calculate_damage(matchup.registry, &ctx);
        events.extend(outcome.applied.iter().map(|m| BattleEvent::Modifier {
            label: m.label,
            effect: m.effect,
        }));

        let remaining = defender_health.saturating_sub(outcome.total).max(0);
        if outcome.fully_absorbed() {
            events.push(BattleEvent::Absorbed);
        } else {
            events.push(BattleEvent::Hit {
                damage: outcome.total,
                defender: defender.name.clone(),
                remaining,
            });
        }

        HalfTurn {
            turn: self.turn,
            attacker: self.attacker,
            damage: Some(outcome),
            defender_health: remaining,
            events,
        }
    }

    /// Commit a resolved half-turn
    ///
    /// The only health that changes is the defender's, so the battle ends
    /// exactly when the acting side brings its opponent to zero.
    pub fn apply(mut self, matchup: &Matchup<'_>, half_turn: HalfTurn) -> Transition {
        let defender = half_turn.attacker.opponent();
        match defender {
            Side::Character => self.character_health = half_turn.defender_health,
            Side::Monster => self.monster_health = half_turn.defender_health,
        }
        self.log.extend(&half_turn.events);

        debug!(
            turn = half_turn.turn,
            attacker = %half_turn.attacker,
            hit = half_turn.hit(),
            damage = half_turn.damage_dealt(),
            character_health = self.character_health,
            monster_health = self.monster_health,
            "Half-turn resolved"
        );

        if half_turn.defender_health <= 0 {
            let winner = half_turn.attacker;
            self.log.push(&match winner {
                Side::Character => BattleEvent::Victory {
                    character: matchup.character.name.clone(),
                },
                Side::Monster => BattleEvent::Defeat {
                    character: matchup.character.name.clone(),
                },
            });
            return Transition::Finished(BattleResult {
                winner,
                character_health: self.character_health,
                monster_health: self.monster_health,
                log: self.log,
                turns_taken: half_turn.turn,
            });
        }

        self.turn += 1;
        self.attacker = self.attacker.opponent();
        Transition::Continue(self)
    }

    /// Resolve and commit the current half-turn
    pub fn step<D: Dice + ?Sized>(self, matchup: &Matchup<'_>, dice: &mut D) -> Transition {
        let half_turn = self.resolve_half_turn(matchup, dice);
        self.apply(matchup, half_turn)
    }
}
