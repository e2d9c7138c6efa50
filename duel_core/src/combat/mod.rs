//! Combat - turn order, hit rolls, the battle state machine and its driver

mod dice;
mod hit;
mod initiative;
mod resolution;
mod result;
mod state;

pub use dice::{Dice, ScriptedDice};
pub use hit::{hit_chance, roll_to_hit};
pub use initiative::first_attacker;
pub use resolution::BattleEngine;
pub use result::BattleResult;
pub use state::{BattleState, HalfTurn, Matchup, Transition};
