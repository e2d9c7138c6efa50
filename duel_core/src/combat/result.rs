use serde::{Deserialize, Serialize};

use crate::log::BattleLog;
use crate::types::Side;

/// Terminal outcome of a battle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleResult {
    pub winner: Side,
    pub character_health: i32,
    pub monster_health: i32,
    pub log: BattleLog,
    /// Half-turns taken, including the deciding one
    pub turns_taken: u32,
}

impl BattleResult {
    pub fn character_won(&self) -> bool {
        self.winner == Side::Character
    }

    /// Serialize for the transport layer
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
