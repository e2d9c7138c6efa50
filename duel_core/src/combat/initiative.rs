//! Turn order - decided once, before the first half-turn

use crate::combatant::Combatant;
use crate::types::Side;

/// Higher agility acts first; on a tie the character does
pub fn first_attacker(character: &Combatant, monster: &Combatant) -> Side {
    if monster.agility() > character.agility() {
        Side::Monster
    } else {
        Side::Character
    }
}
