//! Hit resolution - one roll decides whether an attack connects

use super::dice::Dice;

/// Roll to hit
///
/// Draws a uniform integer in `1..=attacker + defender`; the attack hits when
/// the roll beats the defender's agility, i.e. with chance
/// `attacker / (attacker + defender)`.
pub fn roll_to_hit<D: Dice + ?Sized>(
    attacker_agility: i32,
    defender_agility: i32,
    dice: &mut D,
) -> bool {
    let total = attacker_agility.saturating_add(defender_agility);
    let roll = dice.roll(1, total);
    roll > defender_agility
}

/// Chance in `[0, 1]` that an attack hits
pub fn hit_chance(attacker_agility: i32, defender_agility: i32) -> f64 {
    let total = attacker_agility as f64 + defender_agility as f64;
    if total <= 0.0 {
        return 0.0;
    }
    attacker_agility as f64 / total
}
