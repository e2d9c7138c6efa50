//! Damage calculation - turning an exchange into a final damage number

use super::{AppliedModifier, DamageOutcome};
use crate::ability::{AbilityRegistry, ModifierContext, Role};
use crate::combatant::Combatant;

/// Weapon damage plus strength
pub fn base_damage(attacker: &Combatant) -> i32 {
    attacker.weapon.damage.saturating_add(attacker.strength())
}

/// Run the damage pipeline for a hit that connected
///
/// 1. base = weapon damage + strength
/// 2. attacker-side modifiers of the attacker, in registration order
/// 3. defender-side modifiers of the defender, in registration order
/// 4. clamp to zero
pub fn calculate_damage(registry: &AbilityRegistry, ctx: &ModifierContext<'_>) -> DamageOutcome {
    let base = base_damage(ctx.attacker);
    let mut outcome = DamageOutcome {
        base,
        ..Default::default()
    };

    let mut total = base;
    for (role, holder) in [(Role::Attacker, ctx.attacker), (Role::Defender, ctx.defender)] {
        for modifier in registry.granted(role, holder) {
            let Some(effect) = modifier.evaluate(ctx) else {
                continue;
            };
            let before = total;
            total = effect.apply(total);
            outcome.applied.push(AppliedModifier {
                id: modifier.id,
                label: modifier.label,
                role,
                effect,
                before,
                after: total,
            });
        }
        if role == Role::Attacker {
            outcome.after_attacker = total;
        }
    }

    outcome.total = total.max(0);
    outcome
}
