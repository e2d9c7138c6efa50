//! Random source used by the hit resolver

use rand::Rng;

/// Source of uniform integer rolls
///
/// Every `rand::Rng` is a `Dice`, so callers can pass a thread RNG, a seeded
/// `ChaCha8Rng`, or a [`ScriptedDice`] for fixed outcomes.
pub trait Dice {
    /// Roll a uniform integer in `low..=high`
    fn roll(&mut self, low: i32, high: i32) -> i32;
}

impl<R: Rng + ?Sized> Dice for R {
    fn roll(&mut self, low: i32, high: i32) -> i32 {
        self.gen_range(low..=high)
    }
}

/// Replays a fixed sequence of rolls, cycling when exhausted
///
/// Each scripted value is clamped into the requested range, so `i32::MAX`
/// always rolls the top of the range and `i32::MIN` the bottom.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    rolls: Vec<i32>,
    next: usize,
}

impl ScriptedDice {
    /// Panics if `rolls` is empty
    pub fn new(rolls: Vec<i32>) -> Self {
        assert!(!rolls.is_empty(), "ScriptedDice needs at least one roll");
        ScriptedDice { rolls, next: 0 }
    }

    /// Every attack connects
    pub fn always_hit() -> Self {
        Self::new(vec![i32::MAX])
    }

    /// Every attack misses
    pub fn always_miss() -> Self {
        Self::new(vec![i32::MIN])
    }

    /// Hits and misses in the given order, cycling
    pub fn pattern(hits: &[bool]) -> Self {
        Self::new(
            hits.iter()
                .map(|hit| if *hit { i32::MAX } else { i32::MIN })
                .collect(),
        )
    }

    /// Number of rolls consumed so far
    pub fn rolls_made(&self) -> usize {
        self.next
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, low: i32, high: i32) -> i32 {
        let value = self.rolls[self.next % self.rolls.len()];
        self.next += 1;
        value.clamp(low, high)
    }
}
