//! Battle log - the ordered, human-readable record of a battle

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ability::Effect;

/// Something that happened during a battle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    Start {
        character: String,
        character_health: i32,
        monster: String,
        monster_health: i32,
    },
    Announce {
        turn: u32,
        attacker: String,
    },
    Miss,
    Modifier {
        label: &'static str,
        effect: Effect,
    },
    Hit {
        damage: i32,
        defender: String,
        remaining: i32,
    },
    Absorbed,
    Victory {
        character: String,
    },
    Defeat {
        character: String,
    },
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleEvent::Start {
                character,
                character_health,
                monster,
                monster_health,
            } => write!(
                f,
                "The battle begins! {} ({} HP) vs {} ({} HP)",
                character, character_health, monster, monster_health
            ),
            BattleEvent::Announce { turn, attacker } => {
                write!(f, "Turn {}: {} attacks!", turn, attacker)
            }
            BattleEvent::Miss => write!(f, "Miss!"),
            BattleEvent::Modifier { label, effect } => write!(f, "{}! {}", label, effect),
            BattleEvent::Hit {
                damage,
                defender,
                remaining,
            } => write!(
                f,
                "Dealt {} damage! {} has {} HP left",
                damage, defender, remaining
            ),
            BattleEvent::Absorbed => write!(f, "The damage was fully absorbed!"),
            BattleEvent::Victory { character } => write!(f, "{} is victorious!", character),
            BattleEvent::Defeat { character } => write!(f, "{} has fallen...", character),
        }
    }
}

/// Append-only sequence of rendered battle events
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BattleLog {
    lines: Vec<String>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render and append an event
    pub fn push(&mut self, event: &BattleEvent) {
        self.lines.push(event.to_string());
    }

    /// Append every event in order
    pub fn extend<'a>(&mut self, events: impl IntoIterator<Item = &'a BattleEvent>) {
        for event in events {
            self.push(event);
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(|s| s.as_str())
    }

    /// JSON array of lines, as stored alongside a finished battle
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.lines)
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
