//! End-of-battle roster attrition

use std::collections::BTreeMap;

use super::TurnObserver;
use crate::types::{PerSide, Side, Status, Turn};

/// Last known condition of one pokemon
#[derive(Debug, Clone, Copy, PartialEq)]
struct Snapshot {
    hp_fraction: f64,
    status: Option<Status>,
}

/// Final attrition figures for one side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttritionSummary {
    /// 1-based position of the first turn showing a faint, or `turns + 1`
    pub first_ko: u32,
    pub final_alive: u32,
    pub final_fainted: u32,
    /// Last known HP of every pokemon seen, summed
    pub final_hp_sum: f64,
}

/// Tracks every pokemon each side fields and where it was left
///
/// A pokemon enters at full HP the first time its name shows up. Its HP is
/// updated whenever the log reports one; its status is always overwritten,
/// so a pokemon that shows no status has recovered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attrition {
    rosters: PerSide<BTreeMap<String, Snapshot>>,
    first_ko: PerSide<Option<u32>>,
    turns: u32,
}

impl Attrition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(&self, side: Side) -> AttritionSummary {
        let roster = &self.rosters[side];
        let final_alive = roster
            .values()
            .filter(|s| s.status != Some(Status::Faint))
            .count() as u32;

        AttritionSummary {
            first_ko: self.first_ko[side].unwrap_or(self.turns + 1),
            final_alive,
            final_fainted: roster.len() as u32 - final_alive,
            final_hp_sum: roster.values().map(|s| s.hp_fraction.max(0.0)).sum(),
        }
    }
}

impl TurnObserver for Attrition {
    fn observe(&mut self, turn: &Turn) {
        self.turns += 1;

        for side in Side::BOTH {
            let state = turn.state(side);

            if state.is_fainted() && self.first_ko[side].is_none() {
                self.first_ko[side] = Some(self.turns);
            }

            let Some(name) = state.name.as_deref() else {
                continue;
            };
            let snapshot = self.rosters[side]
                .entry(name.to_string())
                .or_insert(Snapshot {
                    hp_fraction: 1.0,
                    status: None,
                });
            if let Some(hp) = state.hp_fraction {
                snapshot.hp_fraction = hp;
            }
            snapshot.status = state.status;
        }
    }
}
