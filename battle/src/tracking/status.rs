//! Status-condition exposure

use std::collections::BTreeMap;

use super::TurnObserver;
use crate::tables::StatusPenalties;
use crate::types::{PerSide, Side, Status, Turn};

/// Counts turns spent under each status and sums their penalties
#[derive(Debug, Clone)]
pub struct StatusExposure<'a> {
    penalties: &'a StatusPenalties,
    penalty_total: PerSide<i64>,
    turns: PerSide<BTreeMap<Status, u32>>,
    fainted_turns: PerSide<u32>,
}

impl<'a> StatusExposure<'a> {
    pub fn new(penalties: &'a StatusPenalties) -> Self {
        Self {
            penalties,
            penalty_total: PerSide::default(),
            turns: PerSide::default(),
            fainted_turns: PerSide::default(),
        }
    }

    /// Summed per-turn penalty for a side
    pub fn penalty_total(&self, side: Side) -> i64 {
        self.penalty_total[side]
    }

    /// `p1 − p2` penalty total
    pub fn penalty_diff(&self) -> i64 {
        self.penalty_total[Side::P1] - self.penalty_total[Side::P2]
    }

    /// Turns a side's active pokemon showed `status`
    pub fn turns_with(&self, side: Side, status: Status) -> u32 {
        self.turns[side].get(&status).copied().unwrap_or(0)
    }

    /// Turns a side showed a faint signal (fainted status or 0 HP)
    pub fn fainted_turns(&self, side: Side) -> u32 {
        self.fainted_turns[side]
    }

    pub fn faint_diff(&self) -> i64 {
        self.fainted_turns[Side::P1] as i64 - self.fainted_turns[Side::P2] as i64
    }
}

impl TurnObserver for StatusExposure<'_> {
    fn observe(&mut self, turn: &Turn) {
        for side in Side::BOTH {
            let state = turn.state(side);

            self.penalty_total[side] += self.penalties.penalty(state.status);
            if let Some(status) = state.status {
                *self.turns[side].entry(status).or_default() += 1;
            }
            if state.is_fainted() {
                self.fainted_turns[side] += 1;
            }
        }
    }
}
