//! Stat-stage pressure balance

use super::TurnObserver;
use crate::types::{Side, Turn};

/// Sums, turn by turn, how far each side's offensive boosts outweigh the
/// other's defensive ones
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoostBalance {
    total: i64,
}

impl BoostBalance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Player 1's summed pressure minus player 2's
    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn rate(&self, turns: usize) -> f64 {
        if turns == 0 {
            return 0.0;
        }
        self.total as f64 / turns as f64
    }
}

impl TurnObserver for BoostBalance {
    fn observe(&mut self, turn: &Turn) {
        let p1 = &turn.state(Side::P1).boosts;
        let p2 = &turn.state(Side::P2).boosts;
        self.total += (p1.pressure_against(p2) - p2.pressure_against(p1)) as i64;
    }
}
