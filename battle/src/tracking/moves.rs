//! Declared-move usage totals

use super::TurnObserver;
use crate::types::{PerSide, Side, Turn};

/// Sums accuracy and base power of declared moves, and counts turns
/// where a side declared nothing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoveUsage {
    accuracy: PerSide<f64>,
    base_power: PerSide<f64>,
    null_moves: PerSide<u32>,
}

impl MoveUsage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accuracy(&self, side: Side) -> f64 {
        self.accuracy[side]
    }

    pub fn base_power(&self, side: Side) -> f64 {
        self.base_power[side]
    }

    pub fn null_moves(&self, side: Side) -> u32 {
        self.null_moves[side]
    }

    pub fn accuracy_diff(&self) -> f64 {
        self.accuracy[Side::P1] - self.accuracy[Side::P2]
    }

    pub fn base_power_diff(&self) -> f64 {
        self.base_power[Side::P1] - self.base_power[Side::P2]
    }

    /// Player 2's empty-turn rate minus player 1's; positive when player 1
    /// acted more often
    pub fn null_move_diff_rate(&self, turns: usize) -> f64 {
        if turns == 0 {
            return 0.0;
        }
        (self.null_moves[Side::P2] as f64 - self.null_moves[Side::P1] as f64) / turns as f64
    }
}

impl TurnObserver for MoveUsage {
    fn observe(&mut self, turn: &Turn) {
        for side in Side::BOTH {
            match turn.move_of(side) {
                Some(details) => {
                    self.accuracy[side] += details.accuracy.unwrap_or(0.0);
                    self.base_power[side] += details.base_power;
                }
                None => self.null_moves[side] += 1,
            }
        }
    }
}
