//! Streak-based momentum score

use super::TurnObserver;
use crate::types::{PerSide, Side, Turn};

/// Rewards turns where player 1 takes less than it deals
///
/// Unlike [`DamageAccumulator`](super::DamageAccumulator) the HP baseline is
/// global and never resets on a switch, so the score follows raw per-turn
/// HP swings regardless of who is on the field.
#[derive(Debug, Clone, PartialEq)]
pub struct MomentumScorer {
    last_hp: PerSide<f64>,
    favorable_turns: u32,
    streak: u32,
    max_streak: u32,
}

impl MomentumScorer {
    pub fn new() -> Self {
        Self {
            last_hp: PerSide::new(1.0, 1.0),
            favorable_turns: 0,
            streak: 0,
            max_streak: 0,
        }
    }

    pub fn favorable_turns(&self) -> u32 {
        self.favorable_turns
    }

    pub fn max_streak(&self) -> u32 {
        self.max_streak
    }

    /// `favorable_turns + 0.5 * max_streak`
    pub fn score(&self) -> f64 {
        self.favorable_turns as f64 + 0.5 * self.max_streak as f64
    }
}

impl Default for MomentumScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnObserver for MomentumScorer {
    fn observe(&mut self, turn: &Turn) {
        let hp = PerSide::from_fn(|side| {
            turn.state(side)
                .hp_fraction
                .unwrap_or(self.last_hp[side])
        });

        let inflicted = (self.last_hp[Side::P2] - hp[Side::P2]).max(0.0);
        let received = (self.last_hp[Side::P1] - hp[Side::P1]).max(0.0);

        if inflicted > received {
            self.favorable_turns += 1;
            self.streak += 1;
            self.max_streak = self.max_streak.max(self.streak);
        } else {
            self.streak = 0;
        }

        self.last_hp = hp;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CreatureState;

    fn turn(p1_hp: f64, p2_hp: f64) -> Turn {
        Turn::new(0, CreatureState::new("a", p1_hp), CreatureState::new("b", p2_hp))
    }

    #[test]
    fn test_streaks() {
        let timeline = vec![
            turn(1.0, 0.8), // favorable
            turn(1.0, 0.6), // favorable
            turn(0.7, 0.6), // not
            turn(0.7, 0.3), // favorable
        ];
        let scorer = MomentumScorer::new().fold(&timeline);

        assert_eq!(scorer.favorable_turns(), 3);
        assert_eq!(scorer.max_streak(), 2);
        assert_eq!(scorer.score(), 4.0);
    }

    #[test]
    fn test_switch_in_at_full_hp_does_not_reset_baseline() {
        // P2 switches from a 0.2 HP pokemon to a fresh one: the raw HP rise is
        // not damage, and the next hit counts against the 1.0 reading
        let timeline = vec![turn(1.0, 0.2), turn(1.0, 1.0), turn(1.0, 0.9)];
        let scorer = MomentumScorer::new().fold(&timeline);

        assert_eq!(scorer.favorable_turns(), 2);
        assert_eq!(scorer.max_streak(), 1);
        assert_eq!(scorer.score(), 2.5);
    }

    #[test]
    fn test_even_trade_is_not_favorable() {
        let scorer = MomentumScorer::new().fold(&vec![turn(0.9, 0.9)]);
        assert_eq!(scorer.score(), 0.0);
    }

    #[test]
    fn test_empty_timeline() {
        assert_eq!(MomentumScorer::new().score(), 0.0);
    }
}
