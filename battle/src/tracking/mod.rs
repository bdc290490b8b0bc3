//! Per-turn trackers folded over a battle timeline
//!
//! Every tracker is a small state machine fed one [`Turn`] at a time, in
//! order. None of them look ahead or share state, so each can be driven on
//! its own from a hand-built timeline.

mod attrition;
mod boosts;
mod damage;
mod effectiveness;
mod momentum;
mod moves;
mod status;
mod super_effective;
mod tenure;

pub use attrition::{Attrition, AttritionSummary};
pub use boosts::BoostBalance;
pub use damage::{DamageAccumulator, DamageSummary, RATIO_EPSILON};
pub use effectiveness::{EffectivenessAccumulator, EffectivenessTier, HitCounts};
pub use momentum::MomentumScorer;
pub use moves::MoveUsage;
pub use status::StatusExposure;
pub use super_effective::SuperEffectiveHits;
pub use tenure::{SwitchTracker, Tenure, Transition};

use crate::types::Turn;

/// Something that consumes a timeline one turn at a time
pub trait TurnObserver {
    /// Fold one turn into the tracker's state
    fn observe(&mut self, turn: &Turn);

    /// Feed a whole sequence of turns, returning the final state
    fn fold<'a, I>(mut self, turns: I) -> Self
    where
        Self: Sized,
        I: IntoIterator<Item = &'a Turn>,
    {
        for turn in turns {
            self.observe(turn);
        }
        self
    }
}

/// Disabled trackers are simply skipped
impl<T: TurnObserver> TurnObserver for Option<T> {
    fn observe(&mut self, turn: &Turn) {
        if let Some(inner) = self {
            inner.observe(turn);
        }
    }
}
