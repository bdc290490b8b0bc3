//! Damage trade accounting from HP deltas

use super::TurnObserver;
use super::tenure::{Tenure, Transition};
use crate::types::{Battle, CreatureState, PerSide, Side, Turn};

/// Below this much total damage received, the damage ratio falls back to
/// the raw damage inflicted
pub const RATIO_EPSILON: f64 = 1e-7;

/// Final damage figures, from player 1's perspective
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DamageSummary {
    /// Inflicted minus received, summed over turns
    pub net_damage: f64,
    pub total_inflicted: f64,
    pub total_received: f64,
    /// Inflicted / received, or inflicted alone when nothing was received
    pub damage_ratio: f64,
}

/// Accumulates HP lost by each side, turn over turn
///
/// The baseline for a side resets to the incoming pokemon's current HP
/// whenever its active pokemon changes, so a switch never reads as damage.
#[derive(Debug, Clone, PartialEq)]
pub struct DamageAccumulator {
    tenures: PerSide<Tenure>,
    lost: PerSide<f64>,
    net_damage: f64,
}

impl DamageAccumulator {
    pub fn new(battle: &Battle) -> Self {
        Self {
            tenures: PerSide::from_fn(|side| Tenure::new(battle.starting_name(side))),
            lost: PerSide::default(),
            net_damage: 0.0,
        }
    }

    pub fn summary(&self) -> DamageSummary {
        let inflicted = self.lost[Side::P2];
        let received = self.lost[Side::P1];
        let damage_ratio = if received < RATIO_EPSILON {
            inflicted
        } else {
            inflicted / received
        };

        DamageSummary {
            net_damage: self.net_damage,
            total_inflicted: inflicted,
            total_received: received,
            damage_ratio,
        }
    }
}

/// HP lost since the previous turn within the same tenure
fn tenure_loss(tenure: &mut Tenure, state: &CreatureState) -> f64 {
    let baseline = tenure.hp_fraction;
    match tenure.advance(state) {
        Transition::Continued => (baseline - tenure.hp_fraction).max(0.0),
        Transition::Voluntary | Transition::Forced => 0.0,
    }
}

impl TurnObserver for DamageAccumulator {
    fn observe(&mut self, turn: &Turn) {
        let received = tenure_loss(&mut self.tenures[Side::P1], turn.state(Side::P1));
        let inflicted = tenure_loss(&mut self.tenures[Side::P2], turn.state(Side::P2));

        self.lost[Side::P1] += received;
        self.lost[Side::P2] += inflicted;
        self.net_damage += inflicted - received;
    }
}
