//! Type-effectiveness tiers and same-type hits

use super::TurnObserver;
use crate::tables::ReferenceTables;
use crate::types::{Battle, MoveDetails, PerSide, Side, Turn, Type};

/// Discrete matchup multipliers worth counting
///
/// Neutral (1x) and immune (0x) hits fall outside every tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectivenessTier {
    Quadruple,
    Double,
    Half,
    Quarter,
}

impl EffectivenessTier {
    pub const ALL: [EffectivenessTier; 4] = [
        EffectivenessTier::Quadruple,
        EffectivenessTier::Double,
        EffectivenessTier::Half,
        EffectivenessTier::Quarter,
    ];

    /// Exact-value bucketing; chart products are exact powers of two
    pub fn from_multiplier(multiplier: f64) -> Option<Self> {
        if multiplier == 4.0 {
            Some(EffectivenessTier::Quadruple)
        } else if multiplier == 2.0 {
            Some(EffectivenessTier::Double)
        } else if multiplier == 0.5 {
            Some(EffectivenessTier::Half)
        } else if multiplier == 0.25 {
            Some(EffectivenessTier::Quarter)
        } else {
            None
        }
    }
}

/// Hit counts for one side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitCounts {
    pub x4: u32,
    pub x2: u32,
    pub x0_5: u32,
    pub x0_25: u32,
    pub stab: u32,
}

impl HitCounts {
    pub fn tier(&self, tier: EffectivenessTier) -> u32 {
        match tier {
            EffectivenessTier::Quadruple => self.x4,
            EffectivenessTier::Double => self.x2,
            EffectivenessTier::Half => self.x0_5,
            EffectivenessTier::Quarter => self.x0_25,
        }
    }

    fn record(&mut self, tier: EffectivenessTier) {
        match tier {
            EffectivenessTier::Quadruple => self.x4 += 1,
            EffectivenessTier::Double => self.x2 += 1,
            EffectivenessTier::Half => self.x0_5 += 1,
            EffectivenessTier::Quarter => self.x0_25 += 1,
        }
    }
}

/// Buckets each side's declared moves against the opposing active pokemon
///
/// Only moves with a reported accuracy are counted. Both the attacker's and
/// the defender's types are resolved from their names on the current turn.
#[derive(Debug, Clone)]
pub struct EffectivenessAccumulator<'a> {
    tables: &'a ReferenceTables,
    battle: &'a Battle,
    hits: PerSide<HitCounts>,
}

impl<'a> EffectivenessAccumulator<'a> {
    pub fn new(tables: &'a ReferenceTables, battle: &'a Battle) -> Self {
        Self {
            tables,
            battle,
            hits: PerSide::default(),
        }
    }

    pub fn hits(&self, side: Side) -> &HitCounts {
        &self.hits[side]
    }

    /// `(p1 − p2) / turns` for a tier, 0 when `turns` is 0
    pub fn tier_diff_rate(&self, tier: EffectivenessTier, turns: usize) -> f64 {
        diff_rate(self.hits.p1().tier(tier), self.hits.p2().tier(tier), turns)
    }

    /// `(p1 − p2) / turns` for same-type hits, 0 when `turns` is 0
    pub fn stab_diff_rate(&self, turns: usize) -> f64 {
        diff_rate(self.hits.p1().stab, self.hits.p2().stab, turns)
    }

    fn types_on_field(&self, turn: &Turn, side: Side) -> Vec<Type> {
        self.battle
            .types_of(turn.state(side).name.as_deref(), &self.tables.species)
    }

    fn score_move(&mut self, turn: &Turn, side: Side, details: &MoveDetails) {
        let attacker = self.types_on_field(turn, side);
        let defender = self.types_on_field(turn, side.opponent());

        // Unrecognised move types are neutral and never same-type
        let Some(move_type) = details.move_type else {
            return;
        };

        let hits = &mut self.hits[side];
        if attacker.contains(&move_type) {
            hits.stab += 1;
        }

        let multiplier = self.tables.chart.multiplier(move_type, &defender);
        if let Some(tier) = EffectivenessTier::from_multiplier(multiplier) {
            hits.record(tier);
        }
    }
}

fn diff_rate(p1: u32, p2: u32, turns: usize) -> f64 {
    if turns == 0 {
        return 0.0;
    }
    (p1 as f64 - p2 as f64) / turns as f64
}

impl TurnObserver for EffectivenessAccumulator<'_> {
    fn observe(&mut self, turn: &Turn) {
        for side in Side::BOTH {
            if let Some(details) = turn.move_of(side)
                && details.accuracy.is_some()
            {
                self.score_move(turn, side, details);
            }
        }
    }
}
