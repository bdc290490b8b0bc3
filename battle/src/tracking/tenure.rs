//! Active-pokemon tenure and switch classification

use super::TurnObserver;
use crate::types::{Battle, CreatureState, PerSide, Side, Status, Turn};

/// How a side's active pokemon changed between two turns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Same pokemon as last turn (or the log didn't name one)
    Continued,
    /// A different pokemon came in while the previous one was still standing
    Voluntary,
    /// A different pokemon came in after the previous one fainted
    Forced,
}

/// Last observation of a side's active pokemon
///
/// A tenure spans the consecutive turns during which one pokemon stays in.
/// HP values are only comparable within a tenure.
#[derive(Debug, Clone, PartialEq)]
pub struct Tenure {
    pub name: Option<String>,
    pub hp_fraction: f64,
    pub status: Option<Status>,
}

impl Tenure {
    /// Start a tenure for a pokemon entering at full health
    pub fn new(name: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            hp_fraction: 1.0,
            status: None,
        }
    }

    /// Whether the tenure ended on a faint signal (fainted status or 0 HP)
    pub fn ended_in_faint(&self) -> bool {
        self.status == Some(Status::Faint) || self.hp_fraction == 0.0
    }

    /// Whether this snapshot shows a different pokemon
    ///
    /// A snapshot without a name never counts as a change.
    pub fn is_replaced_by(&self, state: &CreatureState) -> bool {
        match state.name.as_deref() {
            Some(name) => self.name.as_deref() != Some(name),
            None => false,
        }
    }

    /// Move the tenure forward to this turn's snapshot
    ///
    /// A missing HP reading carries the last one forward.
    pub fn advance(&mut self, state: &CreatureState) -> Transition {
        let hp_fraction = state.hp_fraction.unwrap_or(self.hp_fraction);

        let transition = if self.is_replaced_by(state) {
            let transition = if self.ended_in_faint() {
                Transition::Forced
            } else {
                Transition::Voluntary
            };
            self.name = state.name.clone();
            transition
        } else {
            Transition::Continued
        };

        self.hp_fraction = hp_fraction;
        self.status = state.status;
        transition
    }
}

/// Counts voluntary switches per side
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchTracker {
    tenures: PerSide<Tenure>,
    switches: PerSide<u32>,
    forced: PerSide<u32>,
}

impl SwitchTracker {
    /// Seed each side with its starting pokemon
    pub fn new(battle: &Battle) -> Self {
        Self {
            tenures: PerSide::from_fn(|side| Tenure::new(battle.starting_name(side))),
            switches: PerSide::default(),
            forced: PerSide::default(),
        }
    }

    /// Voluntary switches made by a side
    pub fn switches(&self, side: Side) -> u32 {
        self.switches[side]
    }

    /// Replacements a side had to make after a faint
    pub fn forced_replacements(&self, side: Side) -> u32 {
        self.forced[side]
    }

    /// Player 1's voluntary switches minus player 2's
    pub fn switch_diff(&self) -> i64 {
        self.switches[Side::P1] as i64 - self.switches[Side::P2] as i64
    }
}

impl TurnObserver for SwitchTracker {
    fn observe(&mut self, turn: &Turn) {
        for side in Side::BOTH {
            match self.tenures[side].advance(turn.state(side)) {
                Transition::Voluntary => self.switches[side] += 1,
                Transition::Forced => self.forced[side] += 1,
                Transition::Continued => {}
            }
        }
    }
}
