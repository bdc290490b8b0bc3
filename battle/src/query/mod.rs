//! Team-level queries over a whole battle
//!
//! Unlike the per-turn trackers, these look at rosters and the set of
//! pokemon a side revealed, not at the order things happened in.

mod matchup;

pub use matchup::{
    coverage_advantage, coverage_score, covers, observed_types, roster_types, team_coverage,
};
