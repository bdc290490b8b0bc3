//! Team-level type coverage

use std::collections::BTreeSet;

use crate::tables::ReferenceTables;
use crate::types::{Battle, Side, Type, TypeChart};

/// Check if an attacking type hits any of the defending types super effectively
pub fn covers(chart: &TypeChart, attack: Type, defenders: &BTreeSet<Type>) -> bool {
    defenders.iter().any(|&d| chart.is_super_effective(attack, d))
}

/// Number of offensive types that cover at least one defending type
pub fn coverage_score(chart: &TypeChart, offense: &BTreeSet<Type>, defense: &BTreeSet<Type>) -> u32 {
    offense
        .iter()
        .filter(|&&attack| covers(chart, attack, defense))
        .count() as u32
}

/// Player 1's coverage score minus player 2's
///
/// Each side's type set serves as both its offense and its defense, so
/// swapping the arguments negates the result.
pub fn coverage_advantage(chart: &TypeChart, p1: &BTreeSet<Type>, p2: &BTreeSet<Type>) -> i64 {
    coverage_score(chart, p1, p2) as i64 - coverage_score(chart, p2, p1) as i64
}

/// Every type on player 1's disclosed roster
pub fn roster_types(battle: &Battle) -> BTreeSet<Type> {
    battle
        .p1_roster
        .iter()
        .flat_map(|p| p.types.iter().copied())
        .collect()
}

/// Types of every pokemon a side actually fielded during the timeline
pub fn observed_types(battle: &Battle, side: Side, tables: &ReferenceTables) -> BTreeSet<Type> {
    battle
        .observed_names(side)
        .into_iter()
        .flat_map(|name| battle.types_of(Some(name), &tables.species))
        .collect()
}

/// Player 1's full roster against the player 2 pokemon seen in battle
pub fn team_coverage(battle: &Battle, tables: &ReferenceTables) -> i64 {
    coverage_advantage(
        &tables.chart,
        &roster_types(battle),
        &observed_types(battle, Side::P2, tables),
    )
}
