//! Super-effective hits taken

use super::TurnObserver;
use crate::tables::ReferenceTables;
use crate::types::{Battle, Side, Turn, Type};

/// Counts declared moves that were super effective against the defender
///
/// A move counts when its type beats at least one of the defender's types,
/// whatever the other type does. Player 1 is scored as the defender on the
/// field each turn; player 2 is always scored as its lead, the only pokemon
/// of theirs known up front.
#[derive(Debug, Clone)]
pub struct SuperEffectiveHits<'a> {
    tables: &'a ReferenceTables,
    battle: &'a Battle,
    p2_lead_types: Vec<Type>,
    p1_taken: u32,
    p2_lead_taken: u32,
}

impl<'a> SuperEffectiveHits<'a> {
    pub fn new(tables: &'a ReferenceTables, battle: &'a Battle) -> Self {
        let p2_lead_types = battle.types_of(battle.starting_name(Side::P2), &tables.species);
        Self {
            tables,
            battle,
            p2_lead_types,
            p1_taken: 0,
            p2_lead_taken: 0,
        }
    }

    /// Super-effective moves player 1's active pokemon was targeted with
    pub fn p1_taken(&self) -> u32 {
        self.p1_taken
    }

    /// Super-effective moves player 1 aimed at player 2's lead types
    pub fn p2_lead_taken(&self) -> u32 {
        self.p2_lead_taken
    }

    fn beats(&self, attack: Option<Type>, defenders: &[Type]) -> bool {
        let Some(attack) = attack else {
            return false;
        };
        defenders
            .iter()
            .any(|&defense| self.tables.chart.is_super_effective(attack, defense))
    }
}

impl TurnObserver for SuperEffectiveHits<'_> {
    fn observe(&mut self, turn: &Turn) {
        let p1_name = turn.state(Side::P1).name.as_deref();
        if let Some(details) = turn.move_of(Side::P2)
            && p1_name.is_some()
        {
            let p1_types = self.battle.types_of(p1_name, &self.tables.species);
            if self.beats(details.move_type, &p1_types) {
                self.p1_taken += 1;
            }
        }

        if let Some(details) = turn.move_of(Side::P1)
            && self.beats(details.move_type, &self.p2_lead_types)
        {
            self.p2_lead_taken += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BaseStats, CreatureProfile, CreatureState, MoveDetails};
    use kinesis_protocol::BattleId;

    fn battle(timeline: Vec<Turn>) -> Battle {
        Battle::new(
            BattleId::Number(1),
            vec![CreatureProfile::new(
                "Starmie",
                vec![Type::Water, Type::Psychic],
                BaseStats::default(),
            )],
            Some(CreatureProfile::new(
                "Golem",
                vec![Type::Rock, Type::Ground],
                BaseStats::default(),
            )),
            timeline,
        )
    }

    fn turn(p1: &str, p2: &str) -> Turn {
        Turn::new(1, CreatureState::new(p1, 1.0), CreatureState::new(p2, 1.0))
    }

    fn run(tables: &ReferenceTables, battle: &Battle) -> (u32, u32) {
        let hits = SuperEffectiveHits::new(tables, battle).fold(&battle.timeline);
        (hits.p1_taken(), hits.p2_lead_taken())
    }

    #[test]
    fn test_counts_hits_on_each_side() {
        // Jolteon's Thunderbolt beats Starmie's Water half
        // Starmie's Surf beats the Golem lead
        let tables = ReferenceTables::gen1();
        let b = battle(vec![
            turn("Starmie", "Jolteon")
                .with_move(Side::P1, MoveDetails::new(Type::Water, 95.0))
                .with_move(Side::P2, MoveDetails::new(Type::Electric, 95.0)),
            turn("Starmie", "Jolteon").with_move(Side::P2, MoveDetails::new(Type::Normal, 80.0)),
        ]);

        assert_eq!(run(&tables, &b), (1, 1));
    }

    #[test]
    fn test_lead_types_are_used_after_the_lead_leaves() {
        // Snorlax is on the field, but P1's Grass move still counts
        // against the Rock/Ground lead
        let tables = ReferenceTables::gen1();
        let b = battle(vec![
            turn("Starmie", "Snorlax").with_move(Side::P1, MoveDetails::new(Type::Grass, 90.0)),
        ]);

        assert_eq!(run(&tables, &b), (0, 1));
    }

    #[test]
    fn test_one_beaten_type_is_enough() {
        // Grass into Water/Psychic: 2x on Water, Psychic is neutral
        // Electric into Rock/Ground: Ground is immune, still not super effective
        let tables = ReferenceTables::gen1();
        let b = battle(vec![
            turn("Starmie", "Golem")
                .with_move(Side::P1, MoveDetails::new(Type::Electric, 95.0))
                .with_move(Side::P2, MoveDetails::new(Type::Grass, 90.0)),
        ]);

        assert_eq!(run(&tables, &b), (1, 0));
    }

    #[test]
    fn test_unnamed_defender_is_skipped() {
        let tables = ReferenceTables::gen1();
        let b = battle(vec![
            Turn::new(1, CreatureState::default(), CreatureState::new("Jolteon", 1.0))
                .with_move(Side::P2, MoveDetails::new(Type::Electric, 95.0)),
        ]);

        assert_eq!(run(&tables, &b), (0, 0));
    }
}
