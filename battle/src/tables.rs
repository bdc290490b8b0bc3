//! Static reference tables shared by every battle
//!
//! Built once per process and never mutated afterwards, so a single
//! instance can be shared across worker threads behind an `Arc`.

use std::collections::HashMap;

use thiserror::Error;

use crate::types::{ChartKind, SpeciesTable, Status, TypeChart};

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Invalid species table: {0}")]
    InvalidSpecies(#[from] serde_json::Error),
}

/// Per-turn penalty for carrying a status condition
#[derive(Debug, Clone, PartialEq)]
pub struct StatusPenalties {
    penalties: HashMap<Status, i64>,
}

impl StatusPenalties {
    /// Penalty for a status (0 for healthy, fainted, or anything unlisted)
    pub fn penalty(&self, status: Option<Status>) -> i64 {
        status
            .and_then(|s| self.penalties.get(&s).copied())
            .unwrap_or(0)
    }

    pub fn set(&mut self, status: Status, penalty: i64) {
        self.penalties.insert(status, penalty);
    }
}

impl Default for StatusPenalties {
    /// Freeze and sleep take a pokemon out of the fight almost entirely;
    /// paralysis, toxic and the chip-damage statuses are progressively milder.
    fn default() -> Self {
        let penalties = HashMap::from([
            (Status::Freeze, -100),
            (Status::Sleep, -75),
            (Status::Paralysis, -40),
            (Status::BadPoison, -25),
            (Status::Burn, -15),
            (Status::Poison, -15),
        ]);
        Self { penalties }
    }
}

/// Type chart, species table and status penalties
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTables {
    pub chart: TypeChart,
    pub species: SpeciesTable,
    pub penalties: StatusPenalties,
}

impl ReferenceTables {
    pub fn new(chart: TypeChart, species: SpeciesTable, penalties: StatusPenalties) -> Self {
        Self {
            chart,
            species,
            penalties,
        }
    }

    /// Generation 1 chart and species
    pub fn gen1() -> Self {
        Self::new(
            TypeChart::gen1(),
            SpeciesTable::gen1(),
            StatusPenalties::default(),
        )
    }

    /// Built-in species with the chart for a ruleset
    pub fn for_chart(kind: ChartKind) -> Self {
        Self::new(
            TypeChart::for_kind(kind),
            SpeciesTable::gen1(),
            StatusPenalties::default(),
        )
    }

    /// Merge species entries from JSON over the built-in table
    pub fn with_species_json(mut self, json: &str) -> Result<Self, TableError> {
        self.species.extend(SpeciesTable::from_json(json)?);
        Ok(self)
    }
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::gen1()
    }
}
