//! Domain types for recorded battles

mod battle;
mod creature;
mod pokemon_type;
mod side;
mod species;
mod stats;
mod status;

pub use battle::{Battle, BattleError, Turn};
pub use creature::{CreatureProfile, CreatureState, MoveCategory, MoveDetails};
pub use pokemon_type::{ChartKind, Type, TypeChart};
pub use side::{PerSide, Side};
pub use species::{SpeciesEntry, SpeciesTable, species_id};
pub use stats::{BaseStats, Stat, StatStages};
pub use status::Status;
