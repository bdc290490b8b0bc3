use thiserror::Error;

pub mod record;

pub use record::{
    BattleId, BattleRecord, BoostRecord, CreatureStateRecord, MoveRecord, ProfileRecord,
    TurnRecord, battle_lines, parse_battle_lines, parse_battle_record,
};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid battle record: {0}")]
    InvalidRecord(#[from] serde_json::Error),

    #[error("Empty record")]
    EmptyRecord,
}
