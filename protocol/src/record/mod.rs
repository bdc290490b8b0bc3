mod battle;

pub use battle::{
    BattleId, BattleRecord, BoostRecord, CreatureStateRecord, MoveRecord, ProfileRecord,
    TurnRecord,
};

use crate::ParseError;

/// Parse a single line of a battle log file into a record
pub fn parse_battle_record(line: &str) -> Result<BattleRecord, ParseError> {
    let line = line.trim();

    if line.is_empty() {
        return Err(ParseError::EmptyRecord);
    }

    Ok(serde_json::from_str(line)?)
}

/// Non-blank lines of a line-delimited battle log, with 1-based line numbers
pub fn battle_lines(input: &str) -> impl Iterator<Item = (usize, &str)> + '_ {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| (idx + 1, line))
}

/// Parse every non-blank line of a line-delimited battle log
///
/// Yields `(line_number, result)` pairs so a bad record can be reported and
/// skipped without losing the rest of the file.
pub fn parse_battle_lines(
    input: &str,
) -> impl Iterator<Item = (usize, Result<BattleRecord, ParseError>)> + '_ {
    battle_lines(input).map(|(line, text)| (line, parse_battle_record(text)))
}
