//! Battle record types
//!
//! These types mirror the JSON structure of one line of a recorded battle
//! log. Nested fields are all optional on the wire; anything missing or
//! `null` falls back to a neutral default.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Battle identifier (numeric in most exports, occasionally a string)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(untagged)]
pub enum BattleId {
    Number(u64),
    Text(String),
}

impl fmt::Display for BattleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleId::Number(n) => write!(f, "{}", n),
            BattleId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One recorded battle
///
/// The top-level collections are kept as `Option` so that a record missing
/// its timeline or roster can be told apart from one where they are empty.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BattleRecord {
    #[serde(default)]
    pub battle_id: Option<BattleId>,

    /// Known result from player 1's perspective (absent for test batches)
    #[serde(default)]
    pub player_won: Option<bool>,

    /// Player 1's full disclosed team
    #[serde(default)]
    pub p1_team_details: Option<Vec<ProfileRecord>>,

    /// Player 2's opening pokemon, the only one known up front
    #[serde(default)]
    pub p2_lead_details: Option<ProfileRecord>,

    #[serde(default)]
    pub battle_timeline: Option<Vec<TurnRecord>>,
}

/// Static description of a team member
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ProfileRecord {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub level: Option<u32>,

    /// Type tags as exported, e.g. `["psychic", "notype"]`
    #[serde(default, deserialize_with = "null_as_default")]
    pub types: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub base_hp: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub base_atk: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub base_def: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub base_spa: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub base_spd: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub base_spe: f64,
}

/// One turn of the timeline
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct TurnRecord {
    #[serde(default)]
    pub turn: Option<u32>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub p1_pokemon_state: CreatureStateRecord,

    #[serde(default, deserialize_with = "null_as_default")]
    pub p2_pokemon_state: CreatureStateRecord,

    /// `null` when player 1 made no offensive move this turn
    #[serde(default)]
    pub p1_move_details: Option<MoveRecord>,

    #[serde(default)]
    pub p2_move_details: Option<MoveRecord>,
}

/// Snapshot of a side's active pokemon at the end of a turn
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct CreatureStateRecord {
    #[serde(default)]
    pub name: Option<String>,

    /// Remaining HP as a fraction of max (0.0 - 1.0)
    #[serde(default)]
    pub hp_pct: Option<f64>,

    /// Status tag: "nostatus", "brn", "frz", "par", "psn", "tox", "slp", "fnt"
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub effects: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub boosts: BoostRecord,
}

/// Treat an explicit `null` the same as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Stat stage changes keyed by stat tag ("atk", "def", "spa", "spd", "spe")
pub type BoostRecord = BTreeMap<String, i32>;

/// Details of the move a side used this turn
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct MoveRecord {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, rename = "type")]
    pub move_type: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub base_power: Option<f64>,

    #[serde(default)]
    pub accuracy: Option<f64>,

    #[serde(default)]
    pub priority: Option<i32>,
}

impl MoveRecord {
    /// Whether every field is missing (an empty `{}` on the wire)
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.move_type.is_none()
            && self.category.is_none()
            && self.base_power.is_none()
            && self.accuracy.is_none()
            && self.priority.is_none()
    }
}
