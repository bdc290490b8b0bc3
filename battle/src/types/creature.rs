//! Creature profiles, per-turn snapshots and move details

use kinesis_protocol::{CreatureStateRecord, MoveRecord, ProfileRecord};

use super::pokemon_type::Type;
use super::stats::{BaseStats, StatStages};
use super::status::Status;

/// Static description of a team member (doesn't change during battle)
#[derive(Debug, Clone, PartialEq)]
pub struct CreatureProfile {
    /// Species name as it appears in the timeline
    pub name: String,

    /// Level, if disclosed
    pub level: Option<u32>,

    /// Up to two types, without the "notype" sentinel
    pub types: Vec<Type>,

    pub stats: BaseStats,
}

impl CreatureProfile {
    pub fn new(name: impl Into<String>, types: Vec<Type>, stats: BaseStats) -> Self {
        Self {
            name: name.into(),
            level: None,
            types,
            stats,
        }
    }

    /// Create from a log profile
    pub fn from_protocol(record: &ProfileRecord) -> Self {
        Self {
            name: record.name.clone().unwrap_or_default(),
            level: record.level,
            types: Type::parse_tags(record.types.iter().map(String::as_str)),
            stats: BaseStats {
                hp: record.base_hp,
                atk: record.base_atk,
                def: record.base_def,
                spa: record.base_spa,
                spd: record.base_spd,
                spe: record.base_spe,
            },
        }
    }
}

/// A side's active pokemon as observed at the end of one turn
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreatureState {
    /// Species name (`None` when the log omitted it)
    pub name: Option<String>,

    /// Remaining HP fraction, never negative (`None` when not reported)
    pub hp_fraction: Option<f64>,

    /// Status condition, `None` for healthy
    pub status: Option<Status>,

    pub boosts: StatStages,
}

impl CreatureState {
    pub fn new(name: impl Into<String>, hp_fraction: f64) -> Self {
        Self {
            name: Some(name.into()),
            hp_fraction: Some(hp_fraction.max(0.0)),
            status: None,
            boosts: StatStages::new(),
        }
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_boosts(mut self, boosts: StatStages) -> Self {
        self.boosts = boosts;
        self
    }

    /// Create from a log snapshot
    pub fn from_protocol(record: &CreatureStateRecord) -> Self {
        Self {
            name: record.name.clone().filter(|n| !n.is_empty()),
            hp_fraction: record.hp_pct.map(|hp| hp.max(0.0)),
            status: record.status.as_deref().and_then(Status::from_protocol),
            boosts: StatStages::from_protocol(&record.boosts),
        }
    }

    /// Whether this snapshot signals a faint
    ///
    /// Logs sometimes show 0 HP a turn before the status flips to fainted,
    /// so either signal counts.
    pub fn is_fainted(&self) -> bool {
        self.status == Some(Status::Faint) || self.hp_fraction == Some(0.0)
    }
}

/// Move damage category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

impl MoveCategory {
    pub fn from_protocol(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "physical" => Some(MoveCategory::Physical),
            "special" => Some(MoveCategory::Special),
            "status" => Some(MoveCategory::Status),
            _ => None,
        }
    }
}

/// Details of the move a side used in a turn
#[derive(Debug, Clone, PartialEq)]
pub struct MoveDetails {
    pub name: Option<String>,

    /// Move type (`None` when the tag isn't a known type)
    pub move_type: Option<Type>,

    pub category: Option<MoveCategory>,

    pub base_power: f64,

    /// Accuracy as logged; `None` for moves that never miss or weren't reported
    pub accuracy: Option<f64>,

    pub priority: i32,
}

impl MoveDetails {
    pub fn new(move_type: Type, base_power: f64) -> Self {
        Self {
            name: None,
            move_type: Some(move_type),
            category: None,
            base_power,
            accuracy: Some(1.0),
            priority: 0,
        }
    }

    pub fn with_accuracy(mut self, accuracy: Option<f64>) -> Self {
        self.accuracy = accuracy;
        self
    }

    /// Create from a log move, treating an empty `{}` as no move at all
    pub fn from_protocol(record: &MoveRecord) -> Option<Self> {
        if record.is_empty() {
            return None;
        }

        Some(Self {
            name: record.name.clone(),
            move_type: record.move_type.as_deref().and_then(Type::from_protocol),
            category: record.category.as_deref().and_then(MoveCategory::from_protocol),
            base_power: record.base_power.unwrap_or(0.0),
            accuracy: record.accuracy,
            priority: record.priority.unwrap_or(0),
        })
    }
}
