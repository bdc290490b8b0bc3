//! Domain types, reference tables and per-turn trackers for recorded battles.
//!
//! This crate turns a parsed battle log into a validated [`Battle`] and
//! provides the building blocks the feature extractor folds over it.
//!
//! # Overview
//!
//! `kinesis-battle` sits between `kinesis-protocol` (wire format) and the
//! extraction layer:
//!
//! ```text
//! kinesis-protocol (wire format)
//!        │
//!        ▼
//! kinesis-battle (domain types + tracking) ← THIS CRATE
//!        │
//!        ▼
//! kinesis-features (feature extraction)
//!        │
//!        ▼
//! kinesis-cli (JSONL in, CSV out)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Battle`], [`Turn`] - A validated battle and its timeline
//! - [`CreatureState`] - A side's active pokemon at the end of a turn
//! - [`MoveDetails`] - The move a side declared, if any
//! - [`Type`], [`TypeChart`] - Pokemon types and effectiveness charts
//! - [`Status`] - Non-volatile status conditions (Burn, Freeze, etc.)
//! - [`StatStages`] - Stat stage modifiers (-6 to +6)
//!
//! ## Reference Tables
//! - [`ReferenceTables`] - Type chart, species table and status penalties,
//!   built once and shared read-only
//!
//! ## Tracking
//! - [`TurnObserver`] - A state machine fed one turn at a time
//! - [`SwitchTracker`], [`DamageAccumulator`], [`EffectivenessAccumulator`],
//!   [`MomentumScorer`] and friends
//!
//! # Example Usage
//!
//! ```ignore
//! use kinesis_battle::{Battle, DamageAccumulator, SwitchTracker, TurnObserver};
//! use kinesis_protocol::parse_battle_record;
//!
//! let battle = Battle::from_protocol(parse_battle_record(line)?)?;
//!
//! let switches = SwitchTracker::new(&battle).fold(&battle.timeline);
//! let damage = DamageAccumulator::new(&battle).fold(&battle.timeline);
//!
//! println!("switch diff: {}", switches.switch_diff());
//! println!("net damage: {}", damage.summary().net_damage);
//! ```

pub mod query;
pub mod tables;
pub mod tracking;
pub mod types;

// Re-export main types at crate root for convenience
pub use tables::{ReferenceTables, StatusPenalties, TableError};
pub use tracking::{
    Attrition, AttritionSummary, BoostBalance, DamageAccumulator, DamageSummary,
    EffectivenessAccumulator, EffectivenessTier, HitCounts, MomentumScorer, MoveUsage,
    StatusExposure, SuperEffectiveHits, SwitchTracker, TurnObserver,
};
pub use types::{
    BaseStats, Battle, BattleError, ChartKind, CreatureProfile, CreatureState, MoveDetails,
    PerSide, Side, SpeciesTable, Stat, StatStages, Status, Turn, Type, TypeChart,
};

// Re-export commonly used protocol types
pub use kinesis_protocol::BattleId;
