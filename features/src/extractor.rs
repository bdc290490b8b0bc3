//! Single-pass feature extraction for one battle

use std::sync::Arc;

use kinesis_battle::query::team_coverage;
use kinesis_battle::tracking::{
    Attrition, BoostBalance, DamageAccumulator, EffectivenessAccumulator, EffectivenessTier,
    MomentumScorer, MoveUsage, StatusExposure, SuperEffectiveHits, SwitchTracker, TurnObserver,
};
use kinesis_battle::{BaseStats, Battle, ReferenceTables, Side, Status, Turn};
use kinesis_protocol::BattleRecord;

use crate::config::{ExtractorConfig, FeatureGroup};
use crate::error::ExtractError;
use crate::record::{FeatureRecord, FeatureTable};

/// Turns battles into feature records
///
/// Cheap to clone; the reference tables are shared.
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    tables: Arc<ReferenceTables>,
    config: ExtractorConfig,
}

/// Every tracker a config can enable, `None` when its group is off
struct Trackers<'a> {
    switching: Option<SwitchTracker>,
    damage: Option<DamageAccumulator>,
    effectiveness: Option<EffectivenessAccumulator<'a>>,
    super_effective: Option<SuperEffectiveHits<'a>>,
    momentum: Option<MomentumScorer>,
    status: Option<StatusExposure<'a>>,
    moves: Option<MoveUsage>,
    boosts: Option<BoostBalance>,
    attrition: Option<Attrition>,
}

impl<'a> Trackers<'a> {
    fn new(config: &ExtractorConfig, tables: &'a ReferenceTables, battle: &'a Battle) -> Self {
        let on = |group| config.is_enabled(group);
        Self {
            switching: on(FeatureGroup::Switching).then(|| SwitchTracker::new(battle)),
            damage: on(FeatureGroup::Damage).then(|| DamageAccumulator::new(battle)),
            effectiveness: on(FeatureGroup::Effectiveness)
                .then(|| EffectivenessAccumulator::new(tables, battle)),
            super_effective: on(FeatureGroup::SuperEffective)
                .then(|| SuperEffectiveHits::new(tables, battle)),
            momentum: on(FeatureGroup::Momentum).then(MomentumScorer::new),
            status: on(FeatureGroup::Status).then(|| StatusExposure::new(&tables.penalties)),
            moves: on(FeatureGroup::MoveUsage).then(MoveUsage::new),
            boosts: on(FeatureGroup::Boosts).then(BoostBalance::new),
            attrition: on(FeatureGroup::Attrition).then(Attrition::new),
        }
    }
}

impl TurnObserver for Trackers<'_> {
    fn observe(&mut self, turn: &Turn) {
        self.switching.observe(turn);
        self.damage.observe(turn);
        self.effectiveness.observe(turn);
        self.super_effective.observe(turn);
        self.momentum.observe(turn);
        self.status.observe(turn);
        self.moves.observe(turn);
        self.boosts.observe(turn);
        self.attrition.observe(turn);
    }
}

impl FeatureExtractor {
    pub fn new(tables: Arc<ReferenceTables>, config: ExtractorConfig) -> Self {
        Self { tables, config }
    }

    /// Built-in reference tables for the config's chart
    pub fn from_config(config: ExtractorConfig) -> Self {
        let tables = ReferenceTables::for_chart(config.chart);
        Self::new(Arc::new(tables), config)
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    /// Empty table with this extractor's columns
    pub fn table(&self) -> FeatureTable {
        FeatureTable::new(self.config.columns())
    }

    /// Validate a parsed record and extract it
    pub fn extract_record(&self, record: BattleRecord) -> Result<FeatureRecord, ExtractError> {
        let battle = Battle::from_protocol(record)?;
        Ok(self.extract(&battle))
    }

    /// Extract one battle's features in a single pass over its timeline
    pub fn extract(&self, battle: &Battle) -> FeatureRecord {
        let tables = self.tables.as_ref();
        let turns = battle.len();

        let trackers = Trackers::new(&self.config, tables, battle).fold(&battle.timeline);

        let mut record = FeatureRecord::new(battle.id.clone(), battle.outcome);

        if self.config.is_enabled(FeatureGroup::TeamSummary) {
            write_team_summary(&mut record, battle);
        }

        if let Some(switching) = &trackers.switching {
            record.insert("switch_diff", switching.switch_diff() as f64);
        }

        if let Some(damage) = &trackers.damage {
            let summary = damage.summary();
            record.insert("p1_net_damage", summary.net_damage);
            record.insert("p1_damage_ratio", summary.damage_ratio);
        }

        if let Some(effectiveness) = &trackers.effectiveness {
            for tier in EffectivenessTier::ALL {
                record.insert(tier_column(tier), effectiveness.tier_diff_rate(tier, turns));
            }
            record.insert("diff_stab", effectiveness.stab_diff_rate(turns));
        }

        if let Some(hits) = &trackers.super_effective {
            record.insert("p1_super_effective_taken", hits.p1_taken() as f64);
            record.insert("p2_lead_super_effective_taken", hits.p2_lead_taken() as f64);
        }

        if self.config.is_enabled(FeatureGroup::Coverage) {
            record.insert("diff_coverage_advantage", team_coverage(battle, tables) as f64);
        }

        if let Some(momentum) = &trackers.momentum {
            record.insert("p1_momentum_score", momentum.score());
        }

        if let Some(status) = &trackers.status {
            record.insert("diff_status_penalties", status.penalty_diff() as f64);
            record.insert("fainted_diff", status.faint_diff() as f64);
            for side in Side::BOTH {
                for (status_kind, column) in EXPOSURE_COLUMNS {
                    record.insert(
                        column[side.index()],
                        status.turns_with(side, status_kind) as f64,
                    );
                }
            }
        }

        if let Some(moves) = &trackers.moves {
            record.insert("diff_accuracy", moves.accuracy_diff());
            record.insert("diff_base_power", moves.base_power_diff());
            record.insert("diff_null_moves", moves.null_move_diff_rate(turns));
        }

        if let Some(boosts) = &trackers.boosts {
            record.insert("diff_boosts_score", boosts.rate(turns));
        }

        if let Some(attrition) = &trackers.attrition {
            for side in Side::BOTH {
                let summary = attrition.summary(side);
                let [first_ko, alive, fainted, hp_sum] = ATTRITION_COLUMNS[side.index()];
                record.insert(first_ko, summary.first_ko as f64);
                record.insert(alive, summary.final_alive as f64);
                record.insert(fainted, summary.final_fainted as f64);
                record.insert(hp_sum, summary.final_hp_sum);
            }
        }

        tracing::debug!(
            battle_id = %battle.id,
            turns,
            features = record.features.len(),
            "Extracted battle"
        );

        record
    }
}

/// Per-status turn counters, as `[p1 column, p2 column]`
const EXPOSURE_COLUMNS: [(Status, [&str; 2]); 3] = [
    (Status::Freeze, ["p1_freeze_turns", "p2_freeze_turns"]),
    (Status::Sleep, ["p1_sleep_turns", "p2_sleep_turns"]),
    (Status::Paralysis, ["p1_paralysis_turns", "p2_paralysis_turns"]),
];

const ATTRITION_COLUMNS: [[&str; 4]; 2] = [
    ["p1_first_ko", "p1_final_alive", "p1_final_fainted", "p1_final_hp_sum"],
    ["p2_first_ko", "p2_final_alive", "p2_final_fainted", "p2_final_hp_sum"],
];

fn tier_column(tier: EffectivenessTier) -> &'static str {
    match tier {
        EffectivenessTier::Quadruple => "diff_x4_eff",
        EffectivenessTier::Double => "diff_x2_eff",
        EffectivenessTier::Half => "diff_x0_5_eff",
        EffectivenessTier::Quarter => "diff_x0_25_eff",
    }
}

fn write_team_summary(record: &mut FeatureRecord, battle: &Battle) {
    let mean = BaseStats::mean(battle.p1_roster.iter().map(|p| &p.stats));
    let lead = battle
        .p2_lead
        .as_ref()
        .map(|p| p.stats)
        .unwrap_or_default();

    record.insert("p1_mean_hp", mean.hp);
    record.insert("p1_mean_atk", mean.atk);
    record.insert("p1_mean_def", mean.def);
    record.insert("p1_mean_spa", mean.spa);
    record.insert("p1_mean_spd", mean.spd);
    record.insert("p1_mean_spe", mean.spe);

    record.insert("p2_lead_hp", lead.hp);
    record.insert("p2_lead_atk", lead.atk);
    record.insert("p2_lead_def", lead.def);
    record.insert("p2_lead_spa", lead.spa);
    record.insert("p2_lead_spd", lead.spd);
    record.insert("p2_lead_spe", lead.spe);
}
