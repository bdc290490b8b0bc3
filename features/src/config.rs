//! Which feature groups to compute, and under which type chart

use std::collections::BTreeSet;

use kinesis_battle::ChartKind;
use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

/// A set of related feature columns computed together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureGroup {
    /// Mean base stats of player 1's roster, base stats of player 2's lead
    TeamSummary,
    Switching,
    Damage,
    Effectiveness,
    /// Super-effective moves aimed at player 1's active pokemon and player 2's lead
    SuperEffective,
    Coverage,
    Momentum,
    Status,
    MoveUsage,
    Boosts,
    Attrition,
}

impl FeatureGroup {
    pub const ALL: [FeatureGroup; 11] = [
        FeatureGroup::TeamSummary,
        FeatureGroup::Switching,
        FeatureGroup::Damage,
        FeatureGroup::Effectiveness,
        FeatureGroup::SuperEffective,
        FeatureGroup::Coverage,
        FeatureGroup::Momentum,
        FeatureGroup::Status,
        FeatureGroup::MoveUsage,
        FeatureGroup::Boosts,
        FeatureGroup::Attrition,
    ];

    /// Columns this group always emits
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            FeatureGroup::TeamSummary => &[
                "p1_mean_hp",
                "p1_mean_atk",
                "p1_mean_def",
                "p1_mean_spa",
                "p1_mean_spd",
                "p1_mean_spe",
                "p2_lead_hp",
                "p2_lead_atk",
                "p2_lead_def",
                "p2_lead_spa",
                "p2_lead_spd",
                "p2_lead_spe",
            ],
            FeatureGroup::Switching => &["switch_diff"],
            FeatureGroup::Damage => &["p1_net_damage", "p1_damage_ratio"],
            FeatureGroup::Effectiveness => &[
                "diff_x4_eff",
                "diff_x2_eff",
                "diff_x0_5_eff",
                "diff_x0_25_eff",
                "diff_stab",
            ],
            FeatureGroup::SuperEffective => {
                &["p1_super_effective_taken", "p2_lead_super_effective_taken"]
            }
            FeatureGroup::Coverage => &["diff_coverage_advantage"],
            FeatureGroup::Momentum => &["p1_momentum_score"],
            FeatureGroup::Status => &[
                "diff_status_penalties",
                "fainted_diff",
                "p1_freeze_turns",
                "p2_freeze_turns",
                "p1_sleep_turns",
                "p2_sleep_turns",
                "p1_paralysis_turns",
                "p2_paralysis_turns",
            ],
            FeatureGroup::MoveUsage => &["diff_accuracy", "diff_base_power", "diff_null_moves"],
            FeatureGroup::Boosts => &["diff_boosts_score"],
            FeatureGroup::Attrition => &[
                "p1_first_ko",
                "p2_first_ko",
                "p1_final_alive",
                "p2_final_alive",
                "p1_final_fainted",
                "p2_final_fainted",
                "p1_final_hp_sum",
                "p2_final_hp_sum",
            ],
        }
    }
}

/// Extractor configuration
///
/// Loaded from JSON such as
/// `{"groups": ["damage", "switching"], "chart": "gen1"}`; omitted keys
/// fall back to [`ExtractorConfig::full`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    pub groups: BTreeSet<FeatureGroup>,
    pub chart: ChartKind,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self::full()
    }
}

impl ExtractorConfig {
    /// Every feature group
    pub fn full() -> Self {
        Self {
            groups: FeatureGroup::ALL.into_iter().collect(),
            chart: ChartKind::default(),
        }
    }

    /// The reduced set used by the voting ensemble: team summary, status,
    /// move usage, effectiveness and attrition
    pub fn compact() -> Self {
        Self::full().only([
            FeatureGroup::TeamSummary,
            FeatureGroup::Status,
            FeatureGroup::MoveUsage,
            FeatureGroup::Effectiveness,
            FeatureGroup::Attrition,
        ])
    }

    pub fn from_json(json: &str) -> Result<Self, ExtractError> {
        serde_json::from_str(json).map_err(ExtractError::Config)
    }

    /// Enable a group
    pub fn with(mut self, group: FeatureGroup) -> Self {
        self.groups.insert(group);
        self
    }

    /// Disable a group
    pub fn without(mut self, group: FeatureGroup) -> Self {
        self.groups.remove(&group);
        self
    }

    /// Enable exactly these groups
    pub fn only(mut self, groups: impl IntoIterator<Item = FeatureGroup>) -> Self {
        self.groups = groups.into_iter().collect();
        self
    }

    pub fn with_chart(mut self, chart: ChartKind) -> Self {
        self.chart = chart;
        self
    }

    pub fn is_enabled(&self, group: FeatureGroup) -> bool {
        self.groups.contains(&group)
    }

    /// Feature columns produced under this config, sorted by name
    pub fn columns(&self) -> Vec<&'static str> {
        let mut columns: Vec<&'static str> = self
            .groups
            .iter()
            .flat_map(|g| g.columns().iter().copied())
            .collect();
        columns.sort_unstable();
        columns
    }
}
