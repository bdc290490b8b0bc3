//! Pokemon type system and effectiveness charts

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Pokemon types (18 types as of Gen 6+)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl Type {
    /// All 18 Pokemon types
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [Type] {
        &Self::ALL
    }

    /// Parse from a log type tag (case-insensitive)
    ///
    /// The "notype" sentinel used for single-typed pokemon parses to `None`,
    /// as does any tag this chart doesn't know.
    pub fn from_protocol(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Some(Type::Normal),
            "fire" => Some(Type::Fire),
            "water" => Some(Type::Water),
            "electric" => Some(Type::Electric),
            "grass" => Some(Type::Grass),
            "ice" => Some(Type::Ice),
            "fighting" => Some(Type::Fighting),
            "poison" => Some(Type::Poison),
            "ground" => Some(Type::Ground),
            "flying" => Some(Type::Flying),
            "psychic" => Some(Type::Psychic),
            "bug" => Some(Type::Bug),
            "rock" => Some(Type::Rock),
            "ghost" => Some(Type::Ghost),
            "dragon" => Some(Type::Dragon),
            "dark" => Some(Type::Dark),
            "steel" => Some(Type::Steel),
            "fairy" => Some(Type::Fairy),
            _ => None,
        }
    }

    /// Parse a list of type tags, dropping sentinels and duplicates
    pub fn parse_tags<'a, I>(tags: I) -> Vec<Type>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut types = Vec::new();
        for t in tags.into_iter().filter_map(Type::from_protocol) {
            if !types.contains(&t) {
                types.push(t);
            }
        }
        types
    }

    /// Convert to canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which ruleset's type chart to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Generation 1 (15 types; Ghost can't touch Psychic, Bug and Poison hit each other)
    #[default]
    Gen1,
    /// Generation 6 onwards (18 types)
    Modern,
}

impl FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gen1" | "rby" => Ok(ChartKind::Gen1),
            "modern" | "gen6" | "gen9" => Ok(ChartKind::Modern),
            other => Err(format!("unknown chart kind: {other}")),
        }
    }
}

/// Sparse type effectiveness chart
///
/// Only non-neutral matchups are stored. An attacking type with no row at
/// all is treated as entirely neutral, and a missing entry in a known row
/// contributes 1.0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeChart {
    rows: HashMap<Type, HashMap<Type, f64>>,
}

impl TypeChart {
    /// Create an empty chart (everything neutral)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the chart for a ruleset
    pub fn for_kind(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Gen1 => Self::gen1(),
            ChartKind::Modern => Self::modern(),
        }
    }

    /// Generation 1 chart
    pub fn gen1() -> Self {
        let mut chart = Self::new();
        for &(attack, defense, multiplier) in GEN1_MATCHUPS {
            chart.insert(attack, defense, multiplier);
        }
        chart
    }

    /// Generation 6+ chart
    pub fn modern() -> Self {
        let mut chart = Self::new();
        for attack in Type::all() {
            for defense in Type::all() {
                let multiplier = MODERN_TYPE_CHART[*attack as usize][*defense as usize];
                if multiplier != 1.0 {
                    chart.insert(*attack, *defense, multiplier);
                }
            }
        }
        chart
    }

    /// Record a matchup
    pub fn insert(&mut self, attack: Type, defense: Type, multiplier: f64) {
        self.rows.entry(attack).or_default().insert(defense, multiplier);
    }

    /// Whether the chart has any matchups for this attacking type
    pub fn knows(&self, attack: Type) -> bool {
        self.rows.contains_key(&attack)
    }

    /// Recorded multiplier for a single matchup, if the chart lists one
    pub fn entry(&self, attack: Type, defense: Type) -> Option<f64> {
        self.rows.get(&attack)?.get(&defense).copied()
    }

    /// Effectiveness against a single defending type
    pub fn effectiveness(&self, attack: Type, defense: Type) -> f64 {
        self.entry(attack, defense).unwrap_or(1.0)
    }

    /// Effectiveness against multiple defending types (multiplied)
    pub fn multiplier(&self, attack: Type, defenders: &[Type]) -> f64 {
        match self.rows.get(&attack) {
            Some(row) => defenders
                .iter()
                .map(|d| row.get(d).copied().unwrap_or(1.0))
                .product(),
            None => 1.0,
        }
    }

    /// Whether the attacking type hits this defending type super effectively
    pub fn is_super_effective(&self, attack: Type, defense: Type) -> bool {
        self.effectiveness(attack, defense) > 1.0
    }
}

/// Non-neutral Generation 1 matchups as (attacking, defending, multiplier)
#[rustfmt::skip]
static GEN1_MATCHUPS: &[(Type, Type, f64)] = &[
    (Type::Normal, Type::Rock, 0.5), (Type::Normal, Type::Ghost, 0.0),

    (Type::Fire, Type::Fire, 0.5), (Type::Fire, Type::Water, 0.5), (Type::Fire, Type::Grass, 2.0),
    (Type::Fire, Type::Ice, 2.0), (Type::Fire, Type::Bug, 2.0), (Type::Fire, Type::Rock, 0.5),
    (Type::Fire, Type::Dragon, 0.5),

    (Type::Water, Type::Fire, 2.0), (Type::Water, Type::Water, 0.5), (Type::Water, Type::Grass, 0.5),
    (Type::Water, Type::Ground, 2.0), (Type::Water, Type::Rock, 2.0), (Type::Water, Type::Dragon, 0.5),

    (Type::Electric, Type::Water, 2.0), (Type::Electric, Type::Electric, 0.5),
    (Type::Electric, Type::Grass, 0.5), (Type::Electric, Type::Ground, 0.0),
    (Type::Electric, Type::Flying, 2.0), (Type::Electric, Type::Dragon, 0.5),

    (Type::Grass, Type::Fire, 0.5), (Type::Grass, Type::Water, 2.0), (Type::Grass, Type::Grass, 0.5),
    (Type::Grass, Type::Poison, 0.5), (Type::Grass, Type::Ground, 2.0), (Type::Grass, Type::Flying, 0.5),
    (Type::Grass, Type::Bug, 0.5), (Type::Grass, Type::Rock, 2.0), (Type::Grass, Type::Dragon, 0.5),

    (Type::Ice, Type::Water, 0.5), (Type::Ice, Type::Grass, 2.0), (Type::Ice, Type::Ice, 0.5),
    (Type::Ice, Type::Ground, 2.0), (Type::Ice, Type::Flying, 2.0), (Type::Ice, Type::Dragon, 2.0),

    (Type::Fighting, Type::Normal, 2.0), (Type::Fighting, Type::Ice, 2.0),
    (Type::Fighting, Type::Poison, 0.5), (Type::Fighting, Type::Flying, 0.5),
    (Type::Fighting, Type::Psychic, 0.5), (Type::Fighting, Type::Bug, 0.5),
    (Type::Fighting, Type::Rock, 2.0), (Type::Fighting, Type::Ghost, 0.0),

    (Type::Poison, Type::Grass, 2.0), (Type::Poison, Type::Poison, 0.5), (Type::Poison, Type::Ground, 0.5),
    (Type::Poison, Type::Bug, 2.0), (Type::Poison, Type::Rock, 0.5), (Type::Poison, Type::Ghost, 0.5),

    (Type::Ground, Type::Fire, 2.0), (Type::Ground, Type::Electric, 2.0), (Type::Ground, Type::Grass, 0.5),
    (Type::Ground, Type::Poison, 2.0), (Type::Ground, Type::Flying, 0.0), (Type::Ground, Type::Bug, 0.5),
    (Type::Ground, Type::Rock, 2.0),

    (Type::Flying, Type::Electric, 0.5), (Type::Flying, Type::Grass, 2.0),
    (Type::Flying, Type::Fighting, 2.0), (Type::Flying, Type::Bug, 2.0), (Type::Flying, Type::Rock, 0.5),

    (Type::Psychic, Type::Fighting, 2.0), (Type::Psychic, Type::Poison, 2.0),
    (Type::Psychic, Type::Psychic, 0.5),

    (Type::Bug, Type::Fire, 0.5), (Type::Bug, Type::Grass, 2.0), (Type::Bug, Type::Fighting, 0.5),
    (Type::Bug, Type::Poison, 2.0), (Type::Bug, Type::Flying, 0.5), (Type::Bug, Type::Psychic, 2.0),
    (Type::Bug, Type::Ghost, 0.5),

    (Type::Rock, Type::Fire, 2.0), (Type::Rock, Type::Ice, 2.0), (Type::Rock, Type::Fighting, 0.5),
    (Type::Rock, Type::Ground, 0.5), (Type::Rock, Type::Flying, 2.0), (Type::Rock, Type::Bug, 2.0),

    (Type::Ghost, Type::Normal, 0.0), (Type::Ghost, Type::Psychic, 0.0), (Type::Ghost, Type::Ghost, 2.0),

    (Type::Dragon, Type::Dragon, 2.0),
];

/// 18x18 type effectiveness chart
/// Row = attacking type, Column = defending type
/// Values: 0.0 = immune, 0.5 = not very effective, 1.0 = neutral, 2.0 = super effective
///
/// Order: Normal, Fire, Water, Electric, Grass, Ice, Fighting, Poison, Ground,
///        Flying, Psychic, Bug, Rock, Ghost, Dragon, Dark, Steel, Fairy
#[rustfmt::skip]
static MODERN_TYPE_CHART: [[f64; 18]; 18] = [
    // Normal attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 0.0, 1.0, 1.0, 0.5, 1.0],
    // Fire attacking
    [1.0, 0.5, 0.5, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5, 1.0, 2.0, 1.0],
    // Water attacking
    [1.0, 2.0, 0.5, 1.0, 0.5, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0, 1.0],
    // Electric attacking
    [1.0, 1.0, 2.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0],
    // Grass attacking
    [1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 1.0, 0.5, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 0.5, 1.0],
    // Ice attacking
    [1.0, 0.5, 0.5, 1.0, 2.0, 0.5, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0],
    // Fighting attacking
    [2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 0.5, 0.5, 0.5, 2.0, 0.0, 1.0, 2.0, 2.0, 0.5],
    // Poison attacking
    [1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 0.0, 2.0],
    // Ground attacking
    [1.0, 2.0, 1.0, 2.0, 0.5, 1.0, 1.0, 2.0, 1.0, 0.0, 1.0, 0.5, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0],
    // Flying attacking
    [1.0, 1.0, 1.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 0.5, 1.0],
    // Psychic attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 0.0, 0.5, 1.0],
    // Bug attacking
    [1.0, 0.5, 1.0, 1.0, 2.0, 1.0, 0.5, 0.5, 1.0, 0.5, 2.0, 1.0, 1.0, 0.5, 1.0, 2.0, 0.5, 0.5],
    // Rock attacking
    [1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0],
    // Ghost attacking
    [0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0],
    // Dragon attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 0.0],
    // Dark attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 0.5],
    // Steel attacking
    [1.0, 0.5, 0.5, 0.5, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 0.5, 2.0],
    // Fairy attacking
    [1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 0.5, 1.0],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gen1_super_effective() {
        let chart = TypeChart::gen1();
        assert_eq!(chart.effectiveness(Type::Water, Type::Fire), 2.0);
        assert_eq!(chart.effectiveness(Type::Electric, Type::Water), 2.0);
        assert_eq!(chart.effectiveness(Type::Psychic, Type::Poison), 2.0);
        assert_eq!(chart.effectiveness(Type::Bug, Type::Poison), 2.0);
        assert_eq!(chart.effectiveness(Type::Poison, Type::Bug), 2.0);
    }

    #[test]
    fn test_gen1_differs_from_modern() {
        let gen1 = TypeChart::gen1();
        let modern = TypeChart::modern();

        assert_eq!(gen1.effectiveness(Type::Ghost, Type::Psychic), 0.0);
        assert_eq!(modern.effectiveness(Type::Ghost, Type::Psychic), 2.0);

        assert_eq!(gen1.effectiveness(Type::Ice, Type::Fire), 1.0);
        assert_eq!(modern.effectiveness(Type::Ice, Type::Fire), 0.5);
    }

    #[test]
    fn test_gen1_has_no_rows_for_later_types() {
        let chart = TypeChart::gen1();
        assert!(!chart.knows(Type::Dark));
        assert!(!chart.knows(Type::Steel));
        assert!(!chart.knows(Type::Fairy));
        assert_eq!(chart.multiplier(Type::Dark, &[Type::Psychic, Type::Ghost]), 1.0);
    }

    #[test]
    fn test_immunities() {
        let chart = TypeChart::gen1();
        assert_eq!(chart.effectiveness(Type::Normal, Type::Ghost), 0.0);
        assert_eq!(chart.effectiveness(Type::Electric, Type::Ground), 0.0);
        assert_eq!(chart.effectiveness(Type::Ground, Type::Flying), 0.0);
    }

    #[test]
    fn test_multiplier_dual_type() {
        let chart = TypeChart::gen1();
        // Ice vs Dragon/Flying = 4x
        assert_eq!(chart.multiplier(Type::Ice, &[Type::Dragon, Type::Flying]), 4.0);
        // Grass vs Grass/Poison = 0.25x
        assert_eq!(chart.multiplier(Type::Grass, &[Type::Grass, Type::Poison]), 0.25);
        // Electric vs Water/Flying = 4x
        assert_eq!(chart.multiplier(Type::Electric, &[Type::Water, Type::Flying]), 4.0);
        // Ground vs Rock/Flying = 0x
        assert_eq!(chart.multiplier(Type::Ground, &[Type::Rock, Type::Flying]), 0.0);
    }

    #[test]
    fn test_multiplier_missing_entries_are_neutral() {
        let chart = TypeChart::gen1();
        assert_eq!(chart.multiplier(Type::Normal, &[Type::Water]), 1.0);
        assert_eq!(chart.multiplier(Type::Fire, &[]), 1.0);
        assert_eq!(TypeChart::new().multiplier(Type::Fire, &[Type::Grass]), 1.0);
    }

    #[test]
    fn test_modern_matches_matrix() {
        let chart = TypeChart::modern();
        assert_eq!(chart.multiplier(Type::Fire, &[Type::Grass, Type::Steel]), 4.0);
        assert_eq!(chart.multiplier(Type::Fire, &[Type::Water, Type::Rock]), 0.25);
        assert_eq!(chart.effectiveness(Type::Dragon, Type::Fairy), 0.0);
        assert_eq!(chart.entry(Type::Normal, Type::Water), None);
    }

    #[test]
    fn test_type_from_protocol() {
        assert_eq!(Type::from_protocol("Fire"), Some(Type::Fire));
        assert_eq!(Type::from_protocol("fire"), Some(Type::Fire));
        assert_eq!(Type::from_protocol("PSYCHIC"), Some(Type::Psychic));
        assert_eq!(Type::from_protocol("notype"), None);
        assert_eq!(Type::from_protocol("unknown"), None);
    }

    #[test]
    fn test_parse_tags_drops_sentinel_and_duplicates() {
        let types = Type::parse_tags(["water", "NOTYPE", "Water", "ice"]);
        assert_eq!(types, vec![Type::Water, Type::Ice]);
    }

    #[test]
    fn test_chart_kind_from_str() {
        assert_eq!("gen1".parse::<ChartKind>(), Ok(ChartKind::Gen1));
        assert_eq!("Modern".parse::<ChartKind>(), Ok(ChartKind::Modern));
        assert!("gen2".parse::<ChartKind>().is_err());
    }

    #[test]
    fn test_all_types() {
        assert_eq!(Type::all().len(), 18);
        assert_eq!(Type::all()[0], Type::Normal);
        assert_eq!(Type::all()[17], Type::Fairy);
    }
}
