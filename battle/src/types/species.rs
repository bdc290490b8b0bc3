//! Species reference table (types and base stats by species)

use std::collections::HashMap;

use serde::Deserialize;

use super::pokemon_type::Type;
use super::stats::BaseStats;

/// Normalise a species name to a lookup id
///
/// Lowercases and strips spaces, dashes, dots and apostrophes, so
/// "Mr. Mime" and "mrmime" resolve to the same entry.
pub fn species_id(name: &str) -> String {
    name.to_lowercase().replace([' ', '-', '.', '\''], "")
}

/// Reference data for one species
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesEntry {
    pub types: Vec<Type>,
    pub stats: BaseStats,
}

#[derive(Deserialize)]
struct SpeciesJson {
    #[serde(default)]
    types: Vec<String>,
    #[serde(flatten)]
    stats: BaseStats,
}

/// Species lookup keyed by normalised id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeciesTable {
    entries: HashMap<String, SpeciesEntry>,
}

impl SpeciesTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Table covering the Generation 1 competitive pool
    pub fn gen1() -> Self {
        let mut table = Self::new();
        for (name, types, stats) in GEN1_SPECIES {
            table.insert(name, types.to_vec(), *stats);
        }
        table
    }

    /// Load a table from JSON of the form
    /// `{"starmie": {"types": ["water", "psychic"], "hp": 60, "atk": 75, ...}}`
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: HashMap<String, SpeciesJson> = serde_json::from_str(json)?;
        let mut table = Self::new();
        for (name, entry) in raw {
            let types = Type::parse_tags(entry.types.iter().map(String::as_str));
            table.insert(&name, types, entry.stats);
        }
        Ok(table)
    }

    /// Add or replace a species
    pub fn insert(&mut self, name: &str, types: Vec<Type>, stats: BaseStats) {
        self.entries
            .insert(species_id(name), SpeciesEntry { types, stats });
    }

    /// Merge another table over this one (entries in `other` win)
    pub fn extend(&mut self, other: SpeciesTable) {
        self.entries.extend(other.entries);
    }

    /// Look up a species by (unnormalised) name
    pub fn get(&self, name: &str) -> Option<&SpeciesEntry> {
        self.entries.get(&species_id(name))
    }

    /// Types of a species, if known
    pub fn types_of(&self, name: &str) -> Option<&[Type]> {
        self.get(name).map(|e| e.types.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

use Type::*;

/// Generation 1 species seen in competitive play: name, types, HP/Atk/Def/Special/Spe
#[rustfmt::skip]
static GEN1_SPECIES: &[(&str, &[Type], BaseStats)] = &[
    ("alakazam",   &[Psychic],          BaseStats::gen1(55.0, 50.0, 45.0, 135.0, 120.0)),
    ("articuno",   &[Ice, Flying],      BaseStats::gen1(90.0, 85.0, 100.0, 125.0, 85.0)),
    ("blastoise",  &[Water],            BaseStats::gen1(79.0, 83.0, 100.0, 85.0, 78.0)),
    ("chansey",    &[Normal],           BaseStats::gen1(250.0, 5.0, 5.0, 105.0, 50.0)),
    ("charizard",  &[Fire, Flying],     BaseStats::gen1(78.0, 84.0, 78.0, 85.0, 100.0)),
    ("clefable",   &[Normal],           BaseStats::gen1(95.0, 70.0, 73.0, 85.0, 60.0)),
    ("cloyster",   &[Water, Ice],       BaseStats::gen1(50.0, 95.0, 180.0, 85.0, 70.0)),
    ("dodrio",     &[Normal, Flying],   BaseStats::gen1(60.0, 110.0, 70.0, 60.0, 100.0)),
    ("dragonite",  &[Dragon, Flying],   BaseStats::gen1(91.0, 134.0, 95.0, 100.0, 80.0)),
    ("dugtrio",    &[Ground],           BaseStats::gen1(35.0, 80.0, 50.0, 70.0, 120.0)),
    ("electrode",  &[Electric],         BaseStats::gen1(60.0, 50.0, 70.0, 80.0, 140.0)),
    ("exeggutor",  &[Grass, Psychic],   BaseStats::gen1(95.0, 95.0, 85.0, 125.0, 55.0)),
    ("gengar",     &[Ghost, Poison],    BaseStats::gen1(60.0, 65.0, 60.0, 130.0, 110.0)),
    ("golem",      &[Rock, Ground],     BaseStats::gen1(80.0, 110.0, 130.0, 55.0, 45.0)),
    ("gyarados",   &[Water, Flying],    BaseStats::gen1(95.0, 125.0, 79.0, 100.0, 81.0)),
    ("hypno",      &[Psychic],          BaseStats::gen1(85.0, 73.0, 70.0, 115.0, 67.0)),
    ("jolteon",    &[Electric],         BaseStats::gen1(65.0, 65.0, 60.0, 110.0, 130.0)),
    ("jynx",       &[Ice, Psychic],     BaseStats::gen1(65.0, 50.0, 35.0, 95.0, 95.0)),
    ("kangaskhan", &[Normal],           BaseStats::gen1(105.0, 95.0, 80.0, 40.0, 90.0)),
    ("lapras",     &[Water, Ice],       BaseStats::gen1(130.0, 85.0, 80.0, 95.0, 60.0)),
    ("machamp",    &[Fighting],         BaseStats::gen1(90.0, 130.0, 80.0, 65.0, 55.0)),
    ("marowak",    &[Ground],           BaseStats::gen1(60.0, 80.0, 110.0, 50.0, 45.0)),
    ("mew",        &[Psychic],          BaseStats::gen1(100.0, 100.0, 100.0, 100.0, 100.0)),
    ("mewtwo",     &[Psychic],          BaseStats::gen1(106.0, 110.0, 90.0, 154.0, 130.0)),
    ("moltres",    &[Fire, Flying],     BaseStats::gen1(90.0, 100.0, 90.0, 125.0, 90.0)),
    ("nidoking",   &[Poison, Ground],   BaseStats::gen1(81.0, 92.0, 77.0, 75.0, 85.0)),
    ("persian",    &[Normal],           BaseStats::gen1(65.0, 70.0, 60.0, 65.0, 115.0)),
    ("porygon",    &[Normal],           BaseStats::gen1(65.0, 60.0, 70.0, 75.0, 40.0)),
    ("raichu",     &[Electric],         BaseStats::gen1(60.0, 90.0, 55.0, 90.0, 100.0)),
    ("rhydon",     &[Ground, Rock],     BaseStats::gen1(105.0, 130.0, 120.0, 45.0, 40.0)),
    ("slowbro",    &[Water, Psychic],   BaseStats::gen1(95.0, 75.0, 110.0, 80.0, 30.0)),
    ("snorlax",    &[Normal],           BaseStats::gen1(160.0, 110.0, 65.0, 65.0, 30.0)),
    ("starmie",    &[Water, Psychic],   BaseStats::gen1(60.0, 75.0, 85.0, 100.0, 115.0)),
    ("tauros",     &[Normal],           BaseStats::gen1(75.0, 100.0, 95.0, 70.0, 110.0)),
    ("vaporeon",   &[Water],            BaseStats::gen1(130.0, 65.0, 60.0, 110.0, 65.0)),
    ("venusaur",   &[Grass, Poison],    BaseStats::gen1(80.0, 82.0, 83.0, 100.0, 80.0)),
    ("victreebel", &[Grass, Poison],    BaseStats::gen1(80.0, 105.0, 65.0, 100.0, 70.0)),
    ("wigglytuff", &[Normal],           BaseStats::gen1(140.0, 70.0, 45.0, 50.0, 45.0)),
    ("zapdos",     &[Electric, Flying], BaseStats::gen1(90.0, 90.0, 85.0, 125.0, 100.0)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_id() {
        assert_eq!(species_id("Mr. Mime"), "mrmime");
        assert_eq!(species_id("Farfetch'd"), "farfetchd");
        assert_eq!(species_id("Nidoran-F"), "nidoranf");
        assert_eq!(species_id("STARMIE"), "starmie");
    }

    #[test]
    fn test_gen1_lookup() {
        let table = SpeciesTable::gen1();
        let starmie = table.get("Starmie").unwrap();
        assert_eq!(starmie.types, vec![Type::Water, Type::Psychic]);
        assert_eq!(starmie.stats.spe, 115.0);
        assert_eq!(starmie.stats.spa, starmie.stats.spd);

        assert_eq!(table.types_of("chansey"), Some(&[Type::Normal][..]));
        assert!(table.get("missingno").is_none());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "Mr. Mime": {"types": ["psychic", "notype"], "hp": 40, "atk": 45, "def": 65, "spa": 100, "spd": 100, "spe": 90},
            "ditto": {"types": ["normal"]}
        }"#;
        let table = SpeciesTable::from_json(json).unwrap();

        assert_eq!(table.len(), 2);
        let mime = table.get("mrmime").unwrap();
        assert_eq!(mime.types, vec![Type::Psychic]);
        assert_eq!(mime.stats.spe, 90.0);
        assert_eq!(table.get("Ditto").unwrap().stats, BaseStats::default());
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(SpeciesTable::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_extend_overrides() {
        let mut table = SpeciesTable::gen1();
        let before = table.len();
        let overrides =
            SpeciesTable::from_json(r#"{"snorlax": {"types": ["ghost"]}, "ditto": {"types": ["normal"]}}"#)
                .unwrap();
        table.extend(overrides);

        assert_eq!(table.len(), before + 1);
        assert_eq!(table.types_of("snorlax"), Some(&[Type::Ghost][..]));
    }
}
