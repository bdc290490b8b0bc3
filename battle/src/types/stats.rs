//! Stat stages and base stats

use serde::{Deserialize, Serialize};

/// Stats that can carry a stage modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
    Accuracy,
    Evasion,
}

impl Stat {
    /// Parse from log string ("atk", "def", "spa", "spd", "spe", "accuracy", "evasion")
    pub fn from_protocol(s: &str) -> Option<Self> {
        match s {
            "atk" => Some(Stat::Atk),
            "def" => Some(Stat::Def),
            "spa" => Some(Stat::Spa),
            "spd" => Some(Stat::Spd),
            "spe" => Some(Stat::Spe),
            "accuracy" => Some(Stat::Accuracy),
            "evasion" => Some(Stat::Evasion),
            _ => None,
        }
    }
}

/// Stat stages (-6 to +6)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatStages {
    pub atk: i8,
    pub def: i8,
    pub spa: i8,
    pub spd: i8,
    pub spe: i8,
    pub accuracy: i8,
    pub evasion: i8,
}

impl StatStages {
    /// Create new stat stages (all at 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a log boost map, ignoring unknown stat tags
    pub fn from_protocol<'a, I>(boosts: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a i32)>,
    {
        let mut stages = Self::new();
        for (tag, value) in boosts {
            if let Some(stat) = Stat::from_protocol(tag) {
                stages.set(stat, (*value).clamp(-6, 6) as i8);
            }
        }
        stages
    }

    /// Set stage for a stat (clamped to -6..+6)
    pub fn set(&mut self, stat: Stat, value: i8) {
        let clamped = value.clamp(-6, 6);
        match stat {
            Stat::Atk => self.atk = clamped,
            Stat::Def => self.def = clamped,
            Stat::Spa => self.spa = clamped,
            Stat::Spd => self.spd = clamped,
            Stat::Spe => self.spe = clamped,
            Stat::Accuracy => self.accuracy = clamped,
            Stat::Evasion => self.evasion = clamped,
        }
    }

    /// Offensive pressure of these stages against a defender's stages:
    /// `(atk - def) + (spa - spd)`
    pub fn pressure_against(&self, defender: &StatStages) -> i32 {
        (self.atk as i32 - defender.def as i32) + (self.spa as i32 - defender.spd as i32)
    }
}

/// Species base stats
///
/// Generation 1 has a single Special stat; logs from that era report it in
/// both `spa` and `spd`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct BaseStats {
    #[serde(default)]
    pub hp: f64,
    #[serde(default)]
    pub atk: f64,
    #[serde(default)]
    pub def: f64,
    #[serde(default)]
    pub spa: f64,
    #[serde(default)]
    pub spd: f64,
    #[serde(default)]
    pub spe: f64,
}

impl BaseStats {
    /// Gen 1 style stat line with a shared Special
    pub const fn gen1(hp: f64, atk: f64, def: f64, special: f64, spe: f64) -> Self {
        Self {
            hp,
            atk,
            def,
            spa: special,
            spd: special,
            spe,
        }
    }

    /// Field-wise mean of a set of stat lines (all zero when empty)
    pub fn mean<'a, I>(stats: I) -> Self
    where
        I: IntoIterator<Item = &'a BaseStats>,
    {
        let mut total = BaseStats::default();
        let mut count = 0usize;
        for s in stats {
            total.hp += s.hp;
            total.atk += s.atk;
            total.def += s.def;
            total.spa += s.spa;
            total.spd += s.spd;
            total.spe += s.spe;
            count += 1;
        }

        if count == 0 {
            return total;
        }

        let n = count as f64;
        BaseStats {
            hp: total.hp / n,
            atk: total.atk / n,
            def: total.def / n,
            spa: total.spa / n,
            spd: total.spd / n,
            spe: total.spe / n,
        }
    }
}
