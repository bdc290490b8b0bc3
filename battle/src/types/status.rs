//! Non-volatile status conditions

/// Status condition shown for a side's active pokemon
///
/// Fainting is carried here too since battle logs report it through the
/// same status field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Status {
    Burn,
    Freeze,
    Paralysis,
    Poison,
    BadPoison, // Toxic
    Sleep,
    Faint,
}

impl Status {
    /// Parse from log string ("brn", "frz", "par", "psn", "tox", "slp", "fnt")
    ///
    /// "nostatus" and anything unrecognised map to `None`.
    pub fn from_protocol(s: &str) -> Option<Self> {
        match s {
            "brn" => Some(Status::Burn),
            "frz" => Some(Status::Freeze),
            "par" => Some(Status::Paralysis),
            "psn" => Some(Status::Poison),
            "tox" => Some(Status::BadPoison),
            "slp" => Some(Status::Sleep),
            "fnt" => Some(Status::Faint),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_protocol() {
        assert_eq!(Status::from_protocol("brn"), Some(Status::Burn));
        assert_eq!(Status::from_protocol("frz"), Some(Status::Freeze));
        assert_eq!(Status::from_protocol("par"), Some(Status::Paralysis));
        assert_eq!(Status::from_protocol("psn"), Some(Status::Poison));
        assert_eq!(Status::from_protocol("tox"), Some(Status::BadPoison));
        assert_eq!(Status::from_protocol("slp"), Some(Status::Sleep));
        assert_eq!(Status::from_protocol("fnt"), Some(Status::Faint));
        assert_eq!(Status::from_protocol("nostatus"), None);
        assert_eq!(Status::from_protocol("unknown"), None);
    }
}
