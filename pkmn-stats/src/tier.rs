use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Smogon competitive tier.
///
/// Variants are declared in display order, so the derived `Ord` sorts
/// tiers from Uber down to LC. The order is a lookup table only; tiers
/// carry no numeric meaning.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    Uber,
    OU,
    UUBL,
    UU,
    RUBL,
    RU,
    NUBL,
    NU,
    PUBL,
    PU,
    NFE,
    LC,
}

impl Tier {
    /// Every tier, in display order.
    pub const ALL: [Tier; 12] = [
        Tier::Uber,
        Tier::OU,
        Tier::UUBL,
        Tier::UU,
        Tier::RUBL,
        Tier::RU,
        Tier::NUBL,
        Tier::NU,
        Tier::PUBL,
        Tier::PU,
        Tier::NFE,
        Tier::LC,
    ];

    /// Label as written in the dataset and on the tier chart axis.
    pub fn label(self) -> &'static str {
        match self {
            Tier::Uber => "Uber",
            Tier::OU => "OU",
            Tier::UUBL => "UUBL",
            Tier::UU => "UU",
            Tier::RUBL => "RUBL",
            Tier::RU => "RU",
            Tier::NUBL => "NUBL",
            Tier::NU => "NU",
            Tier::PUBL => "PUBL",
            Tier::PU => "PU",
            Tier::NFE => "NFE",
            Tier::LC => "LC",
        }
    }

    /// Position in the display order (Uber = 0, LC = 11).
    pub fn rank(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string names no known tier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tier '{0}'")]
pub struct ParseTierError(pub String);

impl FromStr for Tier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Tier::ALL
            .into_iter()
            .find(|tier| tier.label() == s)
            .ok_or_else(|| ParseTierError(s.to_string()))
    }
}
