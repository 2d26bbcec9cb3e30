use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper bound of the `Stat Total` axis.
pub const TOTAL_MAX: u16 = 780;

/// Upper bound of every individual base stat axis.
pub const BASE_STAT_MAX: u16 = 255;

/// A numeric dimension of a record, one axis of the parallel-coordinates plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stat {
    #[serde(rename = "Stat Total")]
    Total,
    #[serde(rename = "Sp.Atk")]
    SpAtk,
    #[serde(rename = "Sp.Def")]
    SpDef,
    Defense,
    Attack,
    #[serde(rename = "HP")]
    Hp,
    Speed,
}

impl Stat {
    /// All dimensions, in the left-to-right order of the parallel-coordinates axes.
    pub const ALL: [Stat; 7] = [
        Stat::Total,
        Stat::SpAtk,
        Stat::SpDef,
        Stat::Defense,
        Stat::Attack,
        Stat::Hp,
        Stat::Speed,
    ];

    /// The six base stats that sum to `Stat Total`.
    pub const BASE: [Stat; 6] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::SpAtk,
        Stat::SpDef,
        Stat::Speed,
    ];

    /// Column header in the dataset, also used as the axis label.
    pub fn label(self) -> &'static str {
        match self {
            Stat::Total => "Stat Total",
            Stat::SpAtk => "Sp.Atk",
            Stat::SpDef => "Sp.Def",
            Stat::Defense => "Defense",
            Stat::Attack => "Attack",
            Stat::Hp => "HP",
            Stat::Speed => "Speed",
        }
    }

    /// Fixed display range of the axis (inclusive).
    pub fn display_range(self) -> (u16, u16) {
        match self {
            Stat::Total => (0, TOTAL_MAX),
            _ => (0, BASE_STAT_MAX),
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string names no known stat axis.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown stat '{0}'")]
pub struct ParseStatError(pub String);

impl FromStr for Stat {
    type Err = ParseStatError;

    /// Accepts the axis label in any letter case (`"Sp.Atk"`, `"sp.atk"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Stat::ALL
            .into_iter()
            .find(|stat| stat.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseStatError(s.to_string()))
    }
}
