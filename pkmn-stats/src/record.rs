use crate::stat::Stat;
use crate::tier::Tier;
use serde::{Deserialize, Serialize};

/// One row of the battle statistics dataset.
///
/// Records are never mutated after load; filtered views borrow them.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Record {
    /// Primary type (`Type.1` column), e.g. "Fire".
    pub primary_type: String,
    pub tier: Tier,
    pub generation: u8,
    /// Sum of the six base stats as reported by the dataset.
    pub total: u16,
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub sp_atk: u16,
    pub sp_def: u16,
    pub speed: u16,
}

impl Record {
    /// Value of one numeric dimension.
    pub fn stat(&self, stat: Stat) -> u16 {
        match stat {
            Stat::Total => self.total,
            Stat::SpAtk => self.sp_atk,
            Stat::SpDef => self.sp_def,
            Stat::Defense => self.defense,
            Stat::Attack => self.attack,
            Stat::Hp => self.hp,
            Stat::Speed => self.speed,
        }
    }

    /// Sum of the six base stats, recomputed from the row.
    pub fn base_stat_sum(&self) -> u32 {
        Stat::BASE.iter().map(|s| u32::from(self.stat(*s))).sum()
    }

    /// Whether `Stat Total` agrees with the six base stats.
    pub fn total_is_consistent(&self) -> bool {
        u32::from(self.total) == self.base_stat_sum()
    }
}

/// A CSV row as it appears on disk, before the tier is validated.
///
/// Columns are matched by header name; any columns not listed here
/// (`Name`, `Type.2`, ...) are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct CsvRow {
    #[serde(rename = "Type.1")]
    pub primary_type: String,
    #[serde(rename = "Tier")]
    pub tier: String,
    #[serde(rename = "Generation")]
    pub generation: u8,
    #[serde(rename = "Stat Total")]
    pub total: u16,
    #[serde(rename = "HP")]
    pub hp: u16,
    #[serde(rename = "Attack")]
    pub attack: u16,
    #[serde(rename = "Defense")]
    pub defense: u16,
    #[serde(rename = "Sp.Atk")]
    pub sp_atk: u16,
    #[serde(rename = "Sp.Def")]
    pub sp_def: u16,
    #[serde(rename = "Speed")]
    pub speed: u16,
}

/// Header names a dataset file must contain.
pub const REQUIRED_COLUMNS: [&str; 10] = [
    "Type.1",
    "Tier",
    "Generation",
    "Stat Total",
    "HP",
    "Attack",
    "Defense",
    "Sp.Atk",
    "Sp.Def",
    "Speed",
];

impl CsvRow {
    pub(crate) fn into_record(self, tier: Tier) -> Record {
        Record {
            primary_type: self.primary_type.trim().to_string(),
            tier,
            generation: self.generation,
            total: self.total,
            hp: self.hp,
            attack: self.attack,
            defense: self.defense,
            sp_atk: self.sp_atk,
            sp_def: self.sp_def,
            speed: self.speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn garchomp() -> Record {
        Record {
            primary_type: "Dragon".to_string(),
            tier: Tier::OU,
            generation: 4,
            total: 600,
            hp: 108,
            attack: 130,
            defense: 95,
            sp_atk: 80,
            sp_def: 85,
            speed: 102,
        }
    }

    #[test]
    fn test_stat_accessor_covers_every_axis() {
        let r = garchomp();
        let values: Vec<u16> = Stat::ALL.iter().map(|s| r.stat(*s)).collect();
        assert_eq!(values, vec![600, 80, 85, 95, 130, 108, 102]);
    }

    #[test]
    fn test_total_consistency() {
        let mut r = garchomp();
        assert_eq!(r.base_stat_sum(), 600);
        assert!(r.total_is_consistent());
        r.total = 601;
        assert!(!r.total_is_consistent());
    }
}
