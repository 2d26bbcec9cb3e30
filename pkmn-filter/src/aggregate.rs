//! Per-value counts for the three bar charts.

use pkmn_stats::{Record, Tier};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;

/// A categorical grouping dimension, one per bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Primary type (`Type.1`).
    Type,
    Tier,
    Generation,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Type, Dimension::Tier, Dimension::Generation];

    /// Column header of the dimension, used as the chart's x-axis title.
    pub fn column(self) -> &'static str {
        match self {
            Dimension::Type => "Type.1",
            Dimension::Tier => "Tier",
            Dimension::Generation => "Generation",
        }
    }

    /// The bar label a record falls under.
    pub fn label_of(self, record: &Record) -> Cow<'_, str> {
        match self {
            Dimension::Type => Cow::Borrowed(record.primary_type.as_str()),
            Dimension::Tier => Cow::Borrowed(record.tier.label()),
            Dimension::Generation => Cow::Owned(record.generation.to_string()),
        }
    }
}

/// One bar: a dimension value and how many rows carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarCount {
    pub label: String,
    pub count: usize,
}

impl BarCount {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Count rows per value of `dimension`.
///
/// Tiers come out in the fixed tier order (Uber first, LC last). Types and
/// generations come out by descending count, ties kept in order of first
/// appearance. Values with no rows are omitted, so an empty view yields no
/// bars.
pub fn aggregate<'a, I>(rows: I, dimension: Dimension) -> Vec<BarCount>
where
    I: IntoIterator<Item = &'a Record>,
{
    match dimension {
        Dimension::Tier => count_tiers(rows),
        _ => count_by_frequency(rows, dimension),
    }
}

fn count_tiers<'a>(rows: impl IntoIterator<Item = &'a Record>) -> Vec<BarCount> {
    let mut counts = [0usize; Tier::ALL.len()];
    for record in rows {
        counts[record.tier.rank()] += 1;
    }
    Tier::ALL
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(tier, count)| BarCount::new(tier.label(), count))
        .collect()
}

fn count_by_frequency<'a>(
    rows: impl IntoIterator<Item = &'a Record>,
    dimension: Dimension,
) -> Vec<BarCount> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut bars: Vec<BarCount> = Vec::new();
    for record in rows {
        let label = dimension.label_of(record);
        match index.get(label.as_ref()) {
            Some(&i) => bars[i].count += 1,
            None => {
                index.insert(label.to_string(), bars.len());
                bars.push(BarCount::new(label, 1));
            }
        }
    }
    // Stable sort keeps first-appearance order among equal counts.
    bars.sort_by(|a, b| b.count.cmp(&a.count));
    bars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::record;

    #[test]
    fn test_tiers_follow_display_order() {
        let rows = vec![
            record("Fire", Tier::LC, 1, 50),
            record("Fire", Tier::UU, 1, 50),
            record("Fire", Tier::Uber, 1, 50),
            record("Fire", Tier::UU, 1, 50),
            record("Fire", Tier::NFE, 1, 50),
        ];
        let bars = aggregate(&rows, Dimension::Tier);
        assert_eq!(
            bars,
            vec![
                BarCount::new("Uber", 1),
                BarCount::new("UU", 2),
                BarCount::new("NFE", 1),
                BarCount::new("LC", 1),
            ]
        );
    }

    #[test]
    fn test_types_by_descending_count_then_first_appearance() {
        let rows = vec![
            record("Grass", Tier::OU, 1, 50),
            record("Water", Tier::OU, 1, 50),
            record("Fire", Tier::OU, 1, 50),
            record("Water", Tier::OU, 1, 50),
            record("Fire", Tier::OU, 1, 50),
        ];
        let bars = aggregate(&rows, Dimension::Type);
        assert_eq!(
            bars,
            vec![
                BarCount::new("Water", 2),
                BarCount::new("Fire", 2),
                BarCount::new("Grass", 1),
            ]
        );
    }

    #[test]
    fn test_generation_labels_are_numbers() {
        let rows = vec![
            record("Fire", Tier::OU, 3, 50),
            record("Fire", Tier::OU, 1, 50),
            record("Fire", Tier::OU, 3, 50),
        ];
        let bars = aggregate(&rows, Dimension::Generation);
        assert_eq!(bars, vec![BarCount::new("3", 2), BarCount::new("1", 1)]);
    }

    #[test]
    fn test_empty_view_has_no_bars() {
        let rows: Vec<pkmn_stats::Record> = Vec::new();
        for dimension in Dimension::ALL {
            assert!(aggregate(&rows, dimension).is_empty());
        }
    }

    #[test]
    fn test_counts_sum_to_row_count() {
        let dataset =
            pkmn_stats::Dataset::from_csv_str(include_str!("../../fixtures/pkmn6v6smogon.csv"))
                .unwrap();
        for dimension in Dimension::ALL {
            let total: usize = aggregate(&dataset, dimension).iter().map(|b| b.count).sum();
            assert_eq!(total, dataset.len(), "{:?}", dimension);
        }
    }
}
