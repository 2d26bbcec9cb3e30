//! Cross-filter reconciliation.
//!
//! Maps (dataset, selection) to the data behind each of the four charts.
//!
//! # Self-exclusion rule
//!
//! A chart is filtered by every *other* chart's active selection and never
//! by its own:
//!
//! - the parallel-coordinates plot gets the rows passing the type, tier and
//!   generation selections, but not its own axis brushes;
//! - each bar chart gets the rows passing the other two bar selections and
//!   every axis brush, but not its own selection.
//!
//! A bar chart therefore keeps showing the full distribution of its own
//! dimension (under everyone else's filters) and marks the selected bars as
//! highlighted instead of dropping the unselected ones.
//!
//! Within a chart's inputs all active selections combine with AND; values
//! inside one selection combine with OR. An empty selection is no filter.
//! Labels that match no row are not errors: they simply match nothing.

use crate::aggregate::{aggregate, BarCount, Dimension};
use crate::selection::{Selection, StatRange};
use pkmn_stats::{Dataset, Record, Stat, Tier};
use serde::Serialize;
use std::collections::BTreeSet;

/// Counts and highlighted bars for one bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarView {
    pub dimension: Dimension,
    pub bars: Vec<BarCount>,
    /// Indices into `bars` of the currently selected values. A selected
    /// value with no bar in this view is left out.
    pub highlighted: Vec<usize>,
}

impl BarView {
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted.contains(&index)
    }

    pub fn highlighted_labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.highlighted.iter().map(|&i| self.bars[i].label.as_str())
    }

    /// Count of the bar with this label, if it is present.
    pub fn count_of(&self, label: &str) -> Option<usize> {
        self.bars.iter().find(|b| b.label == label).map(|b| b.count)
    }
}

/// Everything the four charts need for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossFilter<'a> {
    /// Rows drawn on the parallel-coordinates plot.
    pub parallel: Vec<&'a Record>,
    pub types: BarView,
    pub tiers: BarView,
    pub generations: BarView,
}

impl CrossFilter<'_> {
    pub fn bar_view(&self, dimension: Dimension) -> &BarView {
        match dimension {
            Dimension::Type => &self.types,
            Dimension::Tier => &self.tiers,
            Dimension::Generation => &self.generations,
        }
    }
}

/// Recompute every chart's view from scratch.
///
/// Stateless and deterministic: the same inputs always give the same output,
/// and neither input is modified.
pub fn reconcile<'a>(dataset: &'a Dataset, selection: &Selection) -> CrossFilter<'a> {
    let views = CrossFilter {
        parallel: parallel_rows(dataset, selection),
        types: bar_view(dataset, selection, Dimension::Type),
        tiers: bar_view(dataset, selection, Dimension::Tier),
        generations: bar_view(dataset, selection, Dimension::Generation),
    };
    log::debug!(
        "reconcile: {} of {} rows on parallel plot; bars type={} tier={} generation={}",
        views.parallel.len(),
        dataset.len(),
        views.types.bars.len(),
        views.tiers.bars.len(),
        views.generations.bars.len()
    );
    views
}

/// Rows for the parallel-coordinates plot: every bar selection applied, the
/// plot's own axis brushes not applied.
pub fn parallel_rows<'a>(dataset: &'a Dataset, selection: &Selection) -> Vec<&'a Record> {
    let criteria: Vec<Criterion<'_>> = Dimension::ALL
        .iter()
        .filter_map(|d| Criterion::membership(selection, *d))
        .collect();
    matching(dataset, &criteria)
}

/// Rows for one bar chart: the other two bar selections and every axis brush
/// applied, the chart's own selection not applied.
pub fn bar_rows<'a>(
    dataset: &'a Dataset,
    selection: &Selection,
    dimension: Dimension,
) -> Vec<&'a Record> {
    let criteria: Vec<Criterion<'_>> = Dimension::ALL
        .iter()
        .filter(|d| **d != dimension)
        .filter_map(|d| Criterion::membership(selection, *d))
        .chain(
            selection
                .ranges
                .iter()
                .map(|(stat, range)| Criterion::Range(*stat, *range)),
        )
        .collect();
    matching(dataset, &criteria)
}

/// Aggregate one bar chart's rows and mark its selected bars.
pub fn bar_view(dataset: &Dataset, selection: &Selection, dimension: Dimension) -> BarView {
    let rows = bar_rows(dataset, selection, dimension);
    let bars = aggregate(rows.iter().copied(), dimension);
    let highlighted = bars
        .iter()
        .enumerate()
        .filter(|(_, bar)| selection.is_selected(dimension, &bar.label))
        .map(|(i, _)| i)
        .collect();
    BarView {
        dimension,
        bars,
        highlighted,
    }
}

fn matching<'a>(dataset: &'a Dataset, criteria: &[Criterion<'_>]) -> Vec<&'a Record> {
    dataset
        .iter()
        .filter(|record| criteria.iter().all(|c| c.admits(record)))
        .collect()
}

/// One active filter, compiled from the selection for fast row tests.
enum Criterion<'s> {
    Types(&'s BTreeSet<String>),
    Tiers(BTreeSet<Tier>),
    Generations(BTreeSet<u8>),
    Range(Stat, StatRange),
}

impl<'s> Criterion<'s> {
    /// Membership test for one bar chart's selection, `None` if it is empty.
    ///
    /// Labels that do not parse as a tier or generation are dropped from the
    /// accepted set but the criterion stays active, so a selection made only
    /// of such labels admits no rows.
    fn membership(selection: &'s Selection, dimension: Dimension) -> Option<Self> {
        let labels = selection.labels(dimension);
        if labels.is_empty() {
            return None;
        }
        Some(match dimension {
            Dimension::Type => Criterion::Types(labels),
            Dimension::Tier => {
                Criterion::Tiers(labels.iter().filter_map(|l| l.parse().ok()).collect())
            }
            Dimension::Generation => {
                Criterion::Generations(labels.iter().filter_map(|l| l.parse().ok()).collect())
            }
        })
    }

    fn admits(&self, record: &Record) -> bool {
        match self {
            Criterion::Types(types) => types.contains(&record.primary_type),
            Criterion::Tiers(tiers) => tiers.contains(&record.tier),
            Criterion::Generations(generations) => generations.contains(&record.generation),
            Criterion::Range(stat, range) => range.contains(record.stat(*stat)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fire_water, record};
    use proptest::prelude::*;

    fn labels(view: &BarView) -> Vec<&str> {
        view.highlighted_labels().collect()
    }

    #[test]
    fn test_selecting_fire_scenario() {
        let dataset = fire_water();
        let selection = Selection::default().with_labels(Dimension::Type, ["Fire"]);
        let views = reconcile(&dataset, &selection);

        assert_eq!(
            views.types.bars,
            vec![BarCount::new("Fire", 2), BarCount::new("Water", 1)]
        );
        assert_eq!(labels(&views.types), vec!["Fire"]);

        assert_eq!(
            views.tiers.bars,
            vec![BarCount::new("OU", 1), BarCount::new("UU", 1)]
        );
        assert!(views.tiers.highlighted.is_empty());

        assert_eq!(views.generations.count_of("1"), Some(1));
        assert_eq!(views.generations.count_of("2"), Some(1));
        assert_eq!(views.generations.bars.len(), 2);

        assert_eq!(views.parallel.len(), 2);
        assert!(views.parallel.iter().all(|r| r.primary_type == "Fire"));
    }

    #[test]
    fn test_empty_selection_is_unfiltered() {
        let dataset = fire_water();
        let views = reconcile(&dataset, &Selection::default());
        assert_eq!(views.parallel.len(), 3);
        for dimension in Dimension::ALL {
            assert_eq!(
                views.bar_view(dimension).bars,
                aggregate(&dataset, dimension)
            );
            assert!(views.bar_view(dimension).highlighted.is_empty());
        }
    }

    #[test]
    fn test_empty_dataset_renders_empty_views() {
        let dataset = Dataset::from_records(Vec::new());
        let selection = Selection::default()
            .with_labels(Dimension::Type, ["Fire"])
            .with_range(Stat::Hp, StatRange::new(0, 255));
        let views = reconcile(&dataset, &selection);
        assert!(views.parallel.is_empty());
        for dimension in Dimension::ALL {
            assert!(views.bar_view(dimension).bars.is_empty());
            assert!(views.bar_view(dimension).highlighted.is_empty());
        }
    }

    #[test]
    fn test_parallel_plot_ignores_its_own_brush() {
        let dataset = fire_water();
        let selection = Selection::default().with_range(Stat::Attack, StatRange::new(0, 10));
        let views = reconcile(&dataset, &selection);
        assert_eq!(views.parallel.len(), 3);
        // ...while every bar chart is emptied by it.
        for dimension in Dimension::ALL {
            assert!(views.bar_view(dimension).bars.is_empty());
        }
    }

    #[test]
    fn test_brush_range_is_inclusive() {
        let dataset = Dataset::from_records(vec![
            record("Fire", Tier::OU, 1, 99),
            record("Fire", Tier::OU, 1, 100),
            record("Fire", Tier::OU, 1, 101),
        ]);
        let selection = Selection::default().with_range(Stat::Speed, StatRange::new(100, 100));
        let rows = bar_rows(&dataset, &selection, Dimension::Type);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].speed, 100);
    }

    #[test]
    fn test_brushes_on_several_axes_combine() {
        let dataset = Dataset::from_records(vec![
            record("Fire", Tier::OU, 1, 80),
            record("Water", Tier::OU, 1, 100),
        ]);
        let selection = Selection::default()
            .with_range(Stat::Hp, StatRange::new(50, 150))
            .with_range(Stat::Total, StatRange::new(500, 780));
        let views = reconcile(&dataset, &selection);
        assert_eq!(views.types.bars, vec![BarCount::new("Water", 1)]);
    }

    #[test]
    fn test_unknown_labels_match_nothing() {
        let dataset = fire_water();
        let selection = Selection::default().with_labels(Dimension::Type, ["Shadow"]);
        let views = reconcile(&dataset, &selection);

        // The type chart itself is unaffected and highlights nothing.
        assert_eq!(views.types.bars.len(), 2);
        assert!(views.types.highlighted.is_empty());
        // Everyone else is filtered down to zero rows.
        assert!(views.tiers.bars.is_empty());
        assert!(views.generations.bars.is_empty());
        assert!(views.parallel.is_empty());
    }

    #[test]
    fn test_malformed_tier_and_generation_labels() {
        let dataset = fire_water();
        let tiers = Selection::default().with_labels(Dimension::Tier, ["Ubers", "OU"]);
        assert_eq!(parallel_rows(&dataset, &tiers).len(), 2);

        let generations = Selection::default().with_labels(Dimension::Generation, ["one"]);
        assert!(parallel_rows(&dataset, &generations).is_empty());
    }

    #[test]
    fn test_selected_value_missing_from_view_is_not_highlighted() {
        let dataset = fire_water();
        // Gen 2 only holds a UU Fire row; selecting Water removes it from the
        // generation chart while the generation selection still names it.
        let selection = Selection::default()
            .with_labels(Dimension::Generation, ["2"])
            .with_labels(Dimension::Type, ["Water"]);
        let views = reconcile(&dataset, &selection);
        assert_eq!(views.generations.bars, vec![BarCount::new("1", 1)]);
        assert!(views.generations.highlighted.is_empty());
        // Water has no gen-2 rows, so the tier chart is empty.
        assert!(views.tiers.bars.is_empty());
    }

    #[test]
    fn test_bar_selections_from_other_charts_combine() {
        let dataset = fire_water();
        let selection = Selection::default()
            .with_labels(Dimension::Tier, ["OU"])
            .with_labels(Dimension::Generation, ["1"]);
        let views = reconcile(&dataset, &selection);
        assert_eq!(
            views.types.bars,
            vec![BarCount::new("Fire", 1), BarCount::new("Water", 1)]
        );
        // Tier chart sees only the generation filter.
        assert_eq!(views.tiers.bars, vec![BarCount::new("OU", 2)]);
        assert_eq!(labels(&views.tiers), vec!["OU"]);
        assert_eq!(views.parallel.len(), 2);
    }

    #[test]
    fn test_reconcile_does_not_touch_dataset() {
        let dataset = fire_water();
        let before = dataset.clone();
        let selection = Selection::default()
            .with_labels(Dimension::Type, ["Fire"])
            .with_range(Stat::Attack, StatRange::new(90, 255));
        let _ = reconcile(&dataset, &selection);
        assert_eq!(dataset, before);
    }

    fn arb_record() -> impl Strategy<Value = Record> {
        (
            prop::sample::select(vec!["Fire", "Water", "Grass", "Dragon"]),
            prop::sample::select(Tier::ALL.to_vec()),
            1u8..=6,
            0u16..=255,
        )
            .prop_map(|(t, tier, generation, base)| record(t, tier, generation, base))
    }

    fn arb_selection() -> impl Strategy<Value = Selection> {
        (
            prop::collection::vec(
                prop::sample::select(vec!["Fire", "Water", "Grass", "Ghost"]),
                0..3,
            ),
            prop::collection::vec(
                prop::sample::select(vec!["Uber", "OU", "UU", "LC", "???"]),
                0..3,
            ),
            prop::collection::vec(prop::sample::select(vec!["1", "2", "3", "9"]), 0..3),
            prop::option::of((0i64..=255, 0i64..=255)),
        )
            .prop_map(|(types, tiers, generations, speed)| {
                let mut selection = Selection::default()
                    .with_labels(Dimension::Type, types)
                    .with_labels(Dimension::Tier, tiers)
                    .with_labels(Dimension::Generation, generations);
                if let Some((a, b)) = speed {
                    selection.set_range(Stat::Speed, Some(StatRange::new(a.min(b), a.max(b))));
                }
                selection
            })
    }

    proptest! {
        #[test]
        fn prop_reconcile_is_deterministic(
            records in prop::collection::vec(arb_record(), 0..40),
            selection in arb_selection(),
        ) {
            let dataset = Dataset::from_records(records);
            prop_assert_eq!(reconcile(&dataset, &selection), reconcile(&dataset, &selection));
        }

        #[test]
        fn prop_own_selection_never_changes_own_counts(
            records in prop::collection::vec(arb_record(), 0..40),
            selection in arb_selection(),
        ) {
            let dataset = Dataset::from_records(records);
            let views = reconcile(&dataset, &selection);
            for dimension in Dimension::ALL {
                let without_own = selection.clone().with_labels(dimension, Vec::<String>::new());
                let baseline = reconcile(&dataset, &without_own);
                prop_assert_eq!(
                    &views.bar_view(dimension).bars,
                    &baseline.bar_view(dimension).bars
                );
                for label in views.bar_view(dimension).highlighted_labels() {
                    prop_assert!(selection.is_selected(dimension, label));
                }
            }
        }

        #[test]
        fn prop_tier_bars_in_display_order(
            records in prop::collection::vec(arb_record(), 0..40),
            selection in arb_selection(),
        ) {
            let dataset = Dataset::from_records(records);
            let tiers = reconcile(&dataset, &selection).tiers;
            let ranks: Vec<usize> = tiers
                .bars
                .iter()
                .map(|b| b.label.parse::<Tier>().unwrap().rank())
                .collect();
            prop_assert!(ranks.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn prop_empty_selection_matches_full_aggregation(
            records in prop::collection::vec(arb_record(), 0..40),
        ) {
            let dataset = Dataset::from_records(records);
            let views = reconcile(&dataset, &Selection::default());
            prop_assert_eq!(views.parallel.len(), dataset.len());
            for dimension in Dimension::ALL {
                prop_assert_eq!(&views.bar_view(dimension).bars, &aggregate(&dataset, dimension));
            }
        }
    }
}
