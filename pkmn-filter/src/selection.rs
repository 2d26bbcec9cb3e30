//! The user's current selection across all four charts.
//!
//! A `Selection` is a plain value: the UI runtime keeps exactly one, replaces
//! it on every interaction, and hands it to [`crate::reconcile`]. Labels are
//! stored exactly as the charts display them, so a label that matches no row
//! is kept (and matches nothing) rather than being rejected.

use crate::aggregate::Dimension;
use pkmn_stats::Stat;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A closed integer range brushed on one parallel-coordinates axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatRange {
    pub low: i64,
    pub high: i64,
}

impl StatRange {
    pub fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }

    /// Build a range from fractional brush bounds.
    ///
    /// Each bound is truncated toward zero, and the bounds are put in
    /// ascending order (a brush dragged upward reports them reversed).
    pub fn from_brush(a: f64, b: f64) -> Self {
        let (a, b) = (a as i64, b as i64);
        Self::new(a.min(b), a.max(b))
    }

    /// Inclusive on both ends.
    pub fn contains(&self, value: u16) -> bool {
        let value = i64::from(value);
        self.low <= value && value <= self.high
    }
}

/// Active selections of the type, tier and generation bar charts plus the
/// brushed ranges of the parallel-coordinates plot. Empty means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub types: BTreeSet<String>,
    #[serde(default)]
    pub tiers: BTreeSet<String>,
    #[serde(default)]
    pub generations: BTreeSet<String>,
    #[serde(default)]
    pub ranges: BTreeMap<Stat, StatRange>,
}

impl Selection {
    /// True when no chart has an active selection.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
            && self.tiers.is_empty()
            && self.generations.is_empty()
            && self.ranges.is_empty()
    }

    /// Selected labels of one bar chart.
    pub fn labels(&self, dimension: Dimension) -> &BTreeSet<String> {
        match dimension {
            Dimension::Type => &self.types,
            Dimension::Tier => &self.tiers,
            Dimension::Generation => &self.generations,
        }
    }

    fn labels_mut(&mut self, dimension: Dimension) -> &mut BTreeSet<String> {
        match dimension {
            Dimension::Type => &mut self.types,
            Dimension::Tier => &mut self.tiers,
            Dimension::Generation => &mut self.generations,
        }
    }

    /// Replace one bar chart's selection. An empty iterator clears it.
    pub fn set_labels<I, S>(&mut self, dimension: Dimension, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalized: BTreeSet<String> = labels
            .into_iter()
            .map(|label| normalize_label(dimension, label.as_ref()))
            .collect();
        *self.labels_mut(dimension) = normalized;
    }

    /// Set or clear (`None`) the brush on one axis. One range per axis.
    pub fn set_range(&mut self, stat: Stat, range: Option<StatRange>) {
        match range {
            Some(range) => {
                self.ranges.insert(stat, range);
            }
            None => {
                self.ranges.remove(&stat);
            }
        }
    }

    /// Whether a bar with this label is part of its chart's selection.
    pub fn is_selected(&self, dimension: Dimension, label: &str) -> bool {
        self.labels(dimension)
            .contains(&normalize_label(dimension, label))
    }

    /// Drop every selection.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Builder form of [`set_labels`](Self::set_labels).
    pub fn with_labels<I, S>(mut self, dimension: Dimension, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.set_labels(dimension, labels);
        self
    }

    /// Builder form of [`set_range`](Self::set_range).
    pub fn with_range(mut self, stat: Stat, range: StatRange) -> Self {
        self.set_range(stat, Some(range));
        self
    }
}

/// Canonical form of a chart label: trimmed, and for generations the
/// decimal number without padding ("01" and "1" are the same bar).
fn normalize_label(dimension: Dimension, label: &str) -> String {
    let label = label.trim();
    match dimension {
        Dimension::Generation => match label.parse::<u8>() {
            Ok(generation) => generation.to_string(),
            Err(_) => label.to_string(),
        },
        _ => label.to_string(),
    }
}
