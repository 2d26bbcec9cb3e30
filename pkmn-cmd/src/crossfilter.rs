//! `reconcile` subcommand: cross-filter the dataset and emit chart specs.

use anyhow::Context;
use pkmn_charts::builders;
use pkmn_filter::{reconcile, Dimension, Selection, StatRange};
use pkmn_stats::{Dataset, Stat};

/// Parse a `--range` argument of the form `AXIS=LOW:HIGH`.
///
/// Bounds may be fractional; they are truncated the same way a brush on the
/// dashboard is.
pub fn parse_range(arg: &str) -> Result<(Stat, StatRange), String> {
    let (axis, bounds) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected AXIS=LOW:HIGH, got '{}'", arg))?;
    let stat: Stat = axis.parse().map_err(|e| format!("{}", e))?;
    let (low, high) = bounds
        .split_once(':')
        .ok_or_else(|| format!("expected LOW:HIGH, got '{}'", bounds))?;
    let low: f64 = low
        .trim()
        .parse()
        .map_err(|_| format!("invalid lower bound '{}'", low))?;
    let high: f64 = high
        .trim()
        .parse()
        .map_err(|_| format!("invalid upper bound '{}'", high))?;
    Ok((stat, StatRange::from_brush(low, high)))
}

/// Labels in `selection` that no record in `dataset` carries.
pub fn unmatched_labels(dataset: &Dataset, selection: &Selection) -> Vec<(Dimension, String)> {
    let mut unmatched = Vec::new();
    for dimension in Dimension::ALL {
        for label in selection.labels(dimension) {
            if !dataset.iter().any(|r| dimension.label_of(r) == label.as_str()) {
                unmatched.push((dimension, label.clone()));
            }
        }
    }
    unmatched
}

/// Reconcile and serialize the four chart specs.
pub fn reconcile_json(
    dataset: &Dataset,
    selection: &Selection,
    pretty: bool,
) -> anyhow::Result<String> {
    for (dimension, label) in unmatched_labels(dataset, selection) {
        log::warn!(
            "{} '{}' matches no records; it will filter everything out",
            dimension.column(),
            label
        );
    }
    let views = reconcile(dataset, selection);
    let spec = builders::dashboard(&views, selection);
    let json = if pretty {
        serde_json::to_string_pretty(&spec)
    } else {
        serde_json::to_string(&spec)
    };
    json.context("serializing chart specs")
}
