//! Selection-change notifications coming from the chart renderer.
//!
//! The D3.js side reports every click, brush and reset as a small JSON
//! object. Points are identified by their displayed label, never by row
//! index, so a notification stays meaningful after the data under the
//! chart has changed.
//!
//! ```text
//! {"kind":"bars","chart":"type","points":["Fire","Water"]}
//! {"kind":"brush","axis":"Attack","range":[99.6,150.2]}
//! {"kind":"brush","axis":"Attack","range":null}
//! {"kind":"reset"}
//! ```

use crate::aggregate::Dimension;
use crate::selection::{Selection, StatRange};
use pkmn_stats::Stat;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point label as sent by the renderer: text, or a bare JSON number for
/// numeric axes such as the generation chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Text(text) => f.write_str(text),
            Label::Number(number) => write!(f, "{}", number),
        }
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Label::Text(text.to_string())
    }
}

/// One user interaction with a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionChange {
    /// The points now selected on a bar chart. An empty list clears it.
    Bars { chart: Dimension, points: Vec<Label> },
    /// A brush on one parallel-coordinates axis; `None` clears it.
    Brush { axis: String, range: Option<[f64; 2]> },
    /// Clear every selection.
    Reset,
}

impl SelectionChange {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Selection {
    /// The selection that results from one interaction.
    ///
    /// A bar-chart change redraws the parallel-coordinates plot without
    /// brushes, so it also drops every axis range. A brush on an axis that
    /// names no known stat is logged and leaves the selection unchanged.
    pub fn apply(mut self, change: &SelectionChange) -> Self {
        match change {
            SelectionChange::Bars { chart, points } => {
                let labels: Vec<String> = points.iter().map(Label::to_string).collect();
                self.set_labels(*chart, labels);
                self.ranges.clear();
            }
            SelectionChange::Brush { axis, range } => match axis.parse::<Stat>() {
                Ok(stat) => {
                    let range = range.map(|[a, b]| StatRange::from_brush(a, b));
                    self.set_range(stat, range);
                }
                Err(e) => log::warn!("selection: ignoring brush: {}", e),
            },
            SelectionChange::Reset => self.clear(),
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_bar_selection() {
        let change =
            SelectionChange::from_json(r#"{"kind":"bars","chart":"type","points":["Fire","Water"]}"#)
                .unwrap();
        assert_eq!(
            change,
            SelectionChange::Bars {
                chart: Dimension::Type,
                points: vec!["Fire".into(), "Water".into()],
            }
        );
    }

    #[test]
    fn test_numeric_labels_become_text() {
        let change =
            SelectionChange::from_json(r#"{"kind":"bars","chart":"generation","points":[1,"3"]}"#)
                .unwrap();
        let selection = Selection::default().apply(&change);
        assert!(selection.is_selected(Dimension::Generation, "1"));
        assert!(selection.is_selected(Dimension::Generation, "3"));
    }

    #[test]
    fn test_empty_points_clear_the_chart() {
        let selection = Selection::default().with_labels(Dimension::Tier, ["OU"]);
        let change = SelectionChange::from_json(r#"{"kind":"bars","chart":"tier","points":[]}"#)
            .unwrap();
        assert!(selection.apply(&change).is_empty());
    }

    #[test]
    fn test_brush_sets_and_clears_range() {
        let set = SelectionChange::from_json(
            r#"{"kind":"brush","axis":"Attack","range":[150.9,99.6]}"#,
        )
        .unwrap();
        let selection = Selection::default().apply(&set);
        assert_eq!(selection.ranges[&Stat::Attack], StatRange::new(99, 150));

        let clear =
            SelectionChange::from_json(r#"{"kind":"brush","axis":"Attack","range":null}"#).unwrap();
        assert!(selection.apply(&clear).ranges.is_empty());
    }

    #[test]
    fn test_bar_change_drops_axis_brushes() {
        let brushed = Selection::default()
            .apply(&SelectionChange::Brush {
                axis: "Attack".to_string(),
                range: Some([100.0, 150.0]),
            })
            .with_labels(Dimension::Tier, ["OU"]);
        assert_eq!(brushed.ranges.len(), 1);

        let change = SelectionChange::from_json(
            r#"{"kind":"bars","chart":"type","points":["Fire"]}"#,
        )
        .unwrap();
        let selection = brushed.apply(&change);
        assert!(selection.ranges.is_empty());
        assert!(selection.is_selected(Dimension::Type, "Fire"));
        assert!(selection.is_selected(Dimension::Tier, "OU"));
    }

    #[test]
    fn test_brush_on_unknown_axis_is_ignored() {
        let selection = Selection::default().with_labels(Dimension::Type, ["Fire"]);
        let change = SelectionChange::Brush {
            axis: "Luck".to_string(),
            range: Some([1.0, 2.0]),
        };
        assert_eq!(selection.clone().apply(&change), selection);
    }

    #[test]
    fn test_reset() {
        let selection = Selection::default()
            .with_labels(Dimension::Type, ["Fire"])
            .with_range(Stat::Hp, StatRange::new(0, 10));
        let change = SelectionChange::from_json(r#"{"kind":"reset"}"#).unwrap();
        assert!(selection.apply(&change).is_empty());
    }

    #[test]
    fn test_malformed_notification_is_an_error() {
        assert!(SelectionChange::from_json(r#"{"kind":"bars","chart":"colour","points":[]}"#).is_err());
        assert!(SelectionChange::from_json("not json").is_err());
    }
}
