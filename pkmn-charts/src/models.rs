//! Chart specification structs.
//!
//! All structs derive `Serialize` (camelCase field names) so they can be
//! passed to the D3.js renderer as JSON.

use pkmn_filter::Dimension;
use serde::Serialize;

/// Gold used for bars and parallel-coordinates lines.
pub const MARK_COLOR: &str = "#e6c339";
/// Axis, label and tick text color.
pub const FONT_COLOR: &str = "#fff";
/// Plot and paper background (transparent over the page).
pub const BACKGROUND: &str = "rgba(0,0,0,0)";
/// Parallel-coordinates redraw animation length.
pub const TRANSITION_MS: u32 = 500;

/// Colors and label orientation shared by every chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartStyle {
    pub mark_color: String,
    pub font_color: String,
    pub background: String,
    /// Rotation of x tick labels in degrees.
    pub tick_angle: i32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            mark_color: MARK_COLOR.to_string(),
            font_color: FONT_COLOR.to_string(),
            background: BACKGROUND.to_string(),
            tick_angle: 0,
        }
    }
}

/// One bar of a bar chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bar {
    pub label: String,
    pub count: usize,
    /// Drawn at full opacity while the chart has a selection; the
    /// unselected bars are dimmed.
    pub selected: bool,
}

/// A count-per-value bar chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BarChartSpec {
    /// Which chart this is; echoed back in selection notifications.
    pub chart: Dimension,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
    /// Indices of the selected bars.
    pub selected_points: Vec<usize>,
    pub style: ChartStyle,
}

impl BarChartSpec {
    pub fn has_selection(&self) -> bool {
        !self.selected_points.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// One vertical axis of the parallel-coordinates plot.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParallelDimension {
    pub label: String,
    /// Fixed display range, inclusive.
    pub range: [u16; 2],
    /// One value per drawn row, in row order.
    pub values: Vec<u16>,
    /// The brush currently held on this axis, if any.
    pub constraint_range: Option<[i64; 2]>,
}

/// A parallel-coordinates plot over the stat axes.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParallelChartSpec {
    pub title: String,
    pub dimensions: Vec<ParallelDimension>,
    pub row_count: usize,
    pub transition_ms: u32,
    pub style: ChartStyle,
}

/// All four charts for one render of the page.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSpec {
    pub title: String,
    pub types: BarChartSpec,
    pub tiers: BarChartSpec,
    pub generations: BarChartSpec,
    pub parallel: ParallelChartSpec,
}
