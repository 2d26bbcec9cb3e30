//! Builders from reconciled views to chart specifications.

use crate::models::{
    Bar, BarChartSpec, ChartStyle, DashboardSpec, ParallelChartSpec, ParallelDimension,
    TRANSITION_MS,
};
use pkmn_filter::{BarView, CrossFilter, Dimension, Selection};
use pkmn_stats::{Record, Stat};

/// Page heading shown above the charts.
pub const DASHBOARD_TITLE: &str = "Pokemon 6-vs-6 Battle Statistics";

/// Title of the bar chart for `dimension`.
pub fn bar_title(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Type => "Primary Type",
        Dimension::Tier => "Competitive Tier",
        Dimension::Generation => "Generation",
    }
}

/// Shape one bar chart.
pub fn bar_chart(view: &BarView) -> BarChartSpec {
    let bars = view
        .bars
        .iter()
        .enumerate()
        .map(|(i, bar)| Bar {
            label: bar.label.clone(),
            count: bar.count,
            selected: view.is_highlighted(i),
        })
        .collect();

    // Type names are long enough to collide when drawn horizontally.
    let tick_angle = match view.dimension {
        Dimension::Type => 90,
        _ => 0,
    };

    BarChartSpec {
        chart: view.dimension,
        title: bar_title(view.dimension).to_string(),
        x_label: view.dimension.column().to_string(),
        y_label: "count".to_string(),
        bars,
        selected_points: view.highlighted.clone(),
        style: ChartStyle {
            tick_angle,
            ..ChartStyle::default()
        },
    }
}

/// Shape the parallel-coordinates plot from its eligible rows.
///
/// Axes appear in [`Stat::ALL`] order, each with its fixed range and the
/// brush currently held in `selection`.
pub fn parallel_chart(rows: &[&Record], selection: &Selection) -> ParallelChartSpec {
    let dimensions = Stat::ALL
        .iter()
        .map(|stat| {
            let (low, high) = stat.display_range();
            ParallelDimension {
                label: stat.label().to_string(),
                range: [low, high],
                values: rows.iter().map(|r| r.stat(*stat)).collect(),
                constraint_range: selection.ranges.get(stat).map(|r| [r.low, r.high]),
            }
        })
        .collect();

    ParallelChartSpec {
        title: "Base Stats".to_string(),
        dimensions,
        row_count: rows.len(),
        transition_ms: TRANSITION_MS,
        style: ChartStyle::default(),
    }
}

/// Shape all four charts.
pub fn dashboard(views: &CrossFilter<'_>, selection: &Selection) -> DashboardSpec {
    log::debug!(
        "charts: building dashboard ({} parallel rows, {} brushed axes)",
        views.parallel.len(),
        selection.ranges.len()
    );
    DashboardSpec {
        title: DASHBOARD_TITLE.to_string(),
        types: bar_chart(&views.types),
        tiers: bar_chart(&views.tiers),
        generations: bar_chart(&views.generations),
        parallel: parallel_chart(&views.parallel, selection),
    }
}
