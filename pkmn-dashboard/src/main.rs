//! Pokemon 6-vs-6 Battle Statistics
//!
//! Three linked bar charts (primary type, tier, generation) above a
//! parallel-coordinates plot of the base stats. Selecting bars or brushing
//! an axis filters every other chart.
//!
//! Data flow:
//! 1. `build.rs` copies `pkmn6v6smogon.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount: parse the CSV into a `Dataset` and install the selection
//!    callback the D3 charts report clicks and brushes through.
//! 4. On selection change: reconcile all four views, rebuild the chart
//!    specs (memo), and re-render every chart via D3.js (effect).

use dioxus::prelude::*;
use pkmn_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, SelectionSummary,
};
use pkmn_chart_ui::js_bridge;
use pkmn_chart_ui::state::AppState;
use pkmn_charts::builders::{self, DASHBOARD_TITLE};
use pkmn_charts::DashboardSpec;
use pkmn_filter::{reconcile, SelectionChange};
use pkmn_stats::Dataset;

// Embed the battle statistics table at compile time.
const DATASET_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/pkmn6v6smogon.csv"));

/// DOM ids for the D3 chart container divs.
const TYPE_CHART_ID: &str = "type-bar";
const TIER_CHART_ID: &str = "tier-bar";
const GENERATION_CHART_ID: &str = "gen-bar";
const PARALLEL_CHART_ID: &str = "stats-pcd";

const BAR_HINT: &str = "Click a bar to select it, shift-click to add, double-click to clear";
const PARALLEL_HINT: &str = "Drag along an axis to brush a range, click the axis to clear it";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("pkmn-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Load the dataset once on mount ───
    use_effect(move || {
        match Dataset::from_csv_str(DATASET_CSV) {
            Ok(dataset) => {
                log::info!("Loaded {} records", dataset.len());
                state.dataset.set(Some(dataset));
            }
            Err(e) => {
                log::error!("Failed to load dataset: {}", e);
                state.error_msg.set(Some(e.to_string()));
            }
        }
        state.loading.set(false);

        // Initialize D3 chart scripts (one-time)
        js_bridge::init_charts();
        js_bridge::listen_for_selection(move |json| match SelectionChange::from_json(&json) {
            Ok(change) => state.apply_change(&change),
            Err(e) => log::warn!("Ignoring malformed selection notification: {}", e),
        });
    });

    // ─── Memo: reconcile views and build chart specs ───
    // Re-runs whenever the dataset or the selection changes.
    let dashboard = use_memo(move || -> Option<DashboardSpec> {
        let selection = state.selection.read().clone();
        let dataset = state.dataset.read().clone()?;
        let views = reconcile(&dataset, &selection);
        Some(builders::dashboard(&views, &selection))
    });

    // ─── Effect 2: Render every chart from the latest specs ───
    use_effect(move || {
        let Some(spec) = dashboard() else {
            return;
        };
        js_bridge::render_bar_chart(TYPE_CHART_ID, &spec.types);
        js_bridge::render_bar_chart(TIER_CHART_ID, &spec.tiers);
        js_bridge::render_bar_chart(GENERATION_CHART_ID, &spec.generations);
        js_bridge::render_parallel_chart(PARALLEL_CHART_ID, &spec.parallel);
    });

    let spec = dashboard();

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif; color: #fff;",

            h2 {
                style: "text-align: center;",
                "{DASHBOARD_TITLE}"
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else if let Some(spec) = spec {
                SelectionSummary {}

                div {
                    class: "graph_div",
                    style: "display: flex; gap: 12px; flex-wrap: wrap;",
                    BarSection {
                        container_id: TYPE_CHART_ID.to_string(),
                        title: spec.types.title.clone(),
                        empty: spec.types.is_empty(),
                    }
                    BarSection {
                        container_id: TIER_CHART_ID.to_string(),
                        title: spec.tiers.title.clone(),
                        empty: spec.tiers.is_empty(),
                    }
                    BarSection {
                        container_id: GENERATION_CHART_ID.to_string(),
                        title: spec.generations.title.clone(),
                        empty: spec.generations.is_empty(),
                    }
                }

                div {
                    class: "graph_div",
                    style: "margin-top: 16px;",
                    ChartHeader {
                        title: spec.parallel.title.clone(),
                        hint: PARALLEL_HINT.to_string(),
                    }
                    ChartContainer {
                        id: PARALLEL_CHART_ID.to_string(),
                        empty: spec.parallel.row_count == 0,
                        min_height: 380,
                    }
                }
            }
        }
    }
}

/// One bar chart column of the top row.
#[component]
fn BarSection(container_id: String, title: String, empty: bool) -> Element {
    rsx! {
        span {
            style: "flex: 1 1 300px; min-width: 280px;",
            ChartHeader {
                title: title,
                hint: BAR_HINT.to_string(),
            }
            ChartContainer {
                id: container_id,
                empty: empty,
            }
        }
    }
}
