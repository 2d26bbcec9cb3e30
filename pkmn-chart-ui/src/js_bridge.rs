//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js` and are loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module serializes chart specs and calls those globals, and installs
//! the callback through which the charts report selection changes.

use pkmn_charts::{BarChartSpec, ParallelChartSpec};
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

// Embed all D3 chart JS files at compile time
static COMMON_JS: &str = include_str!("../assets/js/common.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static PARALLEL_CHART_JS: &str = include_str!("../assets/js/parallel-chart.js");

/// Global the chart scripts call with a JSON selection change.
const SELECTION_CALLBACK: &str = "__pkmnOnSelection";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('PKMN JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions like `renderBarChart(...)` via
/// `function` declarations. They are evaluated at global scope through an
/// indirect `eval()` once D3 is ready, then promoted to `window.*`.
pub fn init_charts() {
    let all_js = [COMMON_JS, BAR_CHART_JS, PARALLEL_CHART_JS].join("\n");

    let store_js = match serde_json::to_string(&all_js) {
        Ok(quoted) => format!("window.__pkmnChartScripts = {};", quoted),
        Err(e) => {
            log::error!("Failed to embed chart scripts: {}", e);
            return;
        }
    };
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__pkmnChartScripts);
                    delete window.__pkmnChartScripts;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof renderParallelChart !== 'undefined') window.renderParallelChart = renderParallelChart;
                    if (typeof notifySelection !== 'undefined') window.notifySelection = notifySelection;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.initTooltip();
                    window.__pkmnChartsReady = true;
                    console.log('PKMN charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Call `window.<function>(container_id, spec)` once the scripts are
/// initialized and the container exists.
///
/// The spec is inlined as a JSON literal, so labels never need escaping.
fn render_when_ready<T: Serialize>(function: &str, container_id: &str, spec: &T) {
    let spec_json = match serde_json::to_string(spec) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize spec for {}: {}", container_id, e);
            return;
        }
    };
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__pkmnChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', {spec_json});
                    }} catch(e) {{ console.error('[PKMN] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render one of the three bar charts.
pub fn render_bar_chart(container_id: &str, spec: &BarChartSpec) {
    render_when_ready("renderBarChart", container_id, spec);
}

/// Render the parallel-coordinates plot.
pub fn render_parallel_chart(container_id: &str, spec: &ParallelChartSpec) {
    render_when_ready("renderParallelChart", container_id, spec);
}

/// Route selection notifications from the charts to `handler`.
///
/// The handler receives the raw JSON the chart scripts pass to
/// `notifySelection`; decode it with `SelectionChange::from_json`.
/// Installing a new handler replaces the previous one.
pub fn listen_for_selection<F>(handler: F)
where
    F: FnMut(String) + 'static,
{
    let Some(window) = web_sys::window() else {
        log::warn!("No window; selection notifications disabled");
        return;
    };
    let closure = Closure::<dyn FnMut(String)>::new(handler);
    if let Err(e) = js_sys::Reflect::set(
        &window,
        &JsValue::from_str(SELECTION_CALLBACK),
        closure.as_ref(),
    ) {
        log::warn!("Failed to install selection callback: {:?}", e);
    }
    // Lives for the rest of the page.
    closure.forget();
}
