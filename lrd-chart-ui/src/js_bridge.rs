//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js chart functions live in `assets/js/*.js`, are embedded at
//! compile time and evaluated as globals (no ES modules) exposed via `window.*`.
//! This module serializes chart data and calls those globals.

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");
static SCATTER_CHART_JS: &str = include_str!("../assets/js/scatter-chart.js");

/// Global functions promoted to `window` once the scripts are evaluated.
const CHART_FUNCTIONS: [&str; 5] = [
    "renderPieChart",
    "renderScatterChart",
    "initTooltip",
    "showTooltip",
    "hideTooltip",
];

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('LRD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Initialize chart scripts once D3 has loaded.
///
/// The scripts are stashed on `window` and evaluated at global scope by
/// indirect eval from inside the polling callback, then each chart function
/// is promoted to `window.*` explicitly. Calling this more than once is a no-op.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, PIE_CHART_JS, SCATTER_CHART_JS].join("\n");

    let promote: String = CHART_FUNCTIONS
        .iter()
        .map(|f| format!("if (typeof {f} !== 'undefined') window.{f} = {f};"))
        .collect::<Vec<_>>()
        .join("\n");

    let init_js = format!(
        r#"
        (function() {{
            if (window.__lrdChartsInit) return;
            window.__lrdChartsInit = true;
            window.__lrdChartScripts = {scripts};
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__lrdChartScripts);
                    delete window.__lrdChartScripts;
                    {promote}
                    window.__lrdChartsReady = true;
                    console.log('LRD charts initialized');
                }}
            }}, 100);
        }})();
        "#,
        scripts = js_string(&all_js),
    );
    call_js(&init_js);
}

/// Call `window.<function>(container_id, data_json, config_json)` once the
/// chart scripts are ready and the container exists in the DOM.
fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    let id = js_string(container_id);
    let data = js_string(data_json);
    let config = js_string(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__lrdChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.{function}({id}, {data}, {config});
                    }} catch(e) {{ console.error('[LRD] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the success pie chart.
///
/// `data_json` is an array of `{label, value, color}` slices.
pub fn render_pie_chart(container_id: &str, data_json: &str, config_json: &str) {
    log::debug!("render_pie_chart into #{}", container_id);
    render_when_ready("renderPieChart", container_id, data_json, config_json);
}

/// Render the payload vs. outcome scatter chart.
///
/// `data_json` is an array of `{x, y, category, launch_site, flight_number}` points.
pub fn render_scatter_chart(container_id: &str, data_json: &str, config_json: &str) {
    log::debug!("render_scatter_chart into #{}", container_id);
    render_when_ready("renderScatterChart", container_id, data_json, config_json);
}

/// Clear the chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById({}); if (el) el.innerHTML = '';",
        js_string(container_id)
    ));
}
