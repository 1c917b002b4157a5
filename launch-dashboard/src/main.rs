//! SpaceX Launch Records Dashboard
//!
//! One page with a launch site dropdown, a success pie chart, a payload
//! range slider and a payload vs. outcome scatter chart. Both charts are
//! recomputed whenever a control they depend on changes.
//!
//! Data flow:
//! 1. On mount the launch CSV is downloaded from [`DATASET_URL`].
//!    [`resolve_dataset`] decides between the download and the offline
//!    snapshot embedded by `build.rs`; when neither has launches the
//!    failure is shown instead of the controls.
//! 2. The launches are loaded once into an in-memory SQLite database, and
//!    the slider is set to the observed payload bounds.
//! 3. The pie effect re-runs on site changes, the scatter effect on site or
//!    payload range changes; each hands a chart description to D3.js, or
//!    clears the container when nothing matched.

use lrd_chart_ui::chart_status::ChartStatus;
use lrd_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, PayloadRangeSlider, SiteSelector,
};
use lrd_chart_ui::js_bridge;
use lrd_chart_ui::state::AppState;
use lrd_core::dataset::{fetch_launch_csv, resolve_dataset, LoadFailure, LoadedDataset, DATASET_URL};
use lrd_core::payload_range::PayloadRange;
use lrd_data::pie::{pie_chart, PieChart};
use lrd_data::scatter::{scatter_chart, ScatterChart};
use lrd_db::Database;
use dioxus::prelude::*;

/// Offline copy of the launch dataset, empty when no snapshot was present at build time.
const SNAPSHOT_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/spacex_launch_dash.csv"));

/// Chart container DOM element IDs used by D3.js to render into.
const PIE_CHART_ID: &str = "success-pie-chart";
const SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("launch-dashboard-root"))
        .launch(App);
}

/// Download the dataset and pick what to load.
async fn load_dataset() -> Result<LoadedDataset, LoadFailure> {
    let client = reqwest::Client::new();
    let fetched = fetch_launch_csv(&client, DATASET_URL).await;
    resolve_dataset(DATASET_URL, fetched, SNAPSHOT_CSV)
}

fn into_database(dataset: &LoadedDataset) -> anyhow::Result<Database> {
    let db = Database::new()?;
    let inserted = db.insert_launches(&dataset.records)?;
    log::info!("Loaded {} launches from the {}", inserted, dataset.source.describe());
    Ok(db)
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load the launch table once on mount
    use_effect(move || {
        spawn(async move {
            log::info!("Loading launch records...");
            let loaded = load_dataset().await.and_then(|dataset| {
                into_database(&dataset)
                    .map(|db| (db, dataset.source))
                    .map_err(|e| LoadFailure::new(DATASET_URL, false, e.to_string()))
            });
            match loaded {
                Ok((db, source)) => {
                    // Default slider position is the observed payload range
                    match db.query_payload_bounds() {
                        Ok(Some((min, max))) => match PayloadRange::new(min, max) {
                            Ok(range) => state.payload.set(range),
                            Err(e) => log::warn!("Keeping full slider range: {}", e),
                        },
                        Ok(None) => {}
                        Err(e) => log::warn!("No payload bounds available: {}", e),
                    }
                    state.source.set(Some(source));
                    state.db.set(Some(db));
                    state.loading.set(false);
                }
                Err(failure) => {
                    log::error!("Failed to load launch records: {}", failure);
                    state.load_error.set(Some(failure));
                    state.loading.set(false);
                }
            }
        });
    });

    // Re-render the pie chart whenever the site changes
    use_effect(move || {
        if (state.loading)() || (state.load_error)().is_some() {
            return;
        }
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };
        let selection = state.site_selection();

        js_bridge::init_charts();
        match pie_chart(&db, &selection) {
            Ok(chart) => {
                let status = ChartStatus::for_items(
                    chart.slices.len(),
                    "slice",
                    &format!("No launches recorded for {}", selection),
                );
                if chart.is_empty() {
                    js_bridge::destroy_chart(PIE_CHART_ID);
                } else {
                    render_pie(&chart);
                }
                state.pie_status.set(status);
            }
            Err(e) => log::error!("Pie chart query failed for {}: {}", selection, e),
        }
    });

    // Re-render the scatter chart whenever the site or payload range changes
    use_effect(move || {
        if (state.loading)() || (state.load_error)().is_some() {
            return;
        }
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };
        let selection = state.site_selection();
        let range = (state.payload)();

        js_bridge::init_charts();
        match scatter_chart(&db, &selection, range) {
            Ok(chart) => {
                let status = ChartStatus::for_items(
                    chart.points.len(),
                    "launch",
                    &format!(
                        "No launches between {} and {} kg for {}",
                        range.low(),
                        range.high(),
                        selection
                    ),
                );
                if chart.points.is_empty() {
                    js_bridge::destroy_chart(SCATTER_CHART_ID);
                } else {
                    render_scatter(&chart);
                }
                state.scatter_status.set(status);
            }
            Err(e) => log::error!("Scatter chart query failed for {}: {}", selection, e),
        }
    });

    let subtitle = (state.source)()
        .map(|source| format!("Source: {}", source.describe()))
        .unwrap_or_default();

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "SpaceX Launch Records Dashboard".to_string(),
                subtitle,
            }

            if let Some(failure) = (state.load_error)() {
                ErrorDisplay { failure }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                SiteSelector {}
                br {}

                ChartContainer {
                    id: PIE_CHART_ID.to_string(),
                    status: (state.pie_status)(),
                    min_height: 420,
                }
                br {}

                PayloadRangeSlider {}

                ChartContainer {
                    id: SCATTER_CHART_ID.to_string(),
                    status: (state.scatter_status)(),
                    min_height: 420,
                }
            }
        }
    }
}

fn render_pie(chart: &PieChart) {
    let data_json = serde_json::to_string(&chart.slices).unwrap_or_default();
    let config_json = serde_json::to_string(&serde_json::json!({
        "title": chart.title,
    }))
    .unwrap_or_default();

    js_bridge::render_pie_chart(PIE_CHART_ID, &data_json, &config_json);
}

fn render_scatter(chart: &ScatterChart) {
    let data_json = serde_json::to_string(&chart.points).unwrap_or_default();
    let config_json = serde_json::to_string(&serde_json::json!({
        "title": chart.title,
        "xLabel": chart.x_label,
        "yLabel": chart.y_label,
        "categories": chart.categories,
    }))
    .unwrap_or_default();

    js_bridge::render_scatter_chart(SCATTER_CHART_ID, &data_json, &config_json);
}
