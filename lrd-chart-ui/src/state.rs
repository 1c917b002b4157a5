//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! The two control signals (`selected_site`, `payload`) are what the chart
//! effects subscribe to.

use crate::chart_status::ChartStatus;
use lrd_core::dataset::{DatasetSource, LoadFailure};
use lrd_core::launch_site::{site_options, SiteOption, SiteSelection, ALL_SITES_VALUE};
use lrd_core::payload_range::PayloadRange;
use lrd_db::Database;
use dioxus::prelude::*;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Launch table (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Set when neither the download nor the snapshot could be loaded
    pub load_error: Signal<Option<LoadFailure>>,
    /// Where the loaded launches came from
    pub source: Signal<Option<DatasetSource>>,
    /// Dropdown entries
    pub sites: Signal<Vec<SiteOption>>,
    /// Currently selected dropdown value ("ALL" or a site name)
    pub selected_site: Signal<String>,
    /// Selected payload interval; always `low <= high`
    pub payload: Signal<PayloadRange>,
    pub pie_status: Signal<ChartStatus>,
    pub scatter_status: Signal<ChartStatus>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            load_error: Signal::new(None),
            source: Signal::new(None),
            sites: Signal::new(site_options()),
            selected_site: Signal::new(ALL_SITES_VALUE.to_string()),
            payload: Signal::new(PayloadRange::slider()),
            pie_status: Signal::new(ChartStatus::Pending),
            scatter_status: Signal::new(ChartStatus::Pending),
        }
    }

    /// Current dropdown selection.
    pub fn site_selection(&self) -> SiteSelection {
        SiteSelection::from_value(&(self.selected_site)())
    }
}
