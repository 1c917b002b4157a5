//! Query result model structs for launch data.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend.

use serde::Serialize;

/// Number of successful launches at one site.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SiteSuccess {
    pub launch_site: String,
    /// Sum of outcome classes, i.e. the count of successful launches.
    pub successes: i64,
}

/// Number of launches with a given outcome class.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OutcomeCount {
    pub class: i64,
    pub count: i64,
}

/// A single launch projected for the payload/outcome scatter chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PayloadOutcome {
    pub flight_number: Option<i64>,
    pub launch_site: String,
    pub payload_mass_kg: f64,
    pub class: i64,
    pub booster_version_category: String,
}

/// Per-site launch totals for summary tables.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SiteStats {
    pub launch_site: String,
    pub launches: i64,
    pub successes: i64,
    /// Successes divided by launches, in `[0, 1]`.
    pub success_rate: f64,
    pub min_payload_kg: f64,
    pub max_payload_kg: f64,
}
