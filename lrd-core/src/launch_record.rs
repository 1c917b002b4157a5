use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;

/// A single SpaceX launch as it appears in the dashboard dataset.
///
/// Field names follow the CSV headers of `spacex_launch_dash.csv`. The
/// leading unnamed index column is ignored.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Flight Number", default)]
    pub flight_number: Option<i64>,
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    /// Outcome class: 1 for a successful landing, 0 otherwise
    pub class: i64,
    /// Payload mass in kilograms
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "Booster Version", default)]
    pub booster_version: String,
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
}

impl LaunchRecord {
    pub fn outcome(&self) -> Option<Outcome> {
        Outcome::from_class(self.class)
    }

    /// Parse the launch dataset CSV (with headers) into records, in file order.
    ///
    /// Columns are matched by header name, so column order does not matter.
    /// A missing required column or a non-numeric payload/class is an error.
    pub fn parse_launch_csv(csv_object: &str) -> anyhow::Result<Vec<LaunchRecord>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(csv_object.as_bytes());

        let mut records = Vec::new();
        for (line, row) in rdr.deserialize::<LaunchRecord>().enumerate() {
            let record = row.map_err(|e| anyhow::anyhow!("launch row {}: {}", line + 1, e))?;
            if !record.payload_mass_kg.is_finite() {
                anyhow::bail!("launch row {}: payload mass is not finite", line + 1);
            }
            records.push(record);
        }
        log::info!("parsed {} launch records", records.len());
        Ok(records)
    }
}
