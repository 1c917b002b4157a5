//! Location of the launch dataset, the client that downloads it, and the
//! startup choice between the download and the offline snapshot.

use crate::launch_record::LaunchRecord;
#[cfg(feature = "api")]
use log::info;
#[cfg(feature = "api")]
use reqwest::Client;
use serde::Serialize;
use std::fmt;

/// Remote CSV holding the SpaceX launch records.
pub static DATASET_URL: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/IBM-DS0321EN-SkillsNetwork/datasets/spacex_launch_dash.csv";

/// Download the launch dataset CSV as text.
///
/// A single attempt is made; transport errors and non-success statuses are
/// returned to the caller.
#[cfg(feature = "api")]
pub async fn fetch_launch_csv(client: &Client, url: &str) -> anyhow::Result<String> {
    info!("fetching launch dataset from {}", url);
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("dataset request to {} failed with status {}", url, status);
    }
    let body = response.text().await?;
    info!("fetched {} bytes of launch data", body.len());
    Ok(body)
}

/// Where the loaded launch records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DatasetSource {
    Remote,
    Snapshot,
}

impl DatasetSource {
    pub fn describe(&self) -> &'static str {
        match self {
            DatasetSource::Remote => "remote dataset",
            DatasetSource::Snapshot => "offline snapshot (download failed)",
        }
    }
}

/// Parsed, non-empty launch records and their origin.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDataset {
    pub source: DatasetSource,
    pub records: Vec<LaunchRecord>,
}

/// Why no usable dataset could be loaded at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadFailure {
    pub url: String,
    /// Whether an embedded snapshot existed and was attempted too
    pub snapshot_tried: bool,
    pub message: String,
}

impl LoadFailure {
    pub fn new(url: &str, snapshot_tried: bool, message: impl Into<String>) -> Self {
        Self {
            url: url.to_string(),
            snapshot_tried,
            message: message.into(),
        }
    }
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to load {}: {}", self.url, self.message)?;
        if self.snapshot_tried {
            write!(f, " (offline snapshot also unusable)")?;
        }
        Ok(())
    }
}

impl std::error::Error for LoadFailure {}

fn parse_non_empty(csv_data: &str) -> anyhow::Result<Vec<LaunchRecord>> {
    let records = LaunchRecord::parse_launch_csv(csv_data)?;
    if records.is_empty() {
        anyhow::bail!("the launch dataset has no rows");
    }
    Ok(records)
}

/// Pick the dataset to load from the download result and the embedded snapshot.
///
/// The download wins when it parses to at least one launch. Otherwise the
/// snapshot is used, but only when one was embedded (`snapshot` non-empty).
/// If neither yields launches the failure carries both reasons.
pub fn resolve_dataset(
    url: &str,
    fetched: anyhow::Result<String>,
    snapshot: &str,
) -> Result<LoadedDataset, LoadFailure> {
    let remote_error = match fetched.and_then(|body| parse_non_empty(&body)) {
        Ok(records) => {
            return Ok(LoadedDataset {
                source: DatasetSource::Remote,
                records,
            })
        }
        Err(e) => e,
    };

    if snapshot.trim().is_empty() {
        return Err(LoadFailure::new(url, false, remote_error.to_string()));
    }

    log::warn!("remote dataset unusable ({}), using embedded snapshot", remote_error);
    match parse_non_empty(snapshot) {
        Ok(records) => Ok(LoadedDataset {
            source: DatasetSource::Snapshot,
            records,
        }),
        Err(snapshot_error) => Err(LoadFailure::new(
            url,
            true,
            format!("{}; snapshot: {}", remote_error, snapshot_error),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.invalid/launches.csv";

    const REMOTE_CSV: &str = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
KSC LC-39A,1,2490,FT
CCAFS LC-40,0,525,v1.0
";

    const SNAPSHOT_CSV: &str = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
VAFB SLC-4E,0,500,v1.1
";

    const HEADERS_ONLY: &str = "Launch Site,class,Payload Mass (kg),Booster Version Category\n";

    #[test]
    fn test_remote_preferred_over_snapshot() {
        let loaded = resolve_dataset(URL, Ok(REMOTE_CSV.to_string()), SNAPSHOT_CSV).unwrap();
        assert_eq!(loaded.source, DatasetSource::Remote);
        assert_eq!(loaded.records.len(), 2);
    }

    #[test]
    fn test_fetch_error_falls_back_to_snapshot() {
        let fetched = Err(anyhow::anyhow!("connection refused"));
        let loaded = resolve_dataset(URL, fetched, SNAPSHOT_CSV).unwrap();
        assert_eq!(loaded.source, DatasetSource::Snapshot);
        assert_eq!(loaded.records[0].launch_site, "VAFB SLC-4E");
    }

    #[test]
    fn test_fetch_error_without_snapshot_fails() {
        let fetched = Err(anyhow::anyhow!("connection refused"));
        let failure = resolve_dataset(URL, fetched, "").unwrap_err();
        assert_eq!(failure.url, URL);
        assert!(!failure.snapshot_tried);
        assert!(failure.message.contains("connection refused"));
    }

    #[test]
    fn test_empty_remote_without_snapshot_fails() {
        let failure = resolve_dataset(URL, Ok(HEADERS_ONLY.to_string()), "").unwrap_err();
        assert!(!failure.snapshot_tried);
        assert!(failure.message.contains("no rows"));
    }

    #[test]
    fn test_empty_remote_falls_back_to_snapshot() {
        let loaded = resolve_dataset(URL, Ok(HEADERS_ONLY.to_string()), SNAPSHOT_CSV).unwrap();
        assert_eq!(loaded.source, DatasetSource::Snapshot);
    }

    #[test]
    fn test_unusable_snapshot_reports_both() {
        let fetched = Err(anyhow::anyhow!("status 503"));
        let failure = resolve_dataset(URL, fetched, HEADERS_ONLY).unwrap_err();
        assert!(failure.snapshot_tried);
        assert!(failure.message.contains("status 503"));
        assert!(failure.message.contains("snapshot: the launch dataset has no rows"));
        assert!(failure.to_string().contains("offline snapshot also unusable"));
    }

    #[test]
    fn test_source_descriptions() {
        assert_eq!(DatasetSource::Remote.describe(), "remote dataset");
        assert!(DatasetSource::Snapshot.describe().starts_with("offline snapshot"));
    }
}
