//! Dataset download and source selection.

use lrd_core::dataset::fetch_launch_csv;
use log::info;
use std::path::Path;
use std::time::Duration;

fn client() -> anyhow::Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()?)
}

/// Download the launch dataset and write it to `output`, creating parent
/// directories as needed.
pub async fn run_fetch(output: &str, url: &str) -> anyhow::Result<()> {
    let body = fetch_launch_csv(&client()?, url).await?;

    // Refuse to overwrite a good snapshot with something unparseable
    let rows = lrd_core::launch_record::LaunchRecord::parse_launch_csv(&body)?.len();

    let path = Path::new(output);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(path, &body).await?;
    info!("Wrote {} launches to {}", rows, output);
    Ok(())
}

/// Read the dataset from `input` when given, otherwise download it from `url`.
pub async fn load_csv(input: Option<&str>, url: &str) -> anyhow::Result<String> {
    match input {
        Some(path) => {
            info!("Reading launch dataset from {}", path);
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path, e))
        }
        None => fetch_launch_csv(&client()?, url).await,
    }
}
