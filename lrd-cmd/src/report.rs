//! Text renderings of the dashboard: per-site statistics and chart descriptions.

use crate::fetch::load_csv;
use lrd_core::launch_site::SiteSelection;
use lrd_core::payload_range::PayloadRange;
use lrd_data::pie::pie_chart;
use lrd_data::scatter::scatter_chart;
use lrd_db::Database;
use std::io::Write;

/// Load the dataset and write per-site statistics as CSV to stdout.
pub async fn run_summary(input: Option<&str>, url: &str) -> anyhow::Result<()> {
    let db = Database::from_csv(&load_csv(input, url).await?)?;
    let stdout = std::io::stdout();
    write_site_stats(&db, stdout.lock())
}

/// Load the dataset and print both chart descriptions as pretty JSON to stdout.
pub async fn run_figure(
    input: Option<&str>,
    url: &str,
    site: &str,
    low: Option<f64>,
    high: Option<f64>,
) -> anyhow::Result<()> {
    let db = Database::from_csv(&load_csv(input, url).await?)?;
    let selection = SiteSelection::from_value(site);
    if !selection.is_known() {
        log::warn!("{} is not one of the dashboard's launch sites", site);
    }
    let range = resolve_range(&db, low, high)?;
    let figures = figures_json(&db, &selection, range)?;
    println!("{}", serde_json::to_string_pretty(&figures)?);
    Ok(())
}

/// Fill in missing bounds from the observed payload range.
pub fn resolve_range(db: &Database, low: Option<f64>, high: Option<f64>) -> anyhow::Result<PayloadRange> {
    let (min, max) = db
        .query_payload_bounds()?
        .ok_or_else(|| anyhow::anyhow!("the launch dataset has no rows"))?;
    PayloadRange::new(low.unwrap_or(min), high.unwrap_or(max))
}

/// Both chart descriptions for one set of control values.
pub fn figures_json(
    db: &Database,
    selection: &SiteSelection,
    range: PayloadRange,
) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::json!({
        "site": selection.value(),
        "payload_range": [range.low(), range.high()],
        "pie": pie_chart(db, selection)?,
        "scatter": scatter_chart(db, selection, range)?,
    }))
}

/// Write one CSV row per launch site.
pub fn write_site_stats<W: Write>(db: &Database, writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for stats in db.query_site_stats()? {
        wtr.serialize(stats)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_db() -> Database {
        let csv = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,1,525.0,F9 v1.0  B0004,v1.0
2,3,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
3,4,KSC LC-39A,1,5300.0,F9 FT B1032.1,FT
";
        Database::from_csv(csv).unwrap()
    }

    #[test]
    fn site_stats_csv_has_header_and_rows() {
        let db = sample_db();
        let mut out = Vec::new();
        write_site_stats(&db, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "launch_site,launches,successes,success_rate,min_payload_kg,max_payload_kg"
        );
        assert!(lines[1].starts_with("CCAFS LC-40,2,1,0.5,"));
        assert!(lines[2].starts_with("KSC LC-39A,2,2,1.0,"));
    }

    #[test]
    fn resolve_range_defaults_to_observed_bounds() {
        let db = sample_db();
        let range = resolve_range(&db, None, None).unwrap();
        assert_eq!(range.low(), 0.0);
        assert_eq!(range.high(), 5300.0);

        let partial = resolve_range(&db, Some(1000.0), None).unwrap();
        assert_eq!(partial.low(), 1000.0);
        assert_eq!(partial.high(), 5300.0);

        assert!(resolve_range(&db, Some(6000.0), None).is_err());
    }

    #[test]
    fn resolve_range_empty_dataset_fails() {
        let db = Database::new().unwrap();
        assert!(resolve_range(&db, None, None).is_err());
    }

    #[test]
    fn figures_json_contains_both_charts() {
        let db = sample_db();
        let selection = SiteSelection::from_value("KSC LC-39A");
        let range = PayloadRange::new(0.0, 3000.0).unwrap();
        let value = figures_json(&db, &selection, range).unwrap();
        assert_eq!(value["site"], "KSC LC-39A");
        assert_eq!(value["pie"]["title"], "Success Rate for KSC LC-39A Site");
        assert_eq!(value["pie"]["slices"].as_array().unwrap().len(), 1);
        let points = value["scatter"]["points"].as_array().unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0]["x"], 2490.0);
    }
}
