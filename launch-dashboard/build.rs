use std::env;
use std::fs;
use std::path::Path;

/// Columns the dashboard cannot do without.
const REQUIRED_HEADERS: [&str; 4] = [
    "Launch Site",
    "class",
    "Payload Mass (kg)",
    "Booster Version Category",
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("spacex_launch_dash.csv");

    // Offline snapshot written by `lrd-cli fetch --output fixtures/spacex_launch_dash.csv`.
    // Without one, an empty file is embedded and the app relies on the remote dataset.
    let snapshot_src = Path::new("../fixtures/spacex_launch_dash.csv");
    if snapshot_src.exists() {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(snapshot_src)
            .expect("Failed to open spacex_launch_dash.csv");
        let headers = rdr.headers().expect("Failed to read snapshot headers").clone();
        let missing: Vec<&str> = REQUIRED_HEADERS
            .iter()
            .copied()
            .filter(|h| !headers.iter().any(|found| found.trim() == *h))
            .collect();

        if missing.is_empty() {
            fs::copy(snapshot_src, &dest).unwrap();
        } else {
            println!(
                "cargo:warning=snapshot is missing columns {:?}; embedding an empty snapshot",
                missing
            );
            fs::write(&dest, "").unwrap();
        }
    } else {
        fs::write(&dest, "").unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/spacex_launch_dash.csv");
}
