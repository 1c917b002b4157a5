//! Command implementations for the launch records CLI.
//!
//! Provides subcommands for downloading the launch dataset and for
//! inspecting what the dashboard would show without a browser.

use clap::Subcommand;
use lrd_core::dataset::DATASET_URL;

pub mod fetch;
pub mod report;

#[derive(Subcommand)]
pub enum Command {
    /// Download the launch dataset CSV (e.g. to refresh the dashboard's offline snapshot)
    Fetch {
        /// Output path for the CSV
        #[arg(short = 'o', long, default_value = "fixtures/spacex_launch_dash.csv")]
        output: String,

        /// Dataset URL
        #[arg(long, default_value = DATASET_URL)]
        url: String,
    },

    /// Print per-site launch statistics as CSV
    Summary {
        /// Read a local CSV instead of downloading
        #[arg(short = 'i', long)]
        input: Option<String>,

        /// Dataset URL
        #[arg(long, default_value = DATASET_URL)]
        url: String,
    },

    /// Print the pie and scatter chart descriptions as JSON
    Figure {
        /// Read a local CSV instead of downloading
        #[arg(short = 'i', long)]
        input: Option<String>,

        /// Dataset URL
        #[arg(long, default_value = DATASET_URL)]
        url: String,

        /// Launch site, or ALL
        #[arg(short = 's', long, default_value = "ALL")]
        site: String,

        /// Lower payload bound in kg (defaults to the observed minimum)
        #[arg(long)]
        low: Option<f64>,

        /// Upper payload bound in kg (defaults to the observed maximum)
        #[arg(long)]
        high: Option<f64>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch { output, url } => fetch::run_fetch(&output, &url).await,
        Command::Summary { input, url } => report::run_summary(input.as_deref(), &url).await,
        Command::Figure {
            input,
            url,
            site,
            low,
            high,
        } => report::run_figure(input.as_deref(), &url, &site, low, high).await,
    }
}
