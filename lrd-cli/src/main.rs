//! LRD CLI - Command line tool for the SpaceX launch records dataset.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "lrd-cli",
    version,
    about = "SpaceX launch records dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: lrd_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("lrd-cli starting");
    lrd_cmd::run(cli.command).await
}
