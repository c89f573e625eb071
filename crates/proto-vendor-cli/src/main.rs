mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "proto-vendor")]
#[command(version, about = "Refresh the vendored third-party .proto schema files")]
struct Cli {
    /// Directory holding the vendored proto tree
    #[arg(long, default_value = ".")]
    dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_config(&cli.dir);
    commands::refresh::run(&cli.dir, config).await
}
