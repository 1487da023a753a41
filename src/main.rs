mod config;
mod git;
mod github;
mod http;
mod logger;
mod notifier;
mod slack;

use anyhow::{Context, Result};
use config::{Cli, Config};
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_or_exit();
    logger::init(cli.verbose)?;

    log::info!("Starting");
    let config =
        Config::from_cli(cli, |key| env::var(key).ok()).context("Invalid configuration")?;

    notifier::run(&config)
        .await
        .context("Cannot notify the release")?;

    Ok(())
}
