//! Tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use tictac::{Cli, TictacConfig, logging, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = TictacConfig::load_or_default(&cli.config)?;
    config.apply(&cli.overrides());
    config.validate()?;

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    logging::init(config.logging())?;
    info!(config = ?config, "Starting tictac");

    tui::run(&config)
}
