//! Command-line interface for tictac.

use clap::Parser;
use std::path::PathBuf;

use crate::config::ConfigOverrides;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Terminal tic-tac-toe with keyboard and mouse input", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults)
    #[arg(short, long, default_value = "tictac.toml")]
    pub config: PathBuf,

    /// Board columns
    #[arg(long)]
    pub width: Option<usize>,

    /// Board rows
    #[arg(long)]
    pub height: Option<usize>,

    /// Markers in a row needed to win
    #[arg(long)]
    pub to_win: Option<usize>,

    /// Fixed update steps per second
    #[arg(long)]
    pub tick_rate: Option<f64>,

    /// Show render/update rate overlay
    #[arg(long)]
    pub show_stats: bool,

    /// Write the log here instead of the configured file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Config values set on the command line.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            width: self.width,
            height: self.height,
            to_win: self.to_win,
            tick_rate_hz: self.tick_rate,
            show_stats: self.show_stats,
            log_file: self.log_file.clone(),
        }
    }
}
