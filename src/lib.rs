//! Terminal tic-tac-toe.
//!
//! # Architecture
//!
//! - **Engine**: board, turn order and win detection live in the
//!   `tictac_engine` crate and know nothing about terminals
//! - **Config**: TOML file plus command-line overrides
//! - **TUI**: terminal lifecycle, fixed-step loop, input decoding and
//!   rendering with ratatui + crossterm
//!
//! # Example
//!
//! ```no_run
//! use tictac::{TictacConfig, tui};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = TictacConfig::default();
//! config.validate()?;
//! tui::run(&config)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod tui;

pub use cli::Cli;
pub use config::{BoardConfig, ConfigError, ConfigOverrides, DisplayConfig, LoggingConfig, TictacConfig};
