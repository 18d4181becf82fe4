//! Game configuration.
//!
//! Settings come from an optional TOML file and are then overridden by
//! command-line flags. Every field has a default, so an empty file (or no
//! file at all) gives a standard 3×3 game.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictac_engine::{DEFAULT_SIZE, DEFAULT_TO_WIN};
use tracing::{debug, info, instrument};

/// Fixed update steps per second when none is configured.
pub const DEFAULT_TICK_RATE_HZ: f64 = 60.0;

/// Slowest accepted update rate.
pub const MIN_TICK_RATE_HZ: f64 = 1.0;

/// Fastest accepted update rate.
pub const MAX_TICK_RATE_HZ: f64 = 10_000.0;

/// Complete configuration.
#[derive(Debug, Clone, PartialEq, Default, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TictacConfig {
    /// Board shape and win length.
    board: BoardConfig,
    /// Update rate and screen settings.
    display: DisplayConfig,
    /// Log destination and filter.
    logging: LoggingConfig,
}

/// Board shape and win length.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Number of columns.
    width: usize,
    /// Number of rows.
    height: usize,
    /// Markers in a row needed to win.
    to_win: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            to_win: DEFAULT_TO_WIN,
        }
    }
}

/// Update rate and screen settings.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Fixed update steps per second.
    tick_rate_hz: f64,
    /// Narrowest terminal the board is drawn in.
    min_width: u16,
    /// Shortest terminal the board is drawn in.
    min_height: u16,
    /// Draw the frame timing overlay.
    show_stats: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: DEFAULT_TICK_RATE_HZ,
            min_width: 80,
            min_height: 24,
            show_stats: false,
        }
    }
}

/// Log destination and filter.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// File the log is written to; the terminal belongs to the game.
    file: PathBuf,
    /// `tracing_subscriber` filter used when `RUST_LOG` is unset.
    filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("tictac.log"),
            filter: "info".to_string(),
        }
    }
}

/// Values that replace configured ones, typically from the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    /// Board columns.
    pub width: Option<usize>,
    /// Board rows.
    pub height: Option<usize>,
    /// Win length.
    pub to_win: Option<usize>,
    /// Update rate.
    pub tick_rate_hz: Option<f64>,
    /// Force the stats overlay on.
    pub show_stats: bool,
    /// Log file.
    pub log_file: Option<PathBuf>,
}

impl TictacConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        info!(
            width = config.board.width,
            height = config.board.height,
            to_win = config.board.to_win,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise starts from the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces configured values with any overrides that are set.
    #[instrument(skip(self))]
    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(width) = overrides.width {
            self.board.width = width;
        }
        if let Some(height) = overrides.height {
            self.board.height = height;
        }
        if let Some(to_win) = overrides.to_win {
            self.board.to_win = to_win;
        }
        if let Some(rate) = overrides.tick_rate_hz {
            self.display.tick_rate_hz = rate;
        }
        if overrides.show_stats {
            self.display.show_stats = true;
        }
        if let Some(file) = &overrides.log_file {
            self.logging.file = file.clone();
        }
    }

    /// Checks that the configuration describes a playable game.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height, to_win) = (self.board.width, self.board.height, self.board.to_win);
        if width == 0 || height == 0 {
            return Err(ConfigError::new(format!(
                "Board must be at least 1x1, got {}x{}",
                width, height
            )));
        }
        if width > u8::MAX as usize || height > u8::MAX as usize {
            return Err(ConfigError::new(format!(
                "Board larger than {}x{} cannot be drawn, got {}x{}",
                u8::MAX,
                u8::MAX,
                width,
                height
            )));
        }
        if to_win == 0 || to_win > width.max(height) {
            return Err(ConfigError::new(format!(
                "to_win must be between 1 and {}, got {}",
                width.max(height),
                to_win
            )));
        }
        let rate = self.display.tick_rate_hz;
        if !(MIN_TICK_RATE_HZ..=MAX_TICK_RATE_HZ).contains(&rate) {
            return Err(ConfigError::new(format!(
                "tick_rate_hz must be between {} and {}, got {}",
                MIN_TICK_RATE_HZ, MAX_TICK_RATE_HZ, rate
            )));
        }
        if self.display.min_width == 0 || self.display.min_height == 0 {
            return Err(ConfigError::new("Minimum screen size must be at least 1x1".to_string()));
        }
        Ok(())
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TictacConfig::default();
        assert_eq!(*config.board().width(), 3);
        assert_eq!(*config.board().height(), 3);
        assert_eq!(*config.board().to_win(), 3);
        assert_eq!(*config.display().tick_rate_hz(), 60.0);
        assert_eq!(*config.display().min_width(), 80);
        assert!(!*config.display().show_stats());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(TictacConfig::from_toml("").unwrap(), TictacConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = TictacConfig::from_toml("[board]\nwidth = 5\nto_win = 4\n").unwrap();
        assert_eq!(*config.board().width(), 5);
        assert_eq!(*config.board().height(), 3);
        assert_eq!(*config.board().to_win(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = TictacConfig::from_toml("[board]\ndepth = 3\n").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_overrides_win() {
        let mut config = TictacConfig::default();
        config.apply(&ConfigOverrides {
            width: Some(4),
            tick_rate_hz: Some(240.0),
            show_stats: true,
            log_file: Some(PathBuf::from("/tmp/game.log")),
            ..Default::default()
        });
        assert_eq!(*config.board().width(), 4);
        assert_eq!(*config.board().height(), 3);
        assert_eq!(*config.display().tick_rate_hz(), 240.0);
        assert!(*config.display().show_stats());
        assert_eq!(config.logging().file(), Path::new("/tmp/game.log"));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad = [
            "[board]\nwidth = 0\n",
            "[board]\nto_win = 0\n",
            "[board]\nto_win = 4\n",
            "[board]\nwidth = 300\n",
            "[display]\ntick_rate_hz = 0.0\n",
            "[display]\ntick_rate_hz = -5.0\n",
            "[display]\ntick_rate_hz = 0.5\n",
            "[display]\ntick_rate_hz = 1e10\n",
            "[display]\ntick_rate_hz = 1e-30\n",
            "[display]\nmin_height = 0\n",
        ];
        for text in bad {
            let config = TictacConfig::from_toml(text).unwrap();
            assert!(config.validate().is_err(), "accepted: {text}");
        }
    }

    #[test]
    fn test_tick_rate_bounds_inclusive() {
        for rate in [MIN_TICK_RATE_HZ, MAX_TICK_RATE_HZ] {
            let mut config = TictacConfig::default();
            config.apply(&ConfigOverrides {
                tick_rate_hz: Some(rate),
                ..Default::default()
            });
            assert!(config.validate().is_ok(), "rejected: {rate}");
        }
    }

    #[test]
    fn test_to_toml_parses_back() {
        let mut config = TictacConfig::default();
        config.apply(&ConfigOverrides {
            height: Some(4),
            ..Default::default()
        });
        let text = config.to_toml().unwrap();
        assert_eq!(TictacConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_error_records_location() {
        let err = ConfigError::new("boom".to_string());
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Config error: boom at "));
    }
}
