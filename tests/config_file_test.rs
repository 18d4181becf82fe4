//! Tests for loading configuration files.

use std::io::Write;

use tictac::{ConfigOverrides, TictacConfig};

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = TictacConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, TictacConfig::default());
}

#[test]
fn test_full_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[board]
width = 4
height = 4
to_win = 4

[display]
tick_rate_hz = 240.0
min_width = 40
min_height = 20
show_stats = true

[logging]
file = "game.log"
filter = "debug"
"#
    )
    .unwrap();

    let config = TictacConfig::load_or_default(file.path()).unwrap();
    assert_eq!(*config.board().width(), 4);
    assert_eq!(*config.board().to_win(), 4);
    assert_eq!(*config.display().tick_rate_hz(), 240.0);
    assert_eq!(*config.display().min_width(), 40);
    assert!(*config.display().show_stats());
    assert_eq!(config.logging().filter(), "debug");
    assert!(config.validate().is_ok());
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[board\nwidth = ").unwrap();
    let err = TictacConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_overrides_apply_on_top_of_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[board]\nwidth = 5\nheight = 5\nto_win = 4\n").unwrap();

    let mut config = TictacConfig::from_file(file.path()).unwrap();
    config.apply(&ConfigOverrides {
        to_win: Some(9),
        ..Default::default()
    });
    assert_eq!(*config.board().width(), 5);
    assert_eq!(*config.board().to_win(), 9);
    // Longer than any line on a 5x5 board.
    assert!(config.validate().is_err());
}
