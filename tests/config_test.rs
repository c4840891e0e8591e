//! Tests for TOML config loading and command-line overrides.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use strictly_tictactoe::{AppConfig, DEFAULT_LOG_FILE, Player, Theme};

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("tictactoe.toml");
    fs::write(&path, content).expect("Failed to write TOML");
    path
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).expect("Load failed");

    assert_eq!(config, AppConfig::default());
    assert_eq!(*config.theme(), Theme::Light);
    assert_eq!(*config.first_player(), Player::X);
    assert_eq!(config.log_file(), &PathBuf::from(DEFAULT_LOG_FILE));
}

#[test]
fn test_full_file_is_loaded() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        r#"theme = "dark"
first_player = "o"
log_file = "game.log"
"#,
    );

    let config = AppConfig::from_file(&path).expect("Load failed");
    assert_eq!(*config.theme(), Theme::Dark);
    assert_eq!(*config.first_player(), Player::O);
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "theme = \"dark\"\n");

    let config = AppConfig::load_or_default(&path).expect("Load failed");
    assert_eq!(*config.theme(), Theme::Dark);
    assert_eq!(*config.first_player(), Player::X);
}

#[test]
fn test_empty_file_is_valid() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "");

    let config = AppConfig::from_file(&path).expect("Load failed");
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_unknown_theme_is_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "theme = \"solarized\"\n");

    let err = AppConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_unknown_key_is_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "difficulty = \"hard\"\n");

    assert!(AppConfig::from_file(&path).is_err());
}

#[test]
fn test_unreadable_path_reports_location() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    // A directory cannot be read as a file.
    let err = AppConfig::from_file(dir.path()).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.file.ends_with("config.rs"));
    assert!(err.to_string().starts_with("Config error: "));
}

#[test]
fn test_overrides_win_over_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "theme = \"dark\"\nfirst_player = \"o\"\n");

    let config = AppConfig::from_file(&path)
        .expect("Load failed")
        .with_overrides(Some(Theme::Light), None, Some(PathBuf::from("other.log")));

    assert_eq!(*config.theme(), Theme::Light);
    assert_eq!(*config.first_player(), Player::O);
    assert_eq!(config.log_file(), &PathBuf::from("other.log"));
}

#[test]
fn test_config_round_trips_through_toml() {
    let config = AppConfig::default().with_overrides(Some(Theme::Dark), Some(Player::O), None);
    let text = toml::to_string(&config).expect("Serialize failed");

    assert!(text.contains("theme = \"dark\""));
    assert!(text.contains("first_player = \"o\""));
    assert_eq!(toml::from_str::<AppConfig>(&text).expect("Parse failed"), config);
}
