//! Unit tests for config loading and saving

use std::fs;

use tempfile::TempDir;
use termcalc::config::{Config, DisplayConfig};
use termcalc::theme::ThemeMode;

#[test]
fn missing_file_loads_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_from(&temp.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn save_creates_parent_directories() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("termcalc").join("config.toml");

    let mut config = Config::default();
    config.set_theme_mode(ThemeMode::Dark);
    config.save_to(&path).unwrap();

    assert!(path.exists());
    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.theme_mode(), Some(ThemeMode::Dark));
}

#[test]
fn saved_file_is_readable_toml() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");

    let mut config = Config::default();
    config.set_theme_mode(ThemeMode::Light);
    config.save_to(&path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("[theme]"));
    assert!(contents.contains("mode = \"light\""));
    assert!(contents.contains("grouping_separator = \",\""));
}

#[test]
fn partial_file_fills_in_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[display]\nshow_hint = false\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.theme_mode(), None);
    assert!(!config.display.show_hint);
    assert_eq!(config.display.grouping_separator, ',');
}

#[test]
fn custom_separator_is_loaded() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[display]\ngrouping_separator = \"_\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config.display,
        DisplayConfig {
            grouping_separator: '_',
            show_hint: true,
        }
    );
}

#[test]
fn invalid_separator_is_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[display]\ngrouping_separator = \".\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("grouping_separator"));
}

#[test]
fn unknown_theme_mode_is_a_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[theme]\nmode = \"sepia\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn corrupt_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "this is not toml [").unwrap();

    assert!(Config::load_from(&path).is_err());
}
