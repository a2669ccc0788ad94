//! Tests for configuration loading and saving.

use waymark::storage::config::{self, AppConfig, ConfigError};
use waymark::ui::theme::Theme;

#[test]
fn test_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.map.default_zoom, 16);
    assert_eq!(config.ui.theme, Theme::Dark);
    assert!(config.location.home().is_none());
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = config::load_config_from(&dir.path().join("config.toml")).unwrap();

    assert_eq!(config.map.default_zoom, 16);
    assert!(config.location.home().is_none());
}

#[test]
fn test_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = AppConfig::default();
    config.map.default_zoom = 13;
    config.location.latitude = Some(51.5074);
    config.location.longitude = Some(-0.1278);
    config.ui.theme = Theme::Light;

    config::save_config_to(&config, &path).unwrap();
    let loaded = config::load_config_from(&path).unwrap();

    assert_eq!(loaded.map.default_zoom, 13);
    assert_eq!(loaded.location.latitude, Some(51.5074));
    assert_eq!(loaded.location.longitude, Some(-0.1278));
    assert_eq!(loaded.ui.theme, Theme::Light);
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[map]\ndefault_zoom = 12\n").unwrap();

    let loaded = config::load_config_from(&path).unwrap();

    assert_eq!(loaded.map.default_zoom, 12);
    assert_eq!(loaded.ui.theme, Theme::Dark);
    assert!(loaded.location.home().is_none());
}

#[test]
fn test_garbage_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "not toml at all {{{").unwrap();

    let result = config::load_config_from(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn test_home_requires_both_coordinates() {
    let mut config = AppConfig::default();
    config.location.latitude = Some(51.5);
    assert!(config.location.home().is_none());

    config.location.longitude = Some(-0.12);
    let home = config.location.home().unwrap();
    assert_eq!(home.lat, 51.5);
    assert_eq!(home.lng, -0.12);
}
