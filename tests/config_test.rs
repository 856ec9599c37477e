use modsmith::config::{load_config, save_config, AppConfig, LogLevel, MAX_HISTORY};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = load_config(temp_dir.path().join("missing.json"));

    assert_eq!(config.theme, "flatly");
    assert_eq!(config.window_size, (1000, 1000));
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.recent_mods.is_empty());
    assert!(config.steam_path_history.is_empty());
    assert!(config.current_steam_path.is_none());
    assert!(config.first_run);
}

#[test]
fn test_malformed_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("app_config.json");
    fs::write(&path, "{broken").unwrap();

    let config = load_config(&path);
    assert_eq!(config.theme, "flatly");
}

#[test]
fn test_partial_file_merges_with_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("app_config.json");
    fs::write(&path, r#"{"theme": "darkly", "log_level": "DEBUG"}"#).unwrap();

    let config = load_config(&path);
    assert_eq!(config.theme, "darkly");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.window_size, (1000, 1000));
}

#[test]
fn test_save_and_reload_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("app_config.json");

    let mut config = AppConfig::default();
    config.remember_steam_path("/opt/steam");
    config.remember_mod("medieval_overhaul");
    config.first_run = false;

    save_config(&path, &config).unwrap();
    let reloaded = load_config(&path);

    assert_eq!(reloaded.current_steam_path.as_deref(), Some("/opt/steam"));
    assert_eq!(reloaded.steam_path_history, vec!["/opt/steam".to_string()]);
    assert_eq!(reloaded.recent_mods, vec!["medieval_overhaul".to_string()]);
    assert!(!reloaded.first_run);
}

#[test]
fn test_history_is_mru_and_deduplicated() {
    let mut config = AppConfig::default();
    config.remember_mod("first");
    config.remember_mod("second");
    config.remember_mod("first");

    assert_eq!(config.recent_mods, vec!["first".to_string(), "second".to_string()]);
}

#[test]
fn test_history_is_capped() {
    let mut config = AppConfig::default();
    for i in 0..15 {
        config.remember_steam_path(&format!("/steam/{i}"));
    }

    assert_eq!(config.steam_path_history.len(), MAX_HISTORY);
    assert_eq!(config.steam_path_history[0], "/steam/14");
    assert_eq!(config.current_steam_path.as_deref(), Some("/steam/14"));
}

#[test]
fn test_log_level_serializes_uppercase() {
    let config = AppConfig { log_level: LogLevel::Warning, ..AppConfig::default() };
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains(r#""log_level":"WARNING""#));
}
