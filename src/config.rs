//! Persisted application configuration.
//! Loading and saving are pure functions over an explicit file path so the
//! components using the configuration can be tested with a temporary file.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Maximum number of entries kept in the recent-mods and Steam path histories.
pub const MAX_HISTORY: usize = 10;

/// Log level stored in the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// Maps the configured level onto a `log` filter level.
    pub fn to_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warning => log::LevelFilter::Warn,
            LogLevel::Error | LogLevel::Critical => log::LevelFilter::Error,
        }
    }
}

/// Application configuration persisted as flat JSON.
///
/// Every field carries a default so a partial or older config file merges
/// cleanly with the current shape on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: String,
    pub window_size: (u32, u32),
    pub log_level: LogLevel,
    pub recent_mods: Vec<String>,
    pub steam_path_history: Vec<String>,
    pub current_steam_path: Option<String>,
    pub first_run: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: "flatly".to_string(),
            window_size: (1000, 1000),
            log_level: LogLevel::default(),
            recent_mods: Vec::new(),
            steam_path_history: Vec::new(),
            current_steam_path: None,
            first_run: true,
        }
    }
}

impl AppConfig {
    /// Records a successfully created mod: most-recent-first, de-duplicated,
    /// capped at [`MAX_HISTORY`] entries.
    pub fn remember_mod(&mut self, short_name: &str) {
        push_mru(&mut self.recent_mods, short_name);
    }

    /// Records a resolved Steam path as current and pushes it onto the
    /// history with the same MRU policy as [`Self::remember_mod`].
    pub fn remember_steam_path(&mut self, path: &str) {
        self.current_steam_path = Some(path.to_string());
        push_mru(&mut self.steam_path_history, path);
    }
}

fn push_mru(history: &mut Vec<String>, entry: &str) {
    history.retain(|existing| existing != entry);
    history.insert(0, entry.to_string());
    history.truncate(MAX_HISTORY);
}

/// Returns the default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    home_dir().join(".config").join("modsmith").join("app_config.json")
}

fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Loads the configuration from the given path.
///
/// A missing or malformed file degrades to the default configuration; this
/// function never fails, matching the expectation that a broken config must
/// not prevent the tool from starting.
pub fn load_config<P: AsRef<Path>>(path: P) -> AppConfig {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(config) => {
                debug!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Malformed configuration at {}: {e}; using defaults", path.display());
                AppConfig::default()
            }
        },
        Err(_) => {
            debug!("No configuration at {}; using defaults", path.display());
            AppConfig::default()
        }
    }
}

/// Saves the configuration as pretty-printed JSON, creating parent
/// directories as needed.
pub fn save_config<P: AsRef<Path>>(path: P, config: &AppConfig) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    let content = serde_json::to_string_pretty(config)
        .map_err(|e| Error::ConfigError(e.to_string()))?;
    std::fs::write(path, content).map_err(Error::IoError)
}
