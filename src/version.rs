//! Game version probing.
//! Reads the launcher settings file under the Steam installation tree to
//! discover the currently installed game version.

use log::{debug, info};
use regex::Regex;
use std::path::Path;

use crate::error::{Error, Result};

/// Relative path of the launcher settings file under the Steam root.
pub const LAUNCHER_SETTINGS: &[&str] =
    &["steamapps", "common", "Crusader Kings III", "launcher", "launcher-settings.json"];

/// Version information read from the launcher settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameVersion {
    /// Version string exactly as the launcher reports it
    pub full_version: String,
    /// Dotted numeric version extracted from the full string, or the full
    /// string when no dotted version is present
    pub version_numbers: String,
}

/// Probes the installed game version.
///
/// # Errors
/// * [`Error::LauncherSettingsNotFound`] when the settings file is absent
///   (recoverable; callers substitute a placeholder version)
/// * [`Error::LauncherSettingsInvalid`] when the file is not valid JSON or
///   carries no version field
pub fn probe_game_version<P: AsRef<Path>>(steam_path: P) -> Result<GameVersion> {
    let mut settings_path = steam_path.as_ref().to_path_buf();
    for part in LAUNCHER_SETTINGS {
        settings_path.push(part);
    }

    debug!("Checking launcher settings at: {}", settings_path.display());

    if !settings_path.exists() {
        return Err(Error::LauncherSettingsNotFound {
            path: settings_path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(&settings_path).map_err(Error::IoError)?;
    let settings: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| Error::LauncherSettingsInvalid(e.to_string()))?;

    // "version" is current; "rawVersion" covers older launcher releases.
    let full_version = settings
        .get("version")
        .or_else(|| settings.get("rawVersion"))
        .and_then(|v| v.as_str())
        .ok_or_else(|| {
            Error::LauncherSettingsInvalid("no version field in launcher settings".to_string())
        })?
        .to_string();

    let version_numbers = extract_version_numbers(&full_version);
    info!("Detected game version: {full_version} ({version_numbers})");

    Ok(GameVersion { full_version, version_numbers })
}

/// Extracts a four-part dotted numeric version from the full version string,
/// falling back to the full string when no match is found.
pub fn extract_version_numbers(full_version: &str) -> String {
    let pattern = Regex::new(r"(\d+\.\d+\.\d+\.\d+)").unwrap();
    pattern
        .captures(full_version)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| full_version.to_string())
}
