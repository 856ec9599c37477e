//! Steam installation discovery.
//! Detection strategies are implementations of the `SteamLocator` capability
//! trait; the resolution flow depends only on the trait, so tests can inject
//! fake locators and prompters.

use log::{debug, info};
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::prompt::Prompter;

/// A single Steam detection strategy.
pub trait SteamLocator {
    /// Attempts to locate the Steam installation root. `None` means this
    /// strategy found nothing; the next one is tried.
    fn detect(&self) -> Option<PathBuf>;
}

/// Probes a named environment variable for an existing directory.
pub struct EnvLocator {
    var: String,
}

impl EnvLocator {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl SteamLocator for EnvLocator {
    fn detect(&self) -> Option<PathBuf> {
        let value = std::env::var_os(&self.var)?;
        let path = PathBuf::from(value);
        if path.is_dir() {
            Some(path)
        } else {
            None
        }
    }
}

/// Checks an ordered list of fixed candidate directories.
pub struct KnownPathsLocator {
    candidates: Vec<PathBuf>,
}

impl KnownPathsLocator {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// The common Steam locations on Linux and other Unix systems.
    pub fn unix_defaults() -> Self {
        let home = home_dir();
        Self::new(vec![
            home.join(".steam/steam"),
            home.join(".local/share/Steam"),
            home.join("Steam"),
            PathBuf::from("/usr/local/games/Steam"),
            PathBuf::from("/usr/games/Steam"),
        ])
    }
}

impl SteamLocator for KnownPathsLocator {
    fn detect(&self) -> Option<PathBuf> {
        self.candidates.iter().find(|path| path.exists()).cloned()
    }
}

fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Reads the Steam path from the Windows registry.
///
/// Tries the per-user `SteamPath` value first, then the machine-wide 32-bit
/// `InstallPath` value.
#[cfg(windows)]
pub struct RegistryLocator;

#[cfg(windows)]
impl RegistryLocator {
    pub fn new() -> Self {
        Self
    }

    fn read_value(root: winreg::RegKey, subkey: &str, value: &str) -> Option<PathBuf> {
        let key = root.open_subkey(subkey).ok()?;
        let path: String = key.get_value(value).ok()?;
        Some(PathBuf::from(path))
    }
}

#[cfg(windows)]
impl SteamLocator for RegistryLocator {
    fn detect(&self) -> Option<PathBuf> {
        use winreg::enums::{HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE};
        use winreg::RegKey;

        Self::read_value(
            RegKey::predef(HKEY_CURRENT_USER),
            r"SOFTWARE\Valve\Steam",
            "SteamPath",
        )
        .or_else(|| {
            Self::read_value(
                RegKey::predef(HKEY_LOCAL_MACHINE),
                r"SOFTWARE\Wow6432Node\Valve\Steam",
                "InstallPath",
            )
        })
    }
}

/// Returns the detection strategies for the current operating system, in
/// probing order. The environment probe runs first so users can override
/// detection without touching the config file.
pub fn default_locators() -> Vec<Box<dyn SteamLocator>> {
    let mut locators: Vec<Box<dyn SteamLocator>> =
        vec![Box::new(EnvLocator::new("MODSMITH_STEAM_PATH"))];

    #[cfg(windows)]
    locators.push(Box::new(RegistryLocator::new()));

    #[cfg(not(windows))]
    locators.push(Box::new(KnownPathsLocator::unix_defaults()));

    locators
}

/// Runs the detection strategies in order and returns the first hit.
pub fn detect_steam_path(locators: &[Box<dyn SteamLocator>]) -> Option<PathBuf> {
    locators.iter().find_map(|locator| locator.detect())
}

/// Resolves the Steam installation path.
///
/// The persisted path is trusted when it still exists on disk; otherwise
/// auto-detection runs, and as a last resort the user is prompted. An empty
/// manual selection is fatal. Every successful resolution is persisted into
/// the configuration (current path plus MRU history); saving the config file
/// is left to the caller.
pub fn resolve_installation_path(
    config: &mut AppConfig,
    locators: &[Box<dyn SteamLocator>],
    prompter: &dyn Prompter,
) -> Result<PathBuf> {
    if let Some(persisted) = config.current_steam_path.as_deref() {
        let path = PathBuf::from(persisted);
        if path.exists() {
            debug!("Using persisted Steam path: {}", path.display());
            return Ok(path);
        }
        debug!("Persisted Steam path {} no longer exists", path.display());
    }

    let path = match detect_steam_path(locators) {
        Some(path) => {
            info!("Detected Steam installation at {}", path.display());
            path
        }
        None => {
            info!("Steam installation not auto-detected, prompting for a path");
            prompter
                .pick_directory("Select Steam installation directory")?
                .ok_or(Error::SteamPathRequired)?
        }
    };

    config.remember_steam_path(&path.display().to_string());
    Ok(path)
}
