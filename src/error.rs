//! Error handling for the modsmith application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

use crate::validate::ValidationError;

/// Custom error types for modsmith operations.
///
/// Recoverable conditions (Steam not detected, launcher settings missing) are
/// dedicated variants so callers can match on them and degrade instead of
/// aborting.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Steam installation could not be auto-detected on this machine
    #[error("Steam installation not found.")]
    SteamNotFound,

    /// The user declined or emptied the manual Steam path selection
    #[error("A Steam installation path is required to proceed.")]
    SteamPathRequired,

    /// The game launcher settings file is absent under the Steam root
    #[error("Launcher settings file not found at: {path}.")]
    LauncherSettingsNotFound { path: String },

    /// The game launcher settings file exists but could not be parsed
    #[error("Could not parse launcher settings file: {0}.")]
    LauncherSettingsInvalid(String),

    /// Represents validation failures in the user-supplied mod identity
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Scaffolding is not possible on the current operating system
    #[error("Unsupported operating system.")]
    UnsupportedPlatform,

    /// Represents errors that occur during configuration parsing or saving
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors that occur during template tree copying
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents errors that occur during interactive prompting
    #[error("Prompt error: {0}.")]
    PromptError(String),
}

/// Convenience type alias for Results with modsmith's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Logs full detail, prints the user-facing message to stderr and exits with
/// status code 1.
pub fn default_error_handler(err: Error) -> ! {
    log::error!("{err:?}");
    eprintln!("{err}");
    std::process::exit(1);
}
