//! modsmith is a scaffolding tool for Crusader Kings III mod projects.
//! It locates the Steam installation, probes the installed game version,
//! validates a mod identity, writes the Paradox `.mod` descriptor files and
//! copies a template tree into the new mod folder.

/// Command-line interface module for the modsmith application
pub mod cli;

/// Persisted application configuration (theme, histories, Steam path)
pub mod config;

/// Generation of the `.mod` descriptor record format
pub mod descriptor;

/// Debug mode detection from the environment
pub mod debug;

/// Error types and handling for the modsmith application
pub mod error;

/// Mod identity, tag vocabulary and tag defaulting policy
pub mod identity;

/// Logger initialization
pub mod logger;

/// User input and interaction handling
pub mod prompt;

/// Mod folder and descriptor file creation
pub mod scaffold;

/// Steam installation discovery
/// Registry probe on Windows, fixed candidate paths elsewhere,
/// with a persisted-path fast path and an interactive fallback
pub mod steam;

/// Template tree copying with placeholder substitution
pub mod template;

/// Mod name and short name validation against the reserved-name blocklist
pub mod validate;

/// Game version probing from the launcher settings file
pub mod version;
