//! Mod name and short name validation.
//! A pure function over its inputs plus one read-only load of the
//! reserved-name blocklist; no filesystem mutation happens here.

use log::warn;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

/// Blocklist bundled with the application.
const BUNDLED_BLOCKLIST: &str = include_str!("../data/blocked_short_mod_names.json");

/// Reasons an identity can be rejected, in the order they are checked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Mod name must be at least 3 characters long.")]
    NameTooShort,

    #[error("Short mod name cannot be empty.")]
    EmptyShortName,

    #[error("The short mod name '{0}' is already in use and cannot be used.")]
    NameReserved(String),

    #[error("Short mod name must contain only lowercase letters, numbers, and underscores.")]
    InvalidCharacters,

    #[error("Short mod name must be between 3 and 30 characters long.")]
    LengthOutOfRange,
}

fn short_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z0-9_]+$").unwrap())
}

/// Validates a mod identity against the character-set, length and
/// reserved-name rules.
///
/// Checks run in a fixed order and the first failure wins:
/// 1. display name length >= 3
/// 2. short name non-empty
/// 3. short name not on the blocklist (case-insensitive)
/// 4. short name matches `^[a-z0-9_]+$`
/// 5. short name length in 3..=30
pub fn validate_identity(
    name: &str,
    short_name: &str,
    blocklist: &[String],
) -> Result<(), ValidationError> {
    if name.chars().count() < 3 {
        return Err(ValidationError::NameTooShort);
    }

    if short_name.is_empty() {
        return Err(ValidationError::EmptyShortName);
    }

    let lowered = short_name.to_lowercase();
    if blocklist.iter().any(|blocked| blocked.to_lowercase() == lowered) {
        return Err(ValidationError::NameReserved(short_name.to_string()));
    }

    if !short_name_pattern().is_match(short_name) {
        return Err(ValidationError::InvalidCharacters);
    }

    let len = short_name.chars().count();
    if !(3..=30).contains(&len) {
        return Err(ValidationError::LengthOutOfRange);
    }

    Ok(())
}

/// Extracts the reserved names from a blocklist JSON document.
///
/// Accepts the key `BLOCKED_SHORT_MOD_NAMES` or the older
/// `BLOCKED_ABBREVIATIONS`; anything else yields an empty list.
fn parse_blocklist(content: &str) -> Vec<String> {
    let value: serde_json::Value = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(e) => {
            warn!("Malformed blocklist: {e}; continuing with an empty list");
            return Vec::new();
        }
    };

    let entries = value
        .get("BLOCKED_SHORT_MOD_NAMES")
        .or_else(|| value.get("BLOCKED_ABBREVIATIONS"))
        .and_then(|v| v.as_array());

    match entries {
        Some(entries) => entries
            .iter()
            .filter_map(|entry| entry.as_str().map(str::to_string))
            .collect(),
        None => {
            warn!("Blocklist has no recognized key; continuing with an empty list");
            Vec::new()
        }
    }
}

/// Loads a blocklist from an external JSON file.
///
/// A missing or malformed file degrades to an empty list so validation can
/// still run.
pub fn load_blocklist<P: AsRef<Path>>(path: P) -> Vec<String> {
    match std::fs::read_to_string(path.as_ref()) {
        Ok(content) => parse_blocklist(&content),
        Err(_) => {
            warn!(
                "Blocklist not found at {}; continuing with an empty list",
                path.as_ref().display()
            );
            Vec::new()
        }
    }
}

/// Returns the blocklist bundled with the application.
pub fn default_blocklist() -> Vec<String> {
    parse_blocklist(BUNDLED_BLOCKLIST)
}
