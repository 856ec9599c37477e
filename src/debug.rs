//! Debug mode detection from the environment.
//! `CK3_MOD_DEBUG` redirects scaffolding into a local output directory; a
//! packaged (release) build ignores the variable entirely.

/// Environment variable toggling debug mode.
pub const DEBUG_ENV_VAR: &str = "CK3_MOD_DEBUG";

/// Interprets the raw environment value.
///
/// Truthy values are `1`, `true` and `yes` (case-insensitive); `0`, `false`,
/// `no`, anything else, and an unset variable are all falsy. A frozen
/// (packaged) build forces debug mode off regardless of the variable.
pub fn debug_mode_from(value: Option<&str>, frozen: bool) -> bool {
    if frozen {
        return false;
    }
    match value.map(str::to_lowercase).as_deref() {
        Some("1") | Some("true") | Some("yes") => true,
        _ => false,
    }
}

/// Returns whether debug mode is enabled for this process.
pub fn is_debug_mode() -> bool {
    let value = std::env::var(DEBUG_ENV_VAR).ok();
    debug_mode_from(value.as_deref(), !cfg!(debug_assertions))
}
