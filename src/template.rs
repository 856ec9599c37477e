//! Template tree copying with placeholder substitution.
//! Walks the bundled template directory and writes every entry into the mod
//! folder, replacing the placeholder tokens in file contents and in file and
//! directory names.

use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Token replaced with the short mod name. Appears bare in file and
/// directory names and wrapped in angle brackets inside file contents.
pub const SHORT_NAME_TOKEN: &str = "your_mod_name_here";

/// Token replaced with the full display name.
pub const DISPLAY_NAME_TOKEN: &str = "your_long_mod_name_here";

/// Replaces the angle-bracketed placeholder tokens inside file contents.
pub fn substitute_content(text: &str, short_name: &str, name: &str) -> String {
    text.replace(&format!("<{SHORT_NAME_TOKEN}>"), short_name)
        .replace(&format!("<{DISPLAY_NAME_TOKEN}>"), name)
}

/// Replaces the bare placeholder tokens in a file or directory name.
pub fn substitute_name(file_name: &str, short_name: &str, name: &str) -> String {
    file_name
        .replace(SHORT_NAME_TOKEN, short_name)
        .replace(DISPLAY_NAME_TOKEN, name)
}

fn substitute_path(relative: &Path, short_name: &str, name: &str) -> PathBuf {
    let mut result = PathBuf::new();
    for component in relative.components() {
        let part = component.as_os_str().to_string_lossy();
        result.push(substitute_name(&part, short_name, name));
    }
    result
}

/// Recursively copies the template tree into the destination, substituting
/// the placeholder tokens in every path component and in every file's
/// contents.
///
/// Files must be UTF-8 text; a non-text file aborts the copy. The first
/// error anywhere in the walk aborts the whole operation; files already
/// written are not rolled back.
pub fn copy_and_replace(
    source: &Path,
    destination: &Path,
    short_name: &str,
    name: &str,
) -> Result<()> {
    if !source.is_dir() {
        return Err(Error::TemplateError(format!(
            "template directory does not exist: {}",
            source.display()
        )));
    }

    for entry in WalkDir::new(source) {
        let entry = entry.map_err(|e| Error::TemplateError(e.to_string()))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| Error::TemplateError(e.to_string()))?;
        let target = destination.join(substitute_path(relative, short_name, name));

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target).map_err(Error::IoError)?;
        } else {
            debug!("Copying template file to {}", target.display());
            let content = std::fs::read_to_string(entry.path()).map_err(|e| {
                Error::TemplateError(format!(
                    "could not read {} as text: {e}",
                    entry.path().display()
                ))
            })?;
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent).map_err(Error::IoError)?;
            }
            std::fs::write(&target, substitute_content(&content, short_name, name))
                .map_err(Error::IoError)?;
        }
    }

    Ok(())
}
