//! Generation of the `.mod` descriptor record format.
//! The output is consumed by the game's launcher and must be reproduced
//! byte-for-byte: tab-indented tags, comma-joined with no trailing comma,
//! and forward slashes in the `path` field on every platform.

use std::path::Path;

use crate::identity::ModIdentity;

/// Version string emitted when the supported game version is unknown.
pub const VERSION_PLACEHOLDER: &str = "TODO";

/// Normalizes a filesystem path to forward slashes for the `path` field.
pub fn normalize_path(path: &Path) -> String {
    path.display().to_string().replace('\\', "/")
}

fn tag_block(tags: &[&str]) -> String {
    tags.iter()
        .map(|tag| format!("\t\"{tag}\""))
        .collect::<Vec<_>>()
        .join(",\n")
}

fn supported_version_or_placeholder(identity: &ModIdentity) -> String {
    match identity.supported_version.as_deref() {
        Some(version) if !version.is_empty() => version.to_string(),
        _ => VERSION_PLACEHOLDER.to_string(),
    }
}

/// Generates the content of the in-folder `descriptor.mod` file.
pub fn descriptor_content(identity: &ModIdentity) -> String {
    format!(
        "version=\"1\"\ntags={{\n{}\n}}\nname=\"{}\"\nsupported_version=\"{}\"\n",
        tag_block(&identity.effective_tags()),
        identity.name,
        supported_version_or_placeholder(identity),
    )
}

/// Generates the content of the index `<short_name>.mod` file.
///
/// Identical to [`descriptor_content`] plus a trailing `path` field pointing
/// at the mod folder.
pub fn index_content(identity: &ModIdentity, mod_folder: &Path) -> String {
    format!(
        "{}path=\"{}\"\n",
        descriptor_content(identity),
        normalize_path(mod_folder),
    )
}
