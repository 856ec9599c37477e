//! Mod folder and descriptor file creation.
//! Computes the destination mods directory, creates the folder tree and
//! writes the index and in-folder descriptor files.

use log::info;
use std::path::{Path, PathBuf};

use crate::descriptor::{descriptor_content, index_content};
use crate::error::{Error, Result};
use crate::identity::ModIdentity;

/// On-disk result of a successful scaffold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModArtifact {
    /// The mods directory the artifact was created in
    pub documents_path: PathBuf,
    /// The created mod folder (`<documents_path>/<short_name>`)
    pub mod_folder_path: PathBuf,
    /// The index file (`<documents_path>/<short_name>.mod`)
    pub mod_file_path: PathBuf,
    /// The in-folder descriptor (`<mod_folder_path>/descriptor.mod`)
    pub descriptor_file_path: PathBuf,
}

/// Returns the directory mods are scaffolded into.
///
/// Debug mode redirects into a local `debug/output` directory; otherwise the
/// game's per-user mods directory is used. Platforms without a known
/// convention are a hard error.
pub fn mod_documents_path(debug: bool) -> Result<PathBuf> {
    if debug {
        return Ok(PathBuf::from("debug").join("output"));
    }

    let home = std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .ok_or(Error::UnsupportedPlatform)?;

    if cfg!(target_os = "windows") {
        Ok(home
            .join("Documents")
            .join("Paradox Interactive")
            .join("Crusader Kings III")
            .join("mod"))
    } else if cfg!(unix) {
        Ok(home
            .join(".local")
            .join("share")
            .join("Paradox Interactive")
            .join("Crusader Kings III")
            .join("mod"))
    } else {
        Err(Error::UnsupportedPlatform)
    }
}

/// Creates the mod folder and both descriptor files under `documents_path`.
///
/// Directory creation is idempotent: scaffolding into an existing folder does
/// not fail and leaves unrelated contents alone. Any I/O failure aborts with
/// an error; files already written stay on disk.
pub fn create_mod_structure(
    identity: &ModIdentity,
    documents_path: &Path,
) -> Result<ModArtifact> {
    std::fs::create_dir_all(documents_path).map_err(Error::IoError)?;

    let mod_folder_path = documents_path.join(&identity.short_name);
    std::fs::create_dir_all(&mod_folder_path).map_err(Error::IoError)?;

    let mod_file_path = documents_path.join(format!("{}.mod", identity.short_name));
    std::fs::write(&mod_file_path, index_content(identity, &mod_folder_path))
        .map_err(Error::IoError)?;

    let descriptor_file_path = mod_folder_path.join("descriptor.mod");
    std::fs::write(&descriptor_file_path, descriptor_content(identity))
        .map_err(Error::IoError)?;

    info!(
        "Mod '{}' created successfully in {}",
        identity.name,
        mod_folder_path.display()
    );

    Ok(ModArtifact {
        documents_path: documents_path.to_path_buf(),
        mod_folder_path,
        mod_file_path,
        descriptor_file_path,
    })
}
