//! modsmith's main application entry point and orchestration logic.
//! Parses arguments, resolves the Steam installation, probes the game
//! version, validates the mod identity and drives the scaffolding pipeline.

use std::path::PathBuf;

use modsmith::{
    cli::{get_args, Args},
    config::{default_config_path, load_config, save_config},
    debug::is_debug_mode,
    error::{default_error_handler, Error, Result},
    identity::{is_known_tag, ModIdentity, MOD_TAGS},
    logger::init_logger,
    prompt::{DialoguerPrompter, Prompter},
    scaffold::{create_mod_structure, mod_documents_path},
    steam::{default_locators, resolve_installation_path},
    template::copy_and_replace,
    validate::{default_blocklist, validate_identity},
    version::probe_game_version,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Locates the bundled template tree: `essentials` next to the executable,
/// falling back to the current directory.
fn find_template_dir() -> Option<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            candidates.push(dir.join("essentials"));
        }
    }
    candidates.push(PathBuf::from("essentials"));
    candidates.into_iter().find(|path| path.is_dir())
}

/// Builds the mod identity from the command line, checking tags against the
/// fixed vocabulary.
fn build_identity(args: &Args, detected_version: Option<String>) -> Result<ModIdentity> {
    let mut identity = ModIdentity::new(args.name.clone(), args.short_name.clone());

    for tag in &args.tags {
        if !is_known_tag(tag) {
            return Err(Error::ConfigError(format!(
                "unknown tag '{}' (known tags: {})",
                tag,
                MOD_TAGS.join(", ")
            )));
        }
        identity.tags.insert(tag.clone());
    }

    identity.supported_version = args.supported_version.clone().or(detected_version);
    Ok(identity)
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the persisted configuration
/// 2. Resolves the Steam installation path (persisting the choice)
/// 3. Probes the installed game version (missing version is non-fatal)
/// 4. Validates the mod identity
/// 5. Creates the mod folder and descriptor files
/// 6. Copies the template tree with placeholder substitution
/// 7. Records the mod and saves the configuration
fn run(args: Args) -> Result<()> {
    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let mut config = load_config(&config_path);
    init_logger(config.log_level, args.verbose);

    if config.first_run {
        log::info!("Welcome to modsmith! Configuration will be stored at {}", config_path.display());
        config.first_run = false;
    }

    let debug = is_debug_mode();
    if debug {
        log::info!("Debug mode enabled, scaffolding into the local debug output directory");
    }

    let steam_path = match &args.steam_path {
        Some(path) => {
            config.remember_steam_path(&path.display().to_string());
            path.clone()
        }
        None => {
            let prompter = DialoguerPrompter::new();
            resolve_installation_path(&mut config, &default_locators(), &prompter)?
        }
    };

    let detected_version = match probe_game_version(&steam_path) {
        Ok(version) => Some(version.version_numbers),
        Err(err @ (Error::LauncherSettingsNotFound { .. } | Error::LauncherSettingsInvalid(_))) => {
            log::warn!("{err} Falling back to a placeholder supported version.");
            None
        }
        Err(err) => return Err(err),
    };

    let identity = build_identity(&args, detected_version)?;
    validate_identity(&identity.name, &identity.short_name, &default_blocklist())?;

    let documents_path = mod_documents_path(debug)?;
    let mod_folder = documents_path.join(&identity.short_name);
    if mod_folder.exists() && !args.yes {
        let prompter = DialoguerPrompter::new();
        let proceed = prompter.confirm(
            &format!("Mod folder '{}' already exists. Continue?", mod_folder.display()),
            false,
        )?;
        if !proceed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let artifact = create_mod_structure(&identity, &documents_path)?;

    match args.template.clone().or_else(find_template_dir) {
        Some(template_dir) => {
            copy_and_replace(
                &template_dir,
                &artifact.mod_folder_path,
                &identity.short_name,
                &identity.name,
            )?;
        }
        None => log::warn!("No template tree found; skipping the essentials copy"),
    }

    config.remember_mod(&identity.short_name);
    save_config(&config_path, &config)?;

    println!("Mod '{}' created successfully in {}.", identity.name, artifact.mod_folder_path.display());
    Ok(())
}
