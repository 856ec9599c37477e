//! Command-line interface implementation for modsmith.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for modsmith.
#[derive(Parser, Debug)]
#[command(author, version, about = "modsmith: Crusader Kings III mod scaffolding tool", long_about = None)]
pub struct Args {
    /// Full display name of the mod
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Short identifier (lowercase letters, numbers, underscores)
    #[arg(long, value_name = "SHORT_NAME")]
    pub short_name: String,

    /// Mod tag; may be given multiple times, in the order they should
    /// appear in the descriptor
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Game version the mod supports (detected from the launcher settings
    /// when omitted)
    #[arg(long, value_name = "VERSION")]
    pub supported_version: Option<String>,

    /// Template tree to copy into the mod folder (defaults to the bundled
    /// essentials directory)
    #[arg(long, value_name = "DIR")]
    pub template: Option<PathBuf>,

    /// Steam installation directory (skips detection and the config)
    #[arg(long, value_name = "DIR")]
    pub steam_path: Option<PathBuf>,

    /// Alternate configuration file location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Answer yes to confirmation prompts
    #[arg(short, long)]
    pub yes: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
