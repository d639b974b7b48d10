//! CLI Adapter.

mod check;
mod resolve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::warn;

use crate::app::locations::Locations;
use crate::app::logging;
use crate::domain::{AppError, Settings};

#[derive(Parser)]
#[command(name = "alternate")]
#[command(version)]
#[command(about = "Jump between a file and its alternate files", long_about = None)]
struct Cli {
    /// Settings file [default: $ALTERNATE_CONFIG or <config dir>/alternate/config.toml]
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// State file remembering the previous file [default: $ALTERNATE_STATE or <state dir>]
    #[arg(long, global = true, value_name = "PATH")]
    state: Option<PathBuf>,
    /// Log diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Switch from FILE to its alternate and print the path to open
    #[clap(visible_alias = "r")]
    Run {
        /// The currently active file
        file: Option<PathBuf>,
    },
    /// List the alternate candidates of FILE without switching
    Resolve {
        /// File to resolve
        file: PathBuf,
    },
    /// Validate the settings file
    Check,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    let result: Result<i32, AppError> =
        Locations::resolve(cli.config, cli.state).and_then(|locations| match cli.command {
            Commands::Run { file } => {
                let settings = load_settings(&locations, verbose);
                crate::app::api::navigate_at(file.as_deref(), &settings, &locations).map(|_| 0)
            }
            Commands::Resolve { file } => {
                let settings = load_settings(&locations, verbose);
                resolve::run_resolve(&file, &settings, &locations).map(|_| 0)
            }
            Commands::Check => {
                logging::init(verbose);
                check::run_check(&locations)
            }
        });

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Load settings and install logging according to their debug toggle.
///
/// An unreadable settings file disables the feature for this invocation.
fn load_settings(locations: &Locations, verbose: bool) -> Settings {
    match crate::app::api::load_settings(locations) {
        Ok(settings) => {
            let settings = settings.unwrap_or_default();
            logging::init(settings.debug || verbose);
            settings
        }
        Err(err) => {
            logging::init(verbose);
            warn!(
                path = %locations.config.display(),
                error = %err,
                "Ignoring unreadable settings file"
            );
            Settings::default()
        }
    }
}
