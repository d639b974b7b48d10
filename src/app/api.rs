//! API Facade for the application.
//!
//! Glues the terminal adapters to the commands for the CLI and for library users.

use std::path::Path;

use crate::adapters::{
    DialoguerPicker, FilesystemProbe, JsonStateStore, StdoutEditor, TomlSettingsFile,
};
use crate::app::AppContext;
use crate::app::commands::{check, navigate, resolve};
use crate::app::locations::Locations;
use crate::domain::{AppError, Settings};
use crate::ports::SettingsSource;

pub use crate::app::commands::check::CheckOutcome;
pub use crate::app::commands::navigate::NavigationOutcome;
pub use crate::app::commands::resolve::{CandidateStatus, ResolveReport};

/// Read the settings file; `None` when it does not exist.
pub fn load_settings(locations: &Locations) -> Result<Option<Settings>, AppError> {
    TomlSettingsFile::new(locations.config.clone()).load()
}

/// Navigate from `file` to its alternate.
///
/// The path to open is written to stdout; nothing is written when nothing
/// should change.
pub fn navigate_at(
    file: Option<&Path>,
    settings: &Settings,
    locations: &Locations,
) -> Result<NavigationOutcome, AppError> {
    let editor = StdoutEditor::for_argument(file)?;
    let state = JsonStateStore::new(locations.state.clone());
    let mut ctx = AppContext::new(editor, DialoguerPicker, state, FilesystemProbe);

    navigate::execute(&mut ctx, settings)
}

/// Show the candidates for `file` without navigating.
pub fn resolve_at(file: &Path, settings: &Settings) -> Result<ResolveReport, AppError> {
    let file = std::path::absolute(file)?;
    Ok(resolve::execute(&file, settings, &FilesystemProbe))
}

/// Validate the settings file.
pub fn check_at(locations: &Locations) -> Result<CheckOutcome, AppError> {
    check::execute(&TomlSettingsFile::new(locations.config.clone()))
}
