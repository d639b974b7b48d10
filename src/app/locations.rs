//! Where settings and state live on disk.

use std::env;
use std::path::PathBuf;

use crate::domain::AppError;

/// Environment variable overriding the settings file path.
pub const CONFIG_ENV: &str = "ALTERNATE_CONFIG";
/// Environment variable overriding the state file path.
pub const STATE_ENV: &str = "ALTERNATE_STATE";

const APP_DIR: &str = "alternate";
const CONFIG_FILE: &str = "config.toml";
const STATE_FILE: &str = "state.json";

/// Resolved settings and state file paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locations {
    pub config: PathBuf,
    pub state: PathBuf,
}

impl Locations {
    /// Resolve paths: explicit value, then environment, then platform default.
    pub fn resolve(config: Option<PathBuf>, state: Option<PathBuf>) -> Result<Self, AppError> {
        let config = match config.or_else(|| env_path(CONFIG_ENV)) {
            Some(path) => path,
            None => default_config_path()?,
        };
        let state = match state.or_else(|| env_path(STATE_ENV)) {
            Some(path) => path,
            None => default_state_path()?,
        };
        Ok(Self { config, state })
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    env::var_os(key).filter(|value| !value.is_empty()).map(PathBuf::from)
}

/// `<config dir>/alternate/config.toml`.
pub fn default_config_path() -> Result<PathBuf, AppError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or_else(|| AppError::config_error("Could not determine the user config directory"))
}

/// `<state dir>/alternate/state.json`, using the local data directory on
/// platforms without a state directory.
pub fn default_state_path() -> Result<PathBuf, AppError> {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|dir| dir.join(APP_DIR).join(STATE_FILE))
        .ok_or_else(|| AppError::config_error("Could not determine the user state directory"))
}
