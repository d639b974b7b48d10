//! Settings stored in a TOML file.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::domain::{AppError, Settings};
use crate::ports::SettingsSource;

/// Settings source reading a single TOML file.
#[derive(Debug, Clone)]
pub struct TomlSettingsFile {
    path: PathBuf,
}

impl TomlSettingsFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SettingsSource for TomlSettingsFile {
    fn load(&self) -> Result<Option<Settings>, AppError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Settings::parse_toml(&content).map(Some)
    }
}
