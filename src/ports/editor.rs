use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for the host editor's document surface.
pub trait Editor {
    /// Path of the currently active document, if any.
    fn active_file(&self) -> Option<PathBuf>;

    /// Open `path` and make it the active document.
    fn open_file(&mut self, path: &Path) -> Result<(), AppError>;
}
