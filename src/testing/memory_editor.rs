use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::Editor;

/// In-memory editor tracking the active document and every open.
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct MemoryEditor {
    active: Option<PathBuf>,
    pub opened: Vec<PathBuf>,
}

#[allow(dead_code)]
impl MemoryEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_active<P: Into<PathBuf>>(path: P) -> Self {
        Self { active: Some(path.into()), opened: Vec::new() }
    }

    /// Simulate the user switching documents outside the command.
    pub fn focus<P: Into<PathBuf>>(&mut self, path: P) {
        self.active = Some(path.into());
    }
}

impl Editor for MemoryEditor {
    fn active_file(&self) -> Option<PathBuf> {
        self.active.clone()
    }

    fn open_file(&mut self, path: &Path) -> Result<(), AppError> {
        self.opened.push(path.to_path_buf());
        self.active = Some(path.to_path_buf());
        Ok(())
    }
}
