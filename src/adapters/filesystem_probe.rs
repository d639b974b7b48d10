use std::fs;
use std::path::Path;

use crate::ports::FileProbe;

/// Probe backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemProbe;

impl FileProbe for FilesystemProbe {
    fn exists(&self, path: &Path) -> bool {
        fs::metadata(path).is_ok()
    }
}
