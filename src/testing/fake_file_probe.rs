use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::ports::FileProbe;

/// Probe answering from a fixed set of existing paths.
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct FakeFileProbe {
    existing: HashSet<PathBuf>,
}

#[allow(dead_code)]
impl FakeFileProbe {
    pub fn with_files(paths: &[&str]) -> Self {
        Self { existing: paths.iter().map(PathBuf::from).collect() }
    }
}

impl FileProbe for FakeFileProbe {
    fn exists(&self, path: &Path) -> bool {
        self.existing.contains(path)
    }
}
