//! Editor surface for shell-driven hosts.
//!
//! The calling editor passes its current file on the command line and opens
//! whatever path is written back on stdout.

use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::Editor;

/// Editor whose "open" writes the target path as one line to a writer.
#[derive(Debug)]
pub struct StdoutEditor<W: Write> {
    active: Option<PathBuf>,
    out: W,
}

impl StdoutEditor<Stdout> {
    /// Editor for the file named on the command line, resolved against the
    /// working directory.
    pub fn for_argument(file: Option<&Path>) -> Result<Self, AppError> {
        let active = file.map(std::path::absolute).transpose()?;
        Ok(Self::new(active, io::stdout()))
    }
}

impl<W: Write> StdoutEditor<W> {
    pub fn new(active: Option<PathBuf>, out: W) -> Self {
        Self { active, out }
    }

    pub fn into_writer(self) -> W {
        self.out
    }
}

impl<W: Write> Editor for StdoutEditor<W> {
    fn active_file(&self) -> Option<PathBuf> {
        self.active.clone()
    }

    fn open_file(&mut self, path: &Path) -> Result<(), AppError> {
        writeln!(self.out, "{}", path.display())?;
        self.out.flush()?;
        self.active = Some(path.to_path_buf());
        Ok(())
    }
}
