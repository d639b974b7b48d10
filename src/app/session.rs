//! The "previous file" pointer kept between invocations.

use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::StateStore;

/// State key holding the previous file.
pub const PREVIOUS_FILE_KEY: &str = "prev";

/// Handle over the single previous-file slot of a state store.
///
/// Set right before a forward navigation, cleared once consumed. Never stacked.
pub struct PreviousFile<'a, S: StateStore> {
    store: &'a mut S,
}

impl<'a, S: StateStore> PreviousFile<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    pub fn get(&self) -> Result<Option<PathBuf>, AppError> {
        Ok(self.store.get(PREVIOUS_FILE_KEY)?.filter(|value| !value.is_empty()).map(PathBuf::from))
    }

    pub fn record(&mut self, path: &Path) -> Result<(), AppError> {
        self.store.set(PREVIOUS_FILE_KEY, &path.to_string_lossy())
    }

    pub fn clear(&mut self) -> Result<(), AppError> {
        self.store.clear(PREVIOUS_FILE_KEY)
    }
}
