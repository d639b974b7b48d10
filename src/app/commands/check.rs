//! Settings validation.

use crate::domain::{AppError, PatternCheck, validate_patterns};
use crate::ports::SettingsSource;

/// Outcome of validating the settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Whether a settings file was found.
    pub found: bool,
    /// Whether diagnostic logging is enabled.
    pub debug: bool,
    pub patterns: Vec<PatternCheck>,
}

impl CheckOutcome {
    pub fn invalid_count(&self) -> usize {
        self.patterns.iter().filter(|check| !check.is_valid()).count()
    }

    pub fn is_healthy(&self) -> bool {
        self.invalid_count() == 0
    }
}

pub fn execute(source: &impl SettingsSource) -> Result<CheckOutcome, AppError> {
    let Some(settings) = source.load()? else {
        return Ok(CheckOutcome { found: false, debug: false, patterns: Vec::new() });
    };

    Ok(CheckOutcome {
        found: true,
        debug: settings.debug,
        patterns: validate_patterns(&settings.patterns),
    })
}
