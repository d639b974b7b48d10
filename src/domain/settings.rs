//! User settings: the pattern list and the diagnostic logging toggle.

use serde::Deserialize;

use super::AppError;
use super::pattern::PatternConfig;

/// Settings read from the global settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Ordered pattern list; the first match wins.
    #[serde(default)]
    pub patterns: Vec<PatternConfig>,
    /// Emit diagnostic logging.
    #[serde(default)]
    pub debug: bool,
}

impl Settings {
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(content)?)
    }

    pub fn with_patterns(patterns: Vec<PatternConfig>) -> Self {
        Self { patterns, debug: false }
    }

    pub fn is_configured(&self) -> bool {
        !self.patterns.is_empty()
    }
}
