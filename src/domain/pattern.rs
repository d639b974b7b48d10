//! Alternate pattern definitions and compilation.

use regex::Regex;
use serde::Deserialize;
use tracing::debug;

/// One configured pattern: a regex for the main file and the templates
/// producing its alternates.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternConfig {
    pub main: String,
    #[serde(default)]
    pub alternates: Vec<String>,
}

impl PatternConfig {
    pub fn new<S: Into<String>>(main: S, alternates: &[&str]) -> Self {
        Self {
            main: main.into(),
            alternates: alternates.iter().map(|template| template.to_string()).collect(),
        }
    }
}

/// A pattern whose `main` compiled successfully.
#[derive(Debug, Clone)]
pub struct AlternatePattern {
    pub main: Regex,
    pub alternates: Vec<String>,
}

impl AlternatePattern {
    pub fn compile(config: &PatternConfig) -> Result<Self, regex::Error> {
        let main = Regex::new(&config.main)?;
        Ok(Self { main, alternates: config.alternates.clone() })
    }
}

/// Compile configured patterns in order, dropping those whose regex is malformed.
pub fn compile_patterns(configs: &[PatternConfig]) -> Vec<AlternatePattern> {
    configs
        .iter()
        .filter_map(|config| match AlternatePattern::compile(config) {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                debug!(main = %config.main, error = %err, "Skipping malformed pattern");
                None
            }
        })
        .collect()
}

/// Compile status of one configured pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternCheck {
    pub index: usize,
    pub main: String,
    pub alternates: usize,
    pub error: Option<String>,
}

impl PatternCheck {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// Report the compile status of every configured pattern.
pub fn validate_patterns(configs: &[PatternConfig]) -> Vec<PatternCheck> {
    configs
        .iter()
        .enumerate()
        .map(|(index, config)| PatternCheck {
            index,
            main: config.main.clone(),
            alternates: config.alternates.len(),
            error: Regex::new(&config.main).err().map(|err| err.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_patterns_are_dropped_in_order() {
        let configs = vec![
            PatternConfig::new(r"(.*)\.rs$", &["$1_test.rs"]),
            PatternConfig::new(r"\", &[]),
            PatternConfig::new(r"(.*)\.js$", &["$1.test.js"]),
        ];

        let compiled = compile_patterns(&configs);

        assert_eq!(compiled.len(), 2);
        assert_eq!(compiled[0].main.as_str(), r"(.*)\.rs$");
        assert_eq!(compiled[1].main.as_str(), r"(.*)\.js$");
    }

    #[test]
    fn lookaround_counts_as_malformed() {
        let configs = vec![PatternConfig::new(r"(.*)(?<!test)\.js$", &["$1.test.js"])];
        assert!(compile_patterns(&configs).is_empty());
    }

    #[test]
    fn validate_reports_each_entry() {
        let configs =
            vec![PatternConfig::new("(a", &["x"]), PatternConfig::new("(.*)", &["$1", "$1.bak"])];

        let checks = validate_patterns(&configs);

        assert_eq!(checks.len(), 2);
        assert!(!checks[0].is_valid());
        assert_eq!(checks[0].index, 0);
        assert!(checks[1].is_valid());
        assert_eq!(checks[1].alternates, 2);
    }

    #[test]
    fn alternates_default_to_empty() {
        let config: PatternConfig = toml::from_str(r#"main = "(.*)""#).unwrap();
        assert!(config.alternates.is_empty());
    }
}
