//! Pattern resolution: active path to ordered candidate paths.

use super::pattern::AlternatePattern;
use super::template::expand_template;

/// Candidates produced by the first pattern matching a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Position of the matching pattern among the compiled patterns.
    pub pattern_index: usize,
    /// Candidate paths in template order.
    pub candidates: Vec<String>,
}

/// Resolve alternates for `path` using the first matching pattern.
///
/// Returns `None` when no pattern matches. Later patterns are never consulted
/// once one matches, even if it has no alternates.
pub fn resolve(path: &str, patterns: &[AlternatePattern]) -> Option<Resolution> {
    patterns.iter().enumerate().find_map(|(pattern_index, pattern)| {
        let caps = pattern.main.captures(path)?;
        let groups: Vec<Option<&str>> =
            caps.iter().skip(1).map(|group| group.map(|m| m.as_str())).collect();
        let candidates = pattern
            .alternates
            .iter()
            .map(|template| expand_template(template, &groups))
            .collect();
        Some(Resolution { pattern_index, candidates })
    })
}
