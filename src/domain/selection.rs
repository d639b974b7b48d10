//! Selection policy over existing candidates.

use std::path::Path;

/// What to do with the candidates that exist on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Nothing exists; fall back to the previous file.
    None,
    /// Exactly one candidate exists; switch to it.
    Single(String),
    /// Several exist; ask the user, defaulting to the first.
    Multiple(Vec<String>),
}

impl Selection {
    pub fn from_existing(mut existing: Vec<String>) -> Self {
        match existing.len() {
            0 => Selection::None,
            1 => Selection::Single(existing.remove(0)),
            _ => Selection::Multiple(existing),
        }
    }
}

/// Picker label for a candidate path.
pub fn basename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_count() {
        assert_eq!(Selection::from_existing(vec![]), Selection::None);
        assert_eq!(
            Selection::from_existing(vec!["a.test.js".into()]),
            Selection::Single("a.test.js".into())
        );
        assert_eq!(
            Selection::from_existing(vec!["a".into(), "b".into()]),
            Selection::Multiple(vec!["a".into(), "b".into()])
        );
    }

    #[test]
    fn basename_strips_directories() {
        assert_eq!(basename("multiple/file.unit.test.js"), "file.unit.test.js");
        assert_eq!(basename("plain"), "plain");
        assert_eq!(basename("/"), "/");
    }
}
