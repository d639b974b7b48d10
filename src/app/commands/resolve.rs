//! Dry-run resolution: show what navigation would consider, without acting.

use std::path::{Path, PathBuf};

use crate::app::commands::navigate::probe_candidates;
use crate::domain::{Settings, compile_patterns, resolve};
use crate::ports::FileProbe;

/// One resolved candidate and whether it exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateStatus {
    pub path: PathBuf,
    pub exists: bool,
}

/// Result of resolving a file against the configured patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveReport {
    NotConfigured,
    NoMatch,
    Matched { pattern: String, candidates: Vec<CandidateStatus> },
}

pub fn execute<F: FileProbe>(file: &Path, settings: &Settings, probe: &F) -> ResolveReport {
    if !settings.is_configured() {
        return ResolveReport::NotConfigured;
    }

    let patterns = compile_patterns(&settings.patterns);
    let Some(resolution) = file.to_str().and_then(|path| resolve(path, &patterns)) else {
        return ResolveReport::NoMatch;
    };

    let candidates = probe_candidates(probe, resolution.candidates)
        .into_iter()
        .map(|(path, exists)| CandidateStatus { path: PathBuf::from(path), exists })
        .collect();

    ResolveReport::Matched {
        pattern: patterns[resolution.pattern_index].main.as_str().to_string(),
        candidates,
    }
}
