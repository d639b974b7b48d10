//! Navigation between a file and its alternates.
//!
//! Per invocation: resolve candidates from the first matching pattern, keep
//! those that exist, then
//! - none exist: jump back to the previous file (and forget it), or do nothing
//! - one exists: switch to it
//! - several exist: let the user pick; a dismissed prompt switches to the first
//!
//! Every forward switch records the file being left as the previous file.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;

use crate::app::AppContext;
use crate::app::session::PreviousFile;
use crate::domain::{AppError, Selection, Settings, basename, compile_patterns, resolve};
use crate::ports::{Editor, FileProbe, Picker, StateStore};

const PICK_PROMPT: &str = "Select alternate file";

/// What a navigation invocation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// No patterns are configured.
    NotConfigured,
    /// The editor has no active file.
    NoActiveFile,
    /// The active file matches no pattern.
    NoMatch,
    /// No alternate exists and no previous file is recorded.
    Unchanged,
    /// No alternate exists; returned to the previous file.
    ReturnedToPrevious(PathBuf),
    /// The only existing alternate was opened.
    Switched(PathBuf),
    /// The user picked this alternate.
    Picked(PathBuf),
    /// The picker was dismissed; the first existing alternate was opened.
    PickedFirst(PathBuf),
}

impl NavigationOutcome {
    /// The file that was opened, if any.
    pub fn target(&self) -> Option<&Path> {
        match self {
            NavigationOutcome::ReturnedToPrevious(path)
            | NavigationOutcome::Switched(path)
            | NavigationOutcome::Picked(path)
            | NavigationOutcome::PickedFirst(path) => Some(path),
            NavigationOutcome::NotConfigured
            | NavigationOutcome::NoActiveFile
            | NavigationOutcome::NoMatch
            | NavigationOutcome::Unchanged => None,
        }
    }
}

/// Run one alternate navigation against the context's editor.
pub fn execute<E, P, S, F>(
    ctx: &mut AppContext<E, P, S, F>,
    settings: &Settings,
) -> Result<NavigationOutcome, AppError>
where
    E: Editor,
    P: Picker,
    S: StateStore,
    F: FileProbe,
{
    if !settings.is_configured() {
        debug!("No alternate patterns configured");
        return Ok(NavigationOutcome::NotConfigured);
    }

    let Some(active) = ctx.editor().active_file() else {
        debug!("No active file");
        return Ok(NavigationOutcome::NoActiveFile);
    };

    let patterns = compile_patterns(&settings.patterns);
    let Some(resolution) = active.to_str().and_then(|path| resolve(path, &patterns)) else {
        debug!(file = %active.display(), "No pattern matches");
        return Ok(NavigationOutcome::NoMatch);
    };
    debug!(
        pattern = %patterns[resolution.pattern_index].main,
        candidates = ?resolution.candidates,
        "Matched pattern"
    );

    let existing = existing_candidates(ctx.probe(), resolution.candidates);

    match Selection::from_existing(existing) {
        Selection::None => {
            debug!("Alternate files not found");
            return_to_previous(ctx)
        }
        Selection::Single(path) => {
            let path = PathBuf::from(path);
            switch_to(ctx, &path)?;
            Ok(NavigationOutcome::Switched(path))
        }
        Selection::Multiple(paths) => {
            let labels: Vec<String> = paths.iter().map(|path| basename(path)).collect();
            let choice = ctx.picker_mut().pick(PICK_PROMPT, &labels)?;
            debug!(picked = ?choice.and_then(|index| labels.get(index)), "Picker closed");

            match choice.and_then(|index| paths.get(index)) {
                Some(picked) => {
                    let path = PathBuf::from(picked);
                    switch_to(ctx, &path)?;
                    Ok(NavigationOutcome::Picked(path))
                }
                None => {
                    let path = PathBuf::from(&paths[0]);
                    switch_to(ctx, &path)?;
                    Ok(NavigationOutcome::PickedFirst(path))
                }
            }
        }
    }
}

/// Probe every candidate concurrently, returning each with its existence flag
/// in the original order once all probes have finished.
pub(crate) fn probe_candidates<F: FileProbe>(
    probe: &F,
    candidates: Vec<String>,
) -> Vec<(String, bool)> {
    candidates
        .into_par_iter()
        .map(|candidate| {
            let exists = probe.exists(Path::new(&candidate));
            (candidate, exists)
        })
        .collect()
}

fn existing_candidates<F: FileProbe>(probe: &F, candidates: Vec<String>) -> Vec<String> {
    probe_candidates(probe, candidates)
        .into_iter()
        .filter_map(|(candidate, exists)| exists.then_some(candidate))
        .collect()
}

fn return_to_previous<E, P, S, F>(
    ctx: &mut AppContext<E, P, S, F>,
) -> Result<NavigationOutcome, AppError>
where
    E: Editor,
    P: Picker,
    S: StateStore,
    F: FileProbe,
{
    let Some(previous) = PreviousFile::new(ctx.state_mut()).get()? else {
        debug!("Previous file not found");
        return Ok(NavigationOutcome::Unchanged);
    };

    debug!(file = %previous.display(), "Returning to previous file");
    ctx.editor_mut().open_file(&previous)?;
    PreviousFile::new(ctx.state_mut()).clear()?;
    Ok(NavigationOutcome::ReturnedToPrevious(previous))
}

fn switch_to<E, P, S, F>(ctx: &mut AppContext<E, P, S, F>, target: &Path) -> Result<(), AppError>
where
    E: Editor,
    P: Picker,
    S: StateStore,
    F: FileProbe,
{
    debug!(file = %target.display(), "Switching to file");
    if let Some(current) = ctx.editor().active_file() {
        debug!(file = %current.display(), "Recording previous file");
        PreviousFile::new(ctx.state_mut()).record(&current)?;
    }
    ctx.editor_mut().open_file(target)
}
