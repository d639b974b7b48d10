use std::path::Path;

/// Port for checking whether candidate files exist.
///
/// Probes run concurrently, so implementations must be shareable across threads.
pub trait FileProbe: Sync {
    /// Whether `path` exists. Any failure to check counts as absent.
    fn exists(&self, path: &Path) -> bool;
}
