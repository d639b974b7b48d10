use crate::domain::{AppError, Settings};

/// Port for reading global settings.
pub trait SettingsSource {
    /// Load settings; `None` when no settings are stored.
    fn load(&self) -> Result<Option<Settings>, AppError>;
}
