//! Named string values persisted across sessions.

use crate::domain::AppError;

/// Port for a small key-value store that survives across invocations.
pub trait StateStore {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError>;

    /// Remove the value stored under `key`.
    fn clear(&mut self, key: &str) -> Result<(), AppError>;
}
