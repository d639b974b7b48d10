use std::collections::HashMap;

use crate::domain::AppError;
use crate::ports::StateStore;

/// In-memory state store for testing.
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct MemoryStateStore {
    values: HashMap<String, String>,
}

#[allow(dead_code)]
impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl StateStore for MemoryStateStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<(), AppError> {
        self.values.remove(key);
        Ok(())
    }
}
