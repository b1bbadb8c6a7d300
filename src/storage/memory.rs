//! In-memory backend, used by the test suite and by embedders that do not
//! need durable storage.

use crate::errors::{AppError, AppResult};
use crate::storage::StateStore;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: BTreeMap<String, String>,
    /// Recorded (operation, target, message) triples.
    pub ops: Vec<(String, String, String)>,
    /// When set, every save fails with a persistence error.
    pub fail_saves: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw payload stored under `slot`, if any.
    pub fn payload(&self, slot: &str) -> Option<&String> {
        self.slots.get(slot)
    }
}

impl StateStore for MemoryStore {
    fn load(&mut self, slot: &str) -> AppResult<Option<String>> {
        Ok(self.slots.get(slot).cloned())
    }

    fn save(&mut self, slot: &str, payload: &str) -> AppResult<()> {
        if self.fail_saves {
            return Err(AppError::Persistence("memory store save refused".into()));
        }
        self.slots.insert(slot.to_string(), payload.to_string());
        Ok(())
    }

    fn record_op(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.ops.push((
            operation.to_string(),
            target.to_string(),
            message.to_string(),
        ));
        Ok(())
    }
}
