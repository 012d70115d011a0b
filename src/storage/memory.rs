//! In-memory storage backend.

use crate::domain::error::Result;
use crate::storage::backend::Storage;
use std::collections::HashMap;

/// Slots kept in a map for the lifetime of the value.
///
/// Used when the data directory cannot be opened, so the session keeps
/// working without durability, and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl Storage for MemoryStorage {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write_slot(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
