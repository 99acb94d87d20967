use std::collections::HashMap;

use crate::error::PortalError;
use crate::store::RecordStore;

/// HashMap-backed store, the test double for everything above the
/// [`RecordStore`] seam.
#[derive(Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            entries: HashMap::new(),
        }
    }
}

impl RecordStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), PortalError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PortalError> {
        self.entries.remove(key);
        Ok(())
    }
}
