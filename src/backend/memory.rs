//! In-memory storage backend.

use std::collections::BTreeMap;

use parking_lot::Mutex;

use crate::store::Value;

use super::StorageBackend;

/// Volatile backend holding all slots in process memory.
///
/// Commits always succeed. Useful as a test double and for callers that
/// want the store's typed surface without durability.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slots: Mutex<BTreeMap<String, Value>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn put(&self, key: &str, value: Value) -> bool {
        self.slots.lock().insert(key.to_string(), value);
        true
    }

    fn get(&self, key: &str) -> Option<Value> {
        self.slots.lock().get(key).cloned()
    }

    fn remove(&self, key: &str) -> bool {
        self.slots.lock().remove(key);
        true
    }

    fn clear(&self) {
        self.slots.lock().clear();
    }

    fn entries(&self) -> BTreeMap<String, Value> {
        self.slots.lock().clone()
    }
}
