//! In-memory key-value store

use std::collections::HashMap;

use parking_lot::Mutex;

use super::{KeyValueStore, PersistenceResult};

/// Volatile store for tests and embedding hosts that persist elsewhere
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys currently holding a value, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.blobs.lock().keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn remove(&self, key: &str) -> Option<Vec<u8>> {
        self.blobs.lock().remove(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> PersistenceResult<Option<Vec<u8>>> {
        Ok(self.blobs.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> PersistenceResult<()> {
        self.blobs.lock().insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
