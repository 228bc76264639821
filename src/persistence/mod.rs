//! Persistence gateway
//!
//! The engine stores four independently keyed JSON blobs in any
//! `KeyValueStore`. Each blob is wrapped in a versioned envelope and decoded
//! on its own, so one corrupt blob never blocks the others from loading.

mod codec;
mod file;
mod memory;
mod state;

use std::sync::Arc;

use thiserror::Error;

pub use codec::{decode_blob, encode_blob, BLOB_VERSION};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use state::{
    load_state, save_state, LoadReport, PersistedState, StateView, ACHIEVEMENTS_KEY,
    CRAVINGS_KEY, DAILY_PROGRESS_KEY, PROFILE_KEY,
};

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Errors from a store backend or blob codec
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("blob '{key}' has version {found}, newest supported is {max}", max = BLOB_VERSION)]
    UnsupportedVersion { key: String, found: u64 },

    #[error("invalid store key '{0}'")]
    InvalidKey(String),
}

/// Minimal byte-oriented key-value contract
pub trait KeyValueStore: Send + Sync {
    /// Bytes stored under `key`, `None` if never written
    fn get(&self, key: &str) -> PersistenceResult<Option<Vec<u8>>>;

    /// Replace the bytes stored under `key`
    fn set(&self, key: &str, value: &[u8]) -> PersistenceResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> PersistenceResult<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> PersistenceResult<()> {
        (**self).set(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> PersistenceResult<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> PersistenceResult<()> {
        (**self).set(key, value)
    }
}
