//! File-backed key-value store
//!
//! One `<key>.json` file per key under a data directory. Every write goes
//! through `atomic_write`, so a crash leaves either the old or the new blob.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::utils::{atomic_write, cleanup_temp_files};

use super::{KeyValueStore, PersistenceError, PersistenceResult};

const BLOB_EXTENSION: &str = "json";

/// Directory of JSON blobs
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `root`.
    ///
    /// Temp files left by an interrupted write are removed.
    pub fn open<P: AsRef<Path>>(root: P) -> PersistenceResult<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;

        let cleaned = cleanup_temp_files(&root)?;
        if cleaned > 0 {
            tracing::warn!(
                dir = %root.display(),
                cleaned,
                "removed temp files from interrupted writes"
            );
        }

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> PersistenceResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(PersistenceError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{}.{}", key, BLOB_EXTENSION)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> PersistenceResult<Option<Vec<u8>>> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> PersistenceResult<()> {
        let path = self.path_for(key)?;
        atomic_write(&path, value)?;
        Ok(())
    }
}
