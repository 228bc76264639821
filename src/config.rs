//! Engine configuration

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "RECOVERY_DATA_DIR";

const DEFAULT_DATA_DIR: &str = "recovery-data";
const DEFAULT_BROADCAST_CAPACITY: usize = 16;

/// Where the engine stores its blobs and how it fans out updates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Directory holding one JSON file per persisted blob
    pub data_dir: PathBuf,
    /// Updates buffered per observer before a slow one starts lagging
    pub broadcast_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            broadcast_capacity: DEFAULT_BROADCAST_CAPACITY,
        }
    }
}

impl EngineConfig {
    /// Config with a custom data directory
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    /// Resolve the data directory from `RECOVERY_DATA_DIR`, relative to the
    /// current directory, falling back to `./recovery-data`.
    pub fn from_env() -> Self {
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::resolve(env::var(DATA_DIR_ENV).ok().as_deref(), &current_dir)
    }

    fn resolve(value: Option<&str>, current_dir: &Path) -> Self {
        let data_dir = match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(path) if Path::new(path).is_absolute() => PathBuf::from(path),
            Some(path) => current_dir.join(path),
            None => current_dir.join(DEFAULT_DATA_DIR),
        };
        Self::new(data_dir)
    }

    pub fn with_broadcast_capacity(mut self, capacity: usize) -> Self {
        self.broadcast_capacity = capacity.max(1);
        self
    }
}
