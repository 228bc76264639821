//! Atomic file operations
//!
//! Blobs are written to a `.tmp` sibling, synced, then renamed over the
//! destination. A reader sees either the previous blob or the new one,
//! never a torn write.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

/// Extension used for in-flight writes
pub const TEMP_EXTENSION: &str = "tmp";

/// Atomically replace `path` with `content`
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> io::Result<()> {
    let path = path.as_ref();
    let temp_path = path.with_extension(TEMP_EXTENSION);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = File::create(&temp_path)?;
    file.write_all(content)?;
    file.sync_all()?;

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Remove `.tmp` files left behind by an interrupted write.
///
/// Returns how many were removed.
pub fn cleanup_temp_files<P: AsRef<Path>>(dir: P) -> io::Result<usize> {
    let dir = dir.as_ref();
    let mut cleaned = 0;

    if !dir.exists() {
        return Ok(0);
    }

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.extension().map(|e| e == TEMP_EXTENSION).unwrap_or(false) {
            fs::remove_file(&path)?;
            cleaned += 1;
        }
    }

    Ok(cleaned)
}
