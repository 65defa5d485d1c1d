//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::WattageError;

/// Read a text file to a string, returning `None` if it doesn't exist or
/// cannot be read
///
/// An unreadable registry file degrades to the first-run (empty) state, so
/// read failures are absorbed here rather than surfaced.
pub fn read_text_optional<P: AsRef<Path>>(path: P) -> Option<String> {
    fs::read_to_string(path.as_ref()).ok()
}

/// Write text to a file atomically (write to temp, then rename)
///
/// This ensures that the file is either completely written or not modified
/// at all, preventing corruption on crashes or power failures.
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), WattageError> {
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            WattageError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Create temp file in same directory (important for atomic rename)
    let temp_path = path.with_extension("txt.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| WattageError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|e| WattageError::Storage(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| WattageError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| WattageError::Storage(format!("Failed to sync data: {}", e)))?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        WattageError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
