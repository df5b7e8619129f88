//! Journal entry persistence
//!
//! The whole collection lives in one JSON array under a fixed file name
//! (`dailydots_journal_entries.json`) in the data directory. Every write
//! replaces the whole file using an atomic write (temp file, then rename),
//! so a crash never leaves a half-written collection behind.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::models::JournalEntry;

use super::error::{StorageError, StorageResult};

/// Persistence layer for the journal collection
pub struct EntryPersistence {
    path: PathBuf,
}

impl EntryPersistence {
    /// Create a persistence handler for the configured data directory
    pub fn new(config: &Config) -> Self {
        Self {
            path: config.entries_path(),
        }
    }

    /// Path of the entries file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the entries file exists on disk
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Size of the entries file in bytes (0 when missing)
    pub fn file_size(&self) -> u64 {
        fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0)
    }

    /// Load the stored collection
    ///
    /// A missing or blank file is an empty collection, not an error.
    pub fn load(&self) -> StorageResult<Vec<JournalEntry>> {
        if !self.path.exists() {
            debug!("No journal file at {:?}", self.path);
            return Ok(Vec::new());
        }

        // Bytes, not a String: invalid UTF-8 is a format problem, not an I/O one
        let data = fs::read(&self.path).map_err(|source| StorageError::ReadError {
            path: self.path.clone(),
            source,
        })?;

        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let entries: Vec<JournalEntry> =
            serde_json::from_slice(&data).map_err(|e| StorageError::InvalidFormat {
                path: self.path.clone(),
                details: e.to_string(),
            })?;

        debug!("Loaded {} entries from {:?}", entries.len(), self.path);
        Ok(entries)
    }

    /// Replace the stored collection with `entries`
    pub fn save(&self, entries: &[JournalEntry]) -> StorageResult<()> {
        let bytes = serde_json::to_vec(entries)?;
        atomic_write(&self.path, &bytes)?;
        debug!("Saved {} entries to {:?}", entries.len(), self.path);
        Ok(())
    }

    /// Copy the current file aside before it gets overwritten
    ///
    /// Returns the backup path (`<file>.corrupt.backup`).
    pub fn backup_corrupt(&self) -> StorageResult<PathBuf> {
        let backup_path = backup_path_for(&self.path);
        fs::copy(&self.path, &backup_path)
            .map_err(|e| StorageError::from_io(e, backup_path.clone()))?;
        Ok(backup_path)
    }
}

fn backup_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".corrupt.backup");
    PathBuf::from(name)
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
fn atomic_write(path: &Path, data: &[u8]) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StorageError::CreateDirectory {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("tmp");

    let mut file =
        File::create(&temp_path).map_err(|e| StorageError::from_io(e, temp_path.clone()))?;
    file.write_all(data)
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;
    file.sync_all()
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    fs::rename(&temp_path, path).map_err(|source| StorageError::AtomicWriteFailed {
        from: temp_path.clone(),
        to: path.to_path_buf(),
        source,
    })?;

    Ok(())
}
