//! Storage error handling
//!
//! Provides typed errors for storage operations with descriptive messages
//! and recovery suggestions.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to create data directory
    #[error("Failed to create data directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Permission denied accessing path
    #[error("Permission denied: cannot access '{path}'. Check file permissions.")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Disk is full or quota exceeded
    #[error(
        "Disk full or quota exceeded while writing to '{path}'. Free up disk space and try again."
    )]
    DiskFull {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to read file
    #[error("Failed to read '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to write file
    #[error("Failed to write '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Stored entries cannot be parsed
    #[error("Invalid journal format in '{path}': {details}")]
    InvalidFormat { path: PathBuf, details: String },

    /// Entries could not be encoded as JSON
    #[error("Failed to encode journal entries: {0}")]
    Encode(#[from] serde_json::Error),

    /// File not found (when expected to exist)
    #[error("File not found: '{path}'")]
    NotFound { path: PathBuf },

    /// Atomic write failed during rename
    #[error("Atomic write failed: could not rename '{from}' to '{to}': {source}")]
    AtomicWriteFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    /// Create an error from an I/O error with path context
    ///
    /// Classifies the error based on its kind (permission, disk full, etc.)
    pub fn from_io(error: io::Error, path: PathBuf) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => StorageError::PermissionDenied {
                path,
                source: error,
            },
            io::ErrorKind::NotFound => StorageError::NotFound { path },
            // StorageFull is not stable on every toolchain, so match the message too
            _ if is_disk_full_error(&error) => StorageError::DiskFull {
                path,
                source: error,
            },
            _ => StorageError::WriteError {
                path,
                source: error,
            },
        }
    }

    /// True when the stored file was read but its contents cannot be decoded
    ///
    /// Such a file may be backed up and replaced. Anything else (including
    /// a `ReadError`) means the file was never seen and must not be overwritten.
    pub fn is_decode(&self) -> bool {
        matches!(self, StorageError::InvalidFormat { .. })
    }

    /// Get a recovery suggestion for this error
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            StorageError::DiskFull { .. } => Some("Free up disk space and try again."),
            StorageError::PermissionDenied { .. } => {
                Some("Check file and directory permissions. You may need to run with different permissions or change ownership.")
            }
            StorageError::InvalidFormat { .. } => {
                Some("The journal file could not be parsed. It is backed up before the next write; recover entries from the backup manually.")
            }
            StorageError::CreateDirectory { .. } => {
                Some("Check that the parent directory exists and you have write permissions.")
            }
            _ => None,
        }
    }
}

/// Check if an I/O error indicates disk full condition
fn is_disk_full_error(error: &io::Error) -> bool {
    let msg = error.to_string().to_lowercase();
    msg.contains("no space left")
        || msg.contains("disk full")
        || msg.contains("quota exceeded")
        || msg.contains("not enough space")
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
