//! Storage layer
//!
//! Handles persistence of the journal collection.
//!
//! ## Layout
//!
//! - One JSON file (`dailydots_journal_entries.json`) in the data directory
//! - The file holds an array of every entry and is rewritten in full on
//!   each mutation

pub mod error;
pub mod persistence;

pub use error::{StorageError, StorageResult};
pub use persistence::EntryPersistence;
