//! Daily Dots Core Library
//!
//! This crate provides the core of Daily Dots, a local mood journal that
//! keeps one entry per calendar day.
//!
//! # Architecture
//!
//! - **Store**: single writer of the entry collection, keyed by date
//! - **Storage**: whole-collection JSON file with atomic writes
//! - **Derived views**: calendar grid, monthly counts and streaks, computed
//!   from the collection on demand
//!
//! # Quick Start
//!
//! ```text
//! let mut store = JournalStore::open()?;
//!
//! // Write today's entry
//! let today = chrono::Local::now().date_naive();
//! store.save_entry(NewEntry::new(today, Mood::Happy, "Good day"))?;
//!
//! // Derived views
//! let entries = store.get_all_entries();
//! let streak = stats::compute_streak(&entries);
//! let grid = calendar::build_calendar_grid(today);
//! ```
//!
//! # Modules
//!
//! - `store`: journal store (main entry point)
//! - `models`: moods and journal entries
//! - `storage`: file persistence and storage errors
//! - `calendar`: month grid and navigation
//! - `stats`: monthly counts, streaks and summary
//! - `config`: application configuration

pub mod calendar;
pub mod config;
pub mod models;
pub mod stats;
pub mod storage;
pub mod store;

pub use calendar::{build_calendar_grid, CalendarDay, QuickDate};
pub use config::Config;
pub use models::{JournalEntry, Mood, NewEntry, ParseMoodError};
pub use stats::{compute_streak, count_entries_in_current_month, JournalStats};
pub use storage::{EntryPersistence, StorageError, StorageResult};
pub use store::JournalStore;
