//! Journal store
//!
//! The `JournalStore` is the single writer of the persisted collection.
//! Every read goes through the same decode path, and every mutation is
//! read-all → modify in memory → write-all.
//!
//! ## Errors
//!
//! Reads never fail: a missing, unreadable or corrupt file is treated as an
//! empty journal and logged. Writes do fail, with a fixed top-level message
//! ("Failed to save journal entry" / "Failed to delete journal entry") and
//! the typed [`StorageError`](crate::storage::StorageError) as the source.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = JournalStore::open()?;
//!
//! store.save_entry(NewEntry::new(date, Mood::Calm, "A quiet day"))?;
//!
//! let entries = store.get_all_entries(); // newest first
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use tracing::{info, warn};

use crate::config::Config;
use crate::models::{JournalEntry, NewEntry};
use crate::stats::entries_in_month;
use crate::storage::{EntryPersistence, StorageResult};

/// Journal entry store, keyed by calendar day
pub struct JournalStore {
    persistence: EntryPersistence,
    config: Config,
}

impl JournalStore {
    /// Open the store using the default configuration
    pub fn open() -> Result<Self> {
        let config = Config::load().context("Failed to load configuration")?;
        Ok(Self::open_with_config(config))
    }

    /// Open the store with a specific configuration
    pub fn open_with_config(config: Config) -> Self {
        let persistence = EntryPersistence::new(&config);
        Self {
            persistence,
            config,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the persistence handler
    pub fn persistence(&self) -> &EntryPersistence {
        &self.persistence
    }

    // ==================== Reads ====================

    /// All entries, newest date first
    ///
    /// Returns an empty list when nothing is stored or the stored data
    /// cannot be decoded.
    pub fn get_all_entries(&self) -> Vec<JournalEntry> {
        let mut entries = match self.persistence.load() {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Error loading journal entries: {}", e);
                Vec::new()
            }
        };
        sort_newest_first(&mut entries);
        entries
    }

    /// Entry for an exact date, if any
    pub fn get_entry_by_date(&self, date: NaiveDate) -> Option<JournalEntry> {
        self.get_all_entries().into_iter().find(|e| e.date == date)
    }

    /// Entries in the given month (1-12), newest first
    pub fn get_entries_for_month(&self, year: i32, month: u32) -> Vec<JournalEntry> {
        entries_in_month(&self.get_all_entries(), year, month)
    }

    /// Number of stored entries
    pub fn entry_count(&self) -> usize {
        self.get_all_entries().len()
    }

    // ==================== Writes ====================

    /// Create or update the entry for `entry.date`
    pub fn save_entry(&mut self, entry: NewEntry) -> Result<JournalEntry> {
        self.save_entry_at(entry, Utc::now())
    }

    /// Create or update the entry for `entry.date`, stamped with `now`
    ///
    /// An existing entry keeps its `created_at`; `updated_at` is always `now`.
    pub fn save_entry_at(&mut self, entry: NewEntry, now: DateTime<Utc>) -> Result<JournalEntry> {
        let mut entries = self
            .load_for_write()
            .context("Failed to save journal entry")?;

        let existing = entries.iter().position(|e| e.date == entry.date);
        let saved = JournalEntry {
            date: entry.date,
            mood: entry.mood,
            content: entry.content,
            created_at: existing.map_or(now, |i| entries[i].created_at),
            updated_at: now,
        };

        match existing {
            Some(i) => entries[i] = saved.clone(),
            None => entries.push(saved.clone()),
        }
        sort_newest_first(&mut entries);

        self.persistence
            .save(&entries)
            .context("Failed to save journal entry")?;

        if existing.is_some() {
            info!("Updated journal entry for {}", saved.date);
        } else {
            info!("Created journal entry for {}", saved.date);
        }
        Ok(saved)
    }

    /// Delete the entry for `date`
    ///
    /// Returns `false` (and writes nothing) when no such entry exists.
    pub fn delete_entry(&mut self, date: NaiveDate) -> Result<bool> {
        let entries = self
            .load_for_write()
            .context("Failed to delete journal entry")?;
        let before = entries.len();

        let remaining: Vec<JournalEntry> = entries.into_iter().filter(|e| e.date != date).collect();
        if remaining.len() == before {
            return Ok(false);
        }

        self.persistence
            .save(&remaining)
            .context("Failed to delete journal entry")?;

        info!("Deleted journal entry for {}", date);
        Ok(true)
    }

    /// Load the collection ahead of a rewrite
    ///
    /// An unparseable file is copied aside first, since the following write
    /// replaces it. A file that cannot be read at all is an error: it is
    /// never overwritten unseen. Duplicate dates collapse to the entry
    /// updated last.
    fn load_for_write(&self) -> StorageResult<Vec<JournalEntry>> {
        let mut entries = match self.persistence.load() {
            Ok(entries) => entries,
            Err(e) if e.is_decode() => {
                warn!("Error loading journal entries: {}", e);
                let backup = self.persistence.backup_corrupt()?;
                warn!("Corrupt journal backed up to {:?}", backup);
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        let before = entries.len();
        entries.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.updated_at.cmp(&a.updated_at))
        });
        entries.dedup_by_key(|e| e.date);
        if entries.len() < before {
            warn!("Dropped {} duplicate journal entries", before - entries.len());
        }

        Ok(entries)
    }
}

fn sort_newest_first(entries: &mut [JournalEntry]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Mood;
    use crate::storage::StorageError;
    use chrono::{Duration, TimeZone};
    use std::fs;
    use tempfile::TempDir;

    fn test_config(temp_dir: &TempDir) -> Config {
        Config {
            data_dir: temp_dir.path().to_path_buf(),
            ..Config::default()
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 5, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let store = JournalStore::open_with_config(test_config(&temp_dir));

        assert!(store.get_all_entries().is_empty());
        assert_eq!(store.entry_count(), 0);
        assert!(store.get_entry_by_date(day(2024, 1, 5)).is_none());
    }

    #[test]
    fn test_save_and_get_by_date() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = JournalStore::open_with_config(test_config(&temp_dir));

        let mood: Mood = "😊 Happy".parse().unwrap();
        store
            .save_entry(NewEntry::new(day(2024, 1, 5), mood, "x"))
            .unwrap();

        let entry = store.get_entry_by_date(day(2024, 1, 5)).unwrap();
        assert_eq!(entry.date_key(), "2024-01-05");
        assert_eq!(entry.mood.label(), "😊 Happy");
        assert_eq!(entry.content, "x");
        assert_eq!(entry.created_at, entry.updated_at);
    }

    #[test]
    fn test_update_preserves_created_at() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = JournalStore::open_with_config(test_config(&temp_dir));
        let date = day(2024, 1, 5);

        let first = store
            .save_entry_at(NewEntry::new(date, Mood::Tired, "draft"), at(8))
            .unwrap();
        store
            .save_entry_at(NewEntry::new(date, Mood::Calm, "second"), at(12))
            .unwrap();
        let last = store
            .save_entry_at(NewEntry::new(date, Mood::Excited, "final"), at(20))
            .unwrap();

        assert_eq!(first.created_at, at(8));
        assert_eq!(last.created_at, at(8));
        assert_eq!(last.updated_at, at(20));

        let stored = store.get_entry_by_date(date).unwrap();
        assert_eq!(stored, last);
        assert_eq!(stored.mood, Mood::Excited);
        assert_eq!(stored.content, "final");
        assert_eq!(store.entry_count(), 1);
    }

    #[test]
    fn test_save_allows_empty_content() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = JournalStore::open_with_config(test_config(&temp_dir));

        let saved = store
            .save_entry(NewEntry::new(day(2024, 2, 2), Mood::Neutral, ""))
            .unwrap();
        assert_eq!(saved.content, "");
        assert_eq!(store.entry_count(), 1);
    }

    #[test]
    fn test_get_all_entries_sorted_newest_first() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = JournalStore::open_with_config(test_config(&temp_dir));

        for date in [day(2024, 3, 1), day(2024, 5, 20), day(2023, 12, 31), day(2024, 3, 15)] {
            store
                .save_entry(NewEntry::new(date, Mood::Happy, "entry"))
                .unwrap();
        }

        let dates: Vec<_> = store.get_all_entries().iter().map(|e| e.date).collect();
        assert_eq!(
            dates,
            vec![day(2024, 5, 20), day(2024, 3, 15), day(2024, 3, 1), day(2023, 12, 31)]
        );
    }

    #[test]
    fn test_reads_sort_unsorted_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);
        fs::write(
            config.entries_path(),
            r#"[
                {"date":"2024-01-01","mood":"😔 Sad","content":"a","createdAt":"2024-01-01T10:00:00.000Z","updatedAt":"2024-01-01T10:00:00.000Z"},
                {"date":"2024-01-03","mood":"😌 Calm","content":"c","createdAt":"2024-01-03T10:00:00.000Z","updatedAt":"2024-01-03T10:00:00.000Z"},
                {"date":"2024-01-02","mood":"😐 Neutral","content":"b","createdAt":"2024-01-02T10:00:00.000Z","updatedAt":"2024-01-02T10:00:00.000Z"}
            ]"#,
        )
        .unwrap();

        let store = JournalStore::open_with_config(config);
        let contents: Vec<_> = store
            .get_all_entries()
            .into_iter()
            .map(|e| e.content)
            .collect();
        assert_eq!(contents, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_delete_entry() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = JournalStore::open_with_config(test_config(&temp_dir));

        store
            .save_entry(NewEntry::new(day(2024, 1, 1), Mood::Happy, "one"))
            .unwrap();
        store
            .save_entry(NewEntry::new(day(2024, 1, 2), Mood::Sad, "two"))
            .unwrap();

        assert!(store.delete_entry(day(2024, 1, 1)).unwrap());
        assert_eq!(store.entry_count(), 1);
        assert!(store.get_entry_by_date(day(2024, 1, 1)).is_none());
        assert!(store.get_entry_by_date(day(2024, 1, 2)).is_some());
    }

    #[test]
    fn test_delete_missing_entry_leaves_collection_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = JournalStore::open_with_config(test_config(&temp_dir));

        store
            .save_entry(NewEntry::new(day(2024, 1, 1), Mood::Happy, "one"))
            .unwrap();
        let before = fs::read(store.config().entries_path()).unwrap();

        assert!(!store.delete_entry(day(2030, 1, 1)).unwrap());
        assert_eq!(fs::read(store.config().entries_path()).unwrap(), before);
        assert_eq!(store.entry_count(), 1);
    }

    #[test]
    fn test_delete_on_empty_store_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = JournalStore::open_with_config(test_config(&temp_dir));

        assert!(!store.delete_entry(day(2024, 1, 1)).unwrap());
        assert!(!store.persistence().exists());
    }

    #[test]
    fn test_get_entries_for_month() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = JournalStore::open_with_config(test_config(&temp_dir));

        for date in [day(2024, 3, 1), day(2024, 3, 15), day(2024, 4, 1)] {
            store
                .save_entry(NewEntry::new(date, Mood::Calm, "entry"))
                .unwrap();
        }

        let march: Vec<_> = store
            .get_entries_for_month(2024, 3)
            .iter()
            .map(|e| e.date)
            .collect();
        assert_eq!(march.len(), 2);
        assert!(march.contains(&day(2024, 3, 1)));
        assert!(march.contains(&day(2024, 3, 15)));
        assert!(!march.contains(&day(2024, 4, 1)));

        assert!(store.get_entries_for_month(2024, 0).is_empty());
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);
        fs::write(config.entries_path(), "this is not json").unwrap();

        let store = JournalStore::open_with_config(config);
        assert!(store.get_all_entries().is_empty());
        assert!(store.get_entry_by_date(day(2024, 1, 1)).is_none());
        // Reads leave the file alone
        assert!(!temp_dir
            .path()
            .join("dailydots_journal_entries.json.corrupt.backup")
            .exists());
    }

    #[test]
    fn test_save_over_corrupt_file_makes_backup() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);
        fs::write(config.entries_path(), "[{\"date\": oops").unwrap();

        let mut store = JournalStore::open_with_config(config);
        store
            .save_entry(NewEntry::new(day(2024, 1, 1), Mood::Anxious, "fresh start"))
            .unwrap();

        assert_eq!(store.entry_count(), 1);
        let backup = temp_dir
            .path()
            .join("dailydots_journal_entries.json.corrupt.backup");
        assert_eq!(fs::read_to_string(backup).unwrap(), "[{\"date\": oops");
    }

    #[test]
    fn test_save_over_non_utf8_file_keeps_original_in_backup() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);
        let mut original = r#"[{"date":"2024-01-01","mood":"😌 Calm","content":"caf"#.as_bytes().to_vec();
        original.push(0xE9);
        original.extend_from_slice(
            br#"","createdAt":"2024-01-01T10:00:00Z","updatedAt":"2024-01-01T10:00:00Z"}]"#,
        );
        fs::write(config.entries_path(), &original).unwrap();

        let mut store = JournalStore::open_with_config(config);
        assert!(store.get_all_entries().is_empty());

        store
            .save_entry(NewEntry::new(day(2024, 1, 2), Mood::Calm, "new"))
            .unwrap();

        let backup = temp_dir
            .path()
            .join("dailydots_journal_entries.json.corrupt.backup");
        assert_eq!(fs::read(backup).unwrap(), original);
        assert_eq!(store.entry_count(), 1);
    }

    #[test]
    fn test_unreadable_file_is_never_overwritten() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);
        // A directory at the entries path exists but cannot be read as a file
        fs::create_dir(config.entries_path()).unwrap();
        fs::write(config.entries_path().join("keep"), "precious").unwrap();

        let mut store = JournalStore::open_with_config(config);
        assert!(store.get_all_entries().is_empty());

        let err = store
            .save_entry(NewEntry::new(day(2024, 1, 2), Mood::Calm, "new"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to save journal entry");
        assert!(matches!(
            err.downcast_ref::<StorageError>(),
            Some(StorageError::ReadError { .. })
        ));

        let err = store.delete_entry(day(2024, 1, 2)).unwrap_err();
        assert_eq!(err.to_string(), "Failed to delete journal entry");

        assert_eq!(
            fs::read_to_string(store.config().entries_path().join("keep")).unwrap(),
            "precious"
        );
        assert!(!temp_dir
            .path()
            .join("dailydots_journal_entries.json.corrupt.backup")
            .exists());
    }

    #[test]
    fn test_write_collapses_duplicate_dates() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);
        fs::write(
            config.entries_path(),
            r#"[
                {"date":"2024-01-01","mood":"😔 Sad","content":"old","createdAt":"2024-01-01T08:00:00Z","updatedAt":"2024-01-01T08:00:00Z"},
                {"date":"2024-01-01","mood":"😌 Calm","content":"newer","createdAt":"2024-01-01T08:00:00Z","updatedAt":"2024-01-01T20:00:00Z"},
                {"date":"2024-01-03","mood":"😐 Neutral","content":"other","createdAt":"2024-01-03T10:00:00Z","updatedAt":"2024-01-03T10:00:00Z"}
            ]"#,
        )
        .unwrap();

        let mut store = JournalStore::open_with_config(config);
        assert_eq!(store.entry_count(), 3);

        store
            .save_entry(NewEntry::new(day(2024, 1, 3), Mood::Happy, "edited"))
            .unwrap();

        let entries = store.get_all_entries();
        assert_eq!(entries.len(), 2);
        let kept = store.get_entry_by_date(day(2024, 1, 1)).unwrap();
        assert_eq!(kept.content, "newer");
        assert_eq!(kept.mood, Mood::Calm);
    }

    #[test]
    fn test_save_failure_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocked");
        fs::write(&blocker, "not a directory").unwrap();

        let mut store = JournalStore::open_with_config(Config {
            data_dir: blocker.join("data"),
            ..Config::default()
        });

        let err = store
            .save_entry(NewEntry::new(day(2024, 1, 1), Mood::Happy, "lost"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to save journal entry");
        assert!(matches!(
            err.downcast_ref::<StorageError>(),
            Some(StorageError::CreateDirectory { .. })
        ));
    }

    #[test]
    fn test_data_persists_across_reopens() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);
        let created = Utc::now() - Duration::days(1);

        {
            let mut store = JournalStore::open_with_config(config.clone());
            store
                .save_entry_at(NewEntry::new(day(2024, 7, 4), Mood::Excited, "fireworks"), created)
                .unwrap();
        }

        let mut store = JournalStore::open_with_config(config);
        let entry = store.get_entry_by_date(day(2024, 7, 4)).unwrap();
        assert_eq!(entry.content, "fireworks");
        assert_eq!(entry.created_at, created);

        let updated = store
            .save_entry(NewEntry::new(day(2024, 7, 4), Mood::Tired, "late night"))
            .unwrap();
        assert_eq!(updated.created_at, created);
        assert!(updated.updated_at > created);
    }
}
