//! Entry command handlers

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;

use dailydots_core::models::date_key;
use dailydots_core::{JournalEntry, JournalStore, Mood, NewEntry};

use crate::dates::today;
use crate::editor::{confirm, edit_text, entry_template, strip_comments};
use crate::output::Output;

/// Create or update the entry for a day
///
/// Without `content` the editor opens, pre-filled with the existing text.
/// Without `mood` an existing entry keeps its mood.
pub fn write(
    store: &mut JournalStore,
    date: Option<NaiveDate>,
    mood: Option<Mood>,
    content: Option<String>,
    output: &Output,
) -> Result<()> {
    let date = date.unwrap_or_else(today);
    let existing = store.get_entry_by_date(date);

    let content = match content {
        Some(c) => c,
        None => {
            let current = existing.as_ref().map(|e| e.content.as_str()).unwrap_or("");
            let heading = format!("Journal entry for {}", date.format("%A, %b %-d, %Y"));
            let edited =
                edit_text(&entry_template(&heading, current)).context("Failed to edit entry")?;
            strip_comments(&edited)
        }
    };

    let (saved, created) = upsert(store, existing, date, mood, content)?;
    output.print_saved(&saved, created);

    Ok(())
}

/// Save the entry for `date`, returning it and whether it is new
///
/// Blank content is rejected. Without `mood` an existing entry keeps its
/// mood and a new one gets the default.
fn upsert(
    store: &mut JournalStore,
    existing: Option<JournalEntry>,
    date: NaiveDate,
    mood: Option<Mood>,
    content: String,
) -> Result<(JournalEntry, bool)> {
    if content.trim().is_empty() {
        bail!("Entry content cannot be empty");
    }

    let mood = mood
        .or_else(|| existing.as_ref().map(|e| e.mood))
        .unwrap_or_default();

    let saved = store.save_entry(NewEntry::new(date, mood, content))?;
    Ok((saved, existing.is_none()))
}

/// Show a single entry
pub fn show(store: &JournalStore, date: NaiveDate, output: &Output) -> Result<()> {
    let entry = store
        .get_entry_by_date(date)
        .ok_or_else(|| anyhow::anyhow!("No entry for {}", date_key(date)))?;

    output.print_entry(&entry);
    Ok(())
}

/// List entries, newest first, optionally limited to one month
pub fn list(store: &JournalStore, month: Option<NaiveDate>, output: &Output) -> Result<()> {
    use chrono::Datelike;

    let entries = match month {
        Some(m) => store.get_entries_for_month(m.year(), m.month()),
        None => store.get_all_entries(),
    };

    output.print_entries(&entries);
    Ok(())
}

/// Delete the entry for a day
pub fn delete(store: &mut JournalStore, date: NaiveDate, yes: bool, output: &Output) -> Result<()> {
    if output.should_prompt() && !yes {
        if let Some(entry) = store.get_entry_by_date(date) {
            println!(
                "Delete entry: {} {} - {}",
                entry.date_key(),
                entry.mood,
                entry.summary_line()
            );
            if !confirm("Are you sure?")? {
                println!("Cancelled.");
                return Ok(());
            }
        }
    }

    let removed = store.delete_entry(date)?;
    output.print_deleted(date, removed);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{saved_message, OutputFormat};
    use dailydots_core::Config;
    use tempfile::TempDir;

    fn test_store(temp_dir: &TempDir) -> JournalStore {
        JournalStore::open_with_config(Config {
            data_dir: temp_dir.path().to_path_buf(),
            ..Config::default()
        })
    }

    fn quiet() -> Output {
        Output::new(OutputFormat::Quiet)
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_write_new_entry_defaults_to_happy() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        write(&mut store, Some(day(2024, 1, 5)), None, Some("x".into()), &quiet()).unwrap();

        let entry = store.get_entry_by_date(day(2024, 1, 5)).unwrap();
        assert_eq!(entry.mood, Mood::Happy);
        assert_eq!(entry.content, "x");
    }

    #[test]
    fn test_write_without_mood_keeps_existing_mood() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);
        let date = day(2024, 1, 5);

        write(&mut store, Some(date), Some(Mood::Anxious), Some("first".into()), &quiet()).unwrap();
        write(&mut store, Some(date), None, Some("second".into()), &quiet()).unwrap();

        let entry = store.get_entry_by_date(date).unwrap();
        assert_eq!(entry.mood, Mood::Anxious);
        assert_eq!(entry.content, "second");

        write(&mut store, Some(date), Some(Mood::Calm), Some("third".into()), &quiet()).unwrap();
        assert_eq!(store.get_entry_by_date(date).unwrap().mood, Mood::Calm);
        assert_eq!(store.entry_count(), 1);
    }

    #[test]
    fn test_write_rejects_blank_content() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        let err = write(&mut store, Some(day(2024, 1, 5)), None, Some("  \n ".into()), &quiet())
            .unwrap_err();
        assert_eq!(err.to_string(), "Entry content cannot be empty");
        assert_eq!(store.entry_count(), 0);
        assert!(!store.persistence().exists());
    }

    #[test]
    fn test_upsert_reports_created_then_updated() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);
        let date = day(2024, 1, 5);

        let (saved, created) = upsert(&mut store, None, date, Some(Mood::Tired), "a".into()).unwrap();
        assert!(created);
        assert_eq!(saved_message(&saved, created), "Created entry for 2024-01-05 (😴 Tired)");

        let existing = store.get_entry_by_date(date);
        let (saved, created) = upsert(&mut store, existing, date, None, "b".into()).unwrap();
        assert!(!created);
        assert_eq!(saved_message(&saved, created), "Updated entry for 2024-01-05 (😴 Tired)");
    }

    #[test]
    fn test_delete_with_yes_removes_entry() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);
        let date = day(2024, 1, 5);

        write(&mut store, Some(date), None, Some("x".into()), &quiet()).unwrap();
        delete(&mut store, date, true, &quiet()).unwrap();

        assert!(store.get_entry_by_date(date).is_none());
        // Missing entry is not an error
        delete(&mut store, date, true, &quiet()).unwrap();
    }

    #[test]
    fn test_delete_without_prompt_outside_human_mode() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);
        let date = day(2024, 1, 5);

        write(&mut store, Some(date), None, Some("x".into()), &quiet()).unwrap();
        delete(&mut store, date, false, &quiet()).unwrap();

        assert!(store.get_entry_by_date(date).is_none());
    }
}
