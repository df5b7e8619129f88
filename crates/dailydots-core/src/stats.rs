//! Monthly counts and streaks
//!
//! Pure functions over a slice of entries. The `*_as_of` / `compute`
//! variants take "today" explicitly; the others read the local clock.

use std::collections::HashSet;

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::Serialize;

use crate::models::JournalEntry;

/// Entries whose date falls in the given month (1-indexed), order preserved
pub fn entries_in_month(entries: &[JournalEntry], year: i32, month: u32) -> Vec<JournalEntry> {
    entries
        .iter()
        .filter(|e| e.date.year() == year && e.date.month() == month)
        .cloned()
        .collect()
}

pub fn count_entries_in_month(entries: &[JournalEntry], year: i32, month: u32) -> usize {
    entries
        .iter()
        .filter(|e| e.date.year() == year && e.date.month() == month)
        .count()
}

/// Entries in the current local calendar month
pub fn count_entries_in_current_month(entries: &[JournalEntry]) -> usize {
    let today = Local::now().date_naive();
    count_entries_in_month(entries, today.year(), today.month())
}

/// Consecutive days with an entry, ending today
///
/// Zero when today has no entry, however long the run before it.
pub fn compute_streak(entries: &[JournalEntry]) -> usize {
    streak_as_of(entries, Local::now().date_naive())
}

pub fn streak_as_of(entries: &[JournalEntry], today: NaiveDate) -> usize {
    let days: HashSet<NaiveDate> = entries.iter().map(|e| e.date).collect();

    let mut streak = 0;
    let mut day = today;
    while days.contains(&day) {
        streak += 1;
        match day.checked_sub_signed(Duration::days(1)) {
            Some(previous) => day = previous,
            None => break,
        }
    }
    streak
}

/// Summary counters shown on the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JournalStats {
    pub total_entries: usize,
    pub this_month: usize,
    pub current_streak: usize,
}

impl JournalStats {
    pub fn compute(entries: &[JournalEntry], today: NaiveDate) -> Self {
        Self {
            total_entries: entries.len(),
            this_month: count_entries_in_month(entries, today.year(), today.month()),
            current_streak: streak_as_of(entries, today),
        }
    }
}
