//! Calendar and quick-date command handlers

use std::collections::HashMap;

use anyhow::Result;
use chrono::NaiveDate;

use dailydots_core::calendar::{build_calendar_grid, recent_days};
use dailydots_core::{JournalEntry, JournalStore, Mood};

use crate::dates::today;
use crate::output::Output;

/// Show the month grid for `month` (current month by default)
pub fn show(store: &JournalStore, month: Option<NaiveDate>, output: &Output) -> Result<()> {
    let today = today();
    let anchor = month.unwrap_or(today);

    let grid = build_calendar_grid(anchor);
    let moods = mood_map(&store.get_all_entries());

    output.print_calendar(anchor, &grid, &moods, today);
    Ok(())
}

/// List the last `count` days and whether each has an entry
pub fn days(store: &JournalStore, count: usize, output: &Output) -> Result<()> {
    let days = recent_days(today(), count);
    let moods = mood_map(&store.get_all_entries());

    output.print_quick_dates(&days, &moods);
    Ok(())
}

fn mood_map(entries: &[JournalEntry]) -> HashMap<NaiveDate, Mood> {
    entries.iter().map(|e| (e.date, e.mood)).collect()
}
