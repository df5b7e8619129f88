//! Home and stats command handlers

use anyhow::Result;

use dailydots_core::{JournalStats, JournalStore};

use crate::dates::today;
use crate::output::Output;

/// Show the home summary
pub fn show(store: &JournalStore, output: &Output) -> Result<()> {
    let today = today();
    let entries = store.get_all_entries();

    let stats = JournalStats::compute(&entries, today);
    let today_entry = entries.iter().find(|e| e.date == today);
    let recent_count = store.config().recent_count.min(entries.len());

    output.print_home(&stats, today_entry, &entries[..recent_count]);
    Ok(())
}

/// Show total / this month / streak counters
pub fn stats(store: &JournalStore, output: &Output) -> Result<()> {
    let stats = JournalStats::compute(&store.get_all_entries(), today());
    output.print_stats(&stats);
    Ok(())
}
