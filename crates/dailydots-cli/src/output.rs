//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use dailydots_core::calendar::{
    month_label, next_month, previous_month, CalendarDay, QuickDate, WEEKDAY_HEADERS,
};
use dailydots_core::models::date_key;
use dailydots_core::{JournalEntry, JournalStats, Mood};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Check if output is in quiet mode
    pub fn is_quiet(&self) -> bool {
        matches!(self.format, OutputFormat::Quiet)
    }

    /// Print a single entry in full
    pub fn print_entry(&self, entry: &JournalEntry) {
        match self.format {
            OutputFormat::Human => {
                println!("Date:     {}", entry.date.format("%A, %b %-d, %Y"));
                println!("Mood:     {}", entry.mood);
                println!("Created:  {}", entry.created_at.format("%Y-%m-%d %H:%M"));
                println!("Updated:  {}", entry.updated_at.format("%Y-%m-%d %H:%M"));
                println!();
                println!("{}", entry.content);
            }
            OutputFormat::Json => print_json(entry),
            OutputFormat::Quiet => println!("{}", entry.date_key()),
        }
    }

    /// Print a list of entries, one line each
    pub fn print_entries(&self, entries: &[JournalEntry]) {
        match self.format {
            OutputFormat::Human => {
                if entries.is_empty() {
                    println!("No entries found.");
                    return;
                }
                for entry in entries {
                    println!("{}", entry_line(entry));
                }
                println!("\n{} {}", entries.len(), plural(entries.len(), "entry", "entries"));
            }
            OutputFormat::Json => print_json(&entries),
            OutputFormat::Quiet => {
                for entry in entries {
                    println!("{}", entry.date_key());
                }
            }
        }
    }

    /// Print the outcome of a save
    pub fn print_saved(&self, entry: &JournalEntry, created: bool) {
        match self.format {
            OutputFormat::Json => print_json(entry),
            _ => self.success(&saved_message(entry, created)),
        }
    }

    /// Print the outcome of a delete
    pub fn print_deleted(&self, date: NaiveDate, removed: bool) {
        match self.format {
            OutputFormat::Human => {
                if removed {
                    println!("✓ Deleted entry for {}", date_key(date));
                } else {
                    println!("No entry for {}", date_key(date));
                }
            }
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"date": date_key(date), "deleted": removed})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Print the month grid
    ///
    /// Days with an entry show their mood emoji, today is marked with `*`,
    /// and days of adjacent months are dimmed on a terminal.
    pub fn print_calendar(
        &self,
        anchor: NaiveDate,
        grid: &[CalendarDay],
        moods: &HashMap<NaiveDate, Mood>,
        today: NaiveDate,
    ) {
        match self.format {
            OutputFormat::Human => {
                let dim = atty::is(atty::Stream::Stdout);
                println!("{}", month_label(anchor));
                println!();
                let header: Vec<String> = WEEKDAY_HEADERS.iter().map(|h| format!("{:<5}", h)).collect();
                println!("{}", header.concat().trim_end());
                for week in grid.chunks(7) {
                    let row: String = week
                        .iter()
                        .map(|day| calendar_cell(day, moods.get(&day.date), day.date == today, dim))
                        .collect();
                    println!("{}", row.trim_end());
                }
                let in_month = grid
                    .iter()
                    .filter(|d| d.is_current_month && moods.contains_key(&d.date))
                    .count();
                println!();
                println!("{} {} this month", in_month, plural(in_month, "entry", "entries"));
                println!(
                    "Previous: --month {}   Next: --month {}",
                    previous_month(anchor).format("%Y-%m"),
                    next_month(anchor).format("%Y-%m")
                );
            }
            OutputFormat::Json => {
                let days: Vec<_> = grid
                    .iter()
                    .map(|day| {
                        serde_json::json!({
                            "date": day.date_key,
                            "is_current_month": day.is_current_month,
                            "mood": moods.get(&day.date).map(|m| m.label()),
                        })
                    })
                    .collect();
                print_json(&serde_json::json!({
                    "month": anchor.format("%Y-%m").to_string(),
                    "days": days,
                }));
            }
            OutputFormat::Quiet => {
                for day in grid.iter().filter(|d| d.is_current_month) {
                    if moods.contains_key(&day.date) {
                        println!("{}", day.date_key);
                    }
                }
            }
        }
    }

    /// Print the summary counters
    pub fn print_stats(&self, stats: &JournalStats) {
        match self.format {
            OutputFormat::Human => {
                println!("Total entries:  {}", stats.total_entries);
                println!("This month:     {}", stats.this_month);
                println!(
                    "Current streak: {} {}",
                    stats.current_streak,
                    plural(stats.current_streak, "day", "days")
                );
            }
            OutputFormat::Json => print_json(stats),
            OutputFormat::Quiet => {
                println!(
                    "{} {} {}",
                    stats.total_entries, stats.this_month, stats.current_streak
                );
            }
        }
    }

    /// Print the home screen: counters, today's entry, recent entries
    pub fn print_home(
        &self,
        stats: &JournalStats,
        today_entry: Option<&JournalEntry>,
        recent: &[JournalEntry],
    ) {
        match self.format {
            OutputFormat::Human => {
                println!("Daily Dots");
                println!("==========");
                println!();
                self.print_stats(stats);
                println!();
                match today_entry {
                    Some(entry) => {
                        println!("Today's entry: {}", entry.mood);
                        println!("{}", entry.content);
                        println!();
                        println!("Edit it with: dailydots write");
                    }
                    None => {
                        println!("No entry for today yet.");
                        println!("Write one with: dailydots write --mood happy");
                    }
                }
                if !recent.is_empty() {
                    println!();
                    println!("── Recent entries ──");
                    for entry in recent {
                        println!("{}", entry_line(entry));
                    }
                }
            }
            OutputFormat::Json => {
                print_json(&serde_json::json!({
                    "stats": stats,
                    "today": today_entry,
                    "recent": recent,
                }));
            }
            OutputFormat::Quiet => self.print_stats(stats),
        }
    }

    /// Print the quick-date list, marking days that already have an entry
    pub fn print_quick_dates(&self, days: &[QuickDate], entries: &HashMap<NaiveDate, Mood>) {
        match self.format {
            OutputFormat::Human => {
                for day in days {
                    let marker = entries
                        .get(&day.date)
                        .map(|m| m.emoji().to_string())
                        .unwrap_or_else(|| "·".to_string());
                    println!(
                        "{}  {:<3} {:<10} {}",
                        date_key(day.date),
                        day.day_name,
                        day.label,
                        marker
                    );
                }
            }
            OutputFormat::Json => {
                let json: Vec<_> = days
                    .iter()
                    .map(|day| {
                        serde_json::json!({
                            "date": date_key(day.date),
                            "label": day.label,
                            "day_name": day.day_name,
                            "mood": entries.get(&day.date).map(|m| m.label()),
                        })
                    })
                    .collect();
                print_json(&json);
            }
            OutputFormat::Quiet => {
                for day in days.iter().filter(|d| !entries.contains_key(&d.date)) {
                    println!("{}", date_key(day.date));
                }
            }
        }
    }

    /// Print the mood catalogue
    pub fn print_moods(&self) {
        match self.format {
            OutputFormat::Human => {
                for mood in Mood::ALL {
                    println!("{}  {}", mood.emoji(), mood.name().to_lowercase());
                }
            }
            OutputFormat::Json => {
                let labels: Vec<String> = Mood::ALL.iter().map(|m| m.label()).collect();
                print_json(&labels);
            }
            OutputFormat::Quiet => {
                for mood in Mood::ALL {
                    println!("{}", mood.name().to_lowercase());
                }
            }
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Check if we should prompt for confirmation
    ///
    /// Only in human mode with an interactive stdin.
    pub fn should_prompt(&self) -> bool {
        prompts_for(self.format, atty::is(atty::Stream::Stdin))
    }
}

fn prompts_for(format: OutputFormat, interactive: bool) -> bool {
    format == OutputFormat::Human && interactive
}

/// "Created entry for ..." / "Updated entry for ..."
pub fn saved_message(entry: &JournalEntry, created: bool) -> String {
    let verb = if created { "Created" } else { "Updated" };
    format!("{} entry for {} ({})", verb, entry.date_key(), entry.mood)
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to encode JSON output: {}", e),
    }
}

/// One-line entry summary: date, mood, first line of content
fn entry_line(entry: &JournalEntry) -> String {
    format!(
        "{} | {} {:<10} | {}",
        entry.date_key(),
        entry.mood.emoji(),
        entry.mood.name(),
        truncate_line(&entry.content, 50)
    )
}

/// A five-column grid cell
fn calendar_cell(day: &CalendarDay, mood: Option<&Mood>, is_today: bool, dim: bool) -> String {
    let number = format!("{:>2}", day.date.day());
    let number = if !day.is_current_month && dim {
        format!("\x1b[2m{}\x1b[0m", number)
    } else {
        number
    };
    let today_mark = if is_today { "*" } else { " " };
    match mood {
        // Emoji occupy two terminal columns
        Some(mood) => format!("{}{}{}", number, mood.emoji(), today_mark),
        None => format!("{}{}  ", number, today_mark),
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}

/// Truncate a string to max characters, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Truncate to first line and max length
fn truncate_line(s: &str, max_len: usize) -> String {
    let first_line = s.lines().next().unwrap_or("");
    truncate(first_line, max_len)
}
