//! Month calendar layout
//!
//! Builds the Sunday-first grid of day cells for a month view, plus the
//! month navigation and quick-date helpers the front end needs. Everything
//! here works on `NaiveDate`, so keys never shift with the local timezone.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::models::date_key;

/// Column headers, Sunday first
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One cell of the month grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// False for lead-in and trail-out days from adjacent months
    pub is_current_month: bool,
    /// `YYYY-MM-DD`, for matching against stored entries
    pub date_key: String,
}

/// Build the grid for the month containing `anchor`
///
/// The result always holds whole weeks: lead-in days from the previous
/// month align the 1st to its weekday column, and trail-out days from the
/// next month complete the final week.
pub fn build_calendar_grid(anchor: NaiveDate) -> Vec<CalendarDay> {
    let first = first_of_month(anchor);
    let lead_in = first.weekday().num_days_from_sunday() as i64;
    let month_len = days_in_month(anchor) as i64;

    let cells = (lead_in + month_len + 6) / 7 * 7;
    let start = first - Duration::days(lead_in);

    start
        .iter_days()
        .take(cells as usize)
        .map(|date| CalendarDay {
            date,
            is_current_month: date.year() == first.year() && date.month() == first.month(),
            date_key: date_key(date),
        })
        .collect()
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);
    first
        .iter_days()
        .take_while(|d| d.month() == first.month())
        .count() as u32
}

/// First day of the month before `date`'s month
pub fn previous_month(date: NaiveDate) -> NaiveDate {
    first_of_month(first_of_month(date) - Duration::days(1))
}

/// First day of the month after `date`'s month
pub fn next_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date) + Duration::days(days_in_month(date) as i64)
}

/// Heading such as "March 2024"
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Entry in the quick-date picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickDate {
    pub date: NaiveDate,
    /// "Today", "Yesterday", then e.g. "Mar 5"
    pub label: String,
    /// Short weekday name, e.g. "Tue"
    pub day_name: String,
}

/// The last `count` days ending at `today`, newest first
pub fn recent_days(today: NaiveDate, count: usize) -> Vec<QuickDate> {
    (0..count)
        .map_while(|offset| {
            let date = today.checked_sub_signed(Duration::days(offset as i64))?;
            let label = match offset {
                0 => "Today".to_string(),
                1 => "Yesterday".to_string(),
                _ => date.format("%b %-d").to_string(),
            };
            Some(QuickDate {
                date,
                label,
                day_name: date.format("%a").to_string(),
            })
        })
        .collect()
}
