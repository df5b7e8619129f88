//! Date and month argument parsing

use chrono::{Duration, Local, NaiveDate};

use dailydots_core::calendar::first_of_month;

/// Parse a date argument: `YYYY-MM-DD`, `today` or `yesterday`
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    parse_date_relative(s, Local::now().date_naive())
}

pub fn parse_date_relative(s: &str, today: NaiveDate) -> Result<NaiveDate, String> {
    match s.trim().to_lowercase().as_str() {
        "today" => Ok(today),
        "yesterday" => Ok(today - Duration::days(1)),
        other => NaiveDate::parse_from_str(other, "%Y-%m-%d")
            .map_err(|_| format!("Invalid date '{}'. Use YYYY-MM-DD, today or yesterday", s)),
    }
}

/// Parse a month argument (`YYYY-MM`) into the first day of that month
pub fn parse_month(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map(first_of_month)
        .map_err(|_| format!("Invalid month '{}'. Use YYYY-MM", s))
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
