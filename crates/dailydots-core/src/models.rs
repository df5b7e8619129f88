//! Data models for Daily Dots
//!
//! Defines the core data structures: `Mood`, `JournalEntry` and `NewEntry`.
//! Field names serialize in camelCase so the stored JSON keeps the
//! `date`/`mood`/`content`/`createdAt`/`updatedAt` layout.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mood recorded with a journal entry
///
/// Serialized as its label, e.g. `"😊 Happy"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mood {
    #[default]
    #[serde(rename = "😊 Happy")]
    Happy,
    #[serde(rename = "😔 Sad")]
    Sad,
    #[serde(rename = "😌 Calm")]
    Calm,
    #[serde(rename = "😤 Frustrated")]
    Frustrated,
    #[serde(rename = "😴 Tired")]
    Tired,
    #[serde(rename = "🤩 Excited")]
    Excited,
    #[serde(rename = "😰 Anxious")]
    Anxious,
    #[serde(rename = "😐 Neutral")]
    Neutral,
}

impl Mood {
    /// Every mood, in picker order
    pub const ALL: [Mood; 8] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Calm,
        Mood::Frustrated,
        Mood::Tired,
        Mood::Excited,
        Mood::Anxious,
        Mood::Neutral,
    ];

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Sad => "😔",
            Mood::Calm => "😌",
            Mood::Frustrated => "😤",
            Mood::Tired => "😴",
            Mood::Excited => "🤩",
            Mood::Anxious => "😰",
            Mood::Neutral => "😐",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Calm => "Calm",
            Mood::Frustrated => "Frustrated",
            Mood::Tired => "Tired",
            Mood::Excited => "Excited",
            Mood::Anxious => "Anxious",
            Mood::Neutral => "Neutral",
        }
    }

    /// Display label, emoji followed by name
    pub fn label(self) -> String {
        format!("{} {}", self.emoji(), self.name())
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji(), self.name())
    }
}

/// Error returned when a string names no known mood
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown mood '{input}'. Valid moods: happy, sad, calm, frustrated, tired, excited, anxious, neutral")]
pub struct ParseMoodError {
    pub input: String,
}

impl FromStr for Mood {
    type Err = ParseMoodError;

    /// Accepts the full label, the bare name (any case) or the emoji
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Mood::ALL
            .into_iter()
            .find(|mood| {
                trimmed == mood.label()
                    || trimmed == mood.emoji()
                    || trimmed.eq_ignore_ascii_case(mood.name())
            })
            .ok_or_else(|| ParseMoodError {
                input: s.to_string(),
            })
    }
}

/// One journal entry; at most one exists per calendar day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// Calendar day, the unique key (`YYYY-MM-DD`)
    pub date: NaiveDate,
    /// Mood for the day
    pub mood: Mood,
    /// Journal text
    pub content: String,
    /// Set on the first save for this date, never changed afterwards
    pub created_at: DateTime<Utc>,
    /// Refreshed on every save
    pub updated_at: DateTime<Utc>,
}

impl JournalEntry {
    /// `YYYY-MM-DD` key of this entry
    pub fn date_key(&self) -> String {
        date_key(self.date)
    }

    /// First line of the content, for list views
    pub fn summary_line(&self) -> &str {
        self.content.lines().next().unwrap_or("")
    }
}

/// Caller input for creating or updating an entry
///
/// Timestamps are owned by the store and cannot be supplied here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub date: NaiveDate,
    pub mood: Mood,
    pub content: String,
}

impl NewEntry {
    pub fn new(date: NaiveDate, mood: Mood, content: impl Into<String>) -> Self {
        Self {
            date,
            mood,
            content: content.into(),
        }
    }
}

/// Format a calendar day as its storage key
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
