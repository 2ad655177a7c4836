//! Data structures for resolved and user-defined holidays.
//!
//! [`HolidayEntry`] is the output of one resolution: a scraped title, the
//! absolute detail-page URL (the dedup key within a resolution), a short
//! synopsis and the derived locale tag. Entries are built fresh on every
//! query and never cached by the core itself.
//!
//! [`CustomEntry`] is a user-added record stored by
//! [`CustomStore`](crate::CustomStore); it either repeats every year on the
//! same month and day or matches a single exact date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Locale tag derived per resolution, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Entry mentions the home-country marker in its title or description
    Home,
    /// Everything else
    Other,
}

/// A resolved holiday candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayEntry {
    /// Display text as scraped, entity-unescaped, non-empty
    pub title: String,
    /// Absolute detail-page link; unique within a single resolution
    pub url: String,
    /// Short plain-text synopsis, empty when the detail page gave none
    pub description: String,
    /// Home/other classification for this resolution
    pub locale: Locale,
}

/// Result of a grouped resolution: home entries first, others second,
/// each list in the order the day page listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupedHolidays {
    pub home: Vec<HolidayEntry>,
    pub other: Vec<HolidayEntry>,
}

impl GroupedHolidays {
    pub fn is_empty(&self) -> bool {
        self.home.is_empty() && self.other.is_empty()
    }

    /// Concatenates home then other, for callers that do not need the split.
    pub fn into_flat(self) -> Vec<HolidayEntry> {
        let mut merged = self.home;
        merged.extend(self.other);
        merged
    }
}

/// Repeat mode of a user-added holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Repeat {
    /// Matches every year on the anchor's month and day
    Annual,
    /// Matches the anchor date only
    Once,
}

/// A user-added holiday record.
///
/// `(date, title)` pairs are deduplicated case-insensitively on insert;
/// records are never mutated in place and there is no delete operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomEntry {
    /// Anchor occurrence, serialized as YYYY-MM-DD
    pub date: NaiveDate,
    /// Non-empty display title
    pub title: String,
    pub repeat: Repeat,
}
