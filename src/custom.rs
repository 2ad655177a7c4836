//! Custom Entry Store: user-added holidays in a local JSON file.
//!
//! The file holds a flat array of records. A missing or unreadable file
//! reads as empty; individual malformed records are skipped so one bad row
//! cannot poison the store. Inserting a duplicate `(date, title)` pair —
//! title compared case-insensitively — returns the existing record and
//! leaves the file untouched. There is no delete operation.

use chrono::{Datelike, NaiveDate};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::entry::{CustomEntry, Repeat};
use crate::error::{HolidayError, Result};

/// JSON-file-backed store of [`CustomEntry`] records.
pub struct CustomStore {
    path: PathBuf,
}

impl CustomStore {
    /// Opens a store at `path`. The file is created lazily on first add.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Adds a holiday anchored at `date_str` (`YYYY-MM-DD`).
    ///
    /// Rejects malformed dates ([`HolidayError::InvalidDate`]) and empty
    /// titles ([`HolidayError::EmptyTitle`]). Returns the existing record
    /// unchanged when the same date and title are already stored.
    pub fn add(&self, date_str: &str, title: &str, repeat: Repeat) -> Result<CustomEntry> {
        let date = NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
            .map_err(|_| HolidayError::InvalidDate(date_str.to_string()))?;
        let title = title.trim();
        if title.is_empty() {
            return Err(HolidayError::EmptyTitle);
        }

        let mut rows = self.read();
        if let Some(existing) = rows
            .iter()
            .find(|r| r.date == date && r.title.to_lowercase() == title.to_lowercase())
        {
            return Ok(existing.clone());
        }

        let record = CustomEntry {
            date,
            title: title.to_string(),
            repeat,
        };
        rows.push(record.clone());
        self.write(&rows)?;
        Ok(record)
    }

    /// Titles of entries matching `day`: annual entries by month and day,
    /// one-off entries by exact date.
    pub fn get_for_date(&self, day: NaiveDate) -> Vec<String> {
        self.read()
            .into_iter()
            .filter(|r| match r.repeat {
                Repeat::Annual => (r.date.month(), r.date.day()) == (day.month(), day.day()),
                Repeat::Once => r.date == day,
            })
            .map(|r| r.title)
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// All stored records, in insertion order.
    pub fn entries(&self) -> Vec<CustomEntry> {
        self.read()
    }

    fn read(&self) -> Vec<CustomEntry> {
        let Ok(raw) = std::fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        let rows: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(rows) => rows,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "custom store unreadable, treating as empty");
                return Vec::new();
            }
        };
        // Tolerate individual malformed records
        rows.into_iter()
            .filter_map(|row| serde_json::from_value(row).ok())
            .collect()
    }

    fn write(&self, rows: &[CustomEntry]) -> Result<()> {
        let json = serde_json::to_string_pretty(rows)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}
