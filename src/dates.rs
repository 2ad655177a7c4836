//! Parsing of the textual date forms used by the dialog layer and the feed.
//!
//! Three independent shapes are recognized:
//!
//! - `"4 ноября"` — day plus Russian month name, current year assumed
//! - `"21.01"` / `"21-01"` / `"21/01"` — numeric day and month, current year
//! - `"4 ноября 2025"` — full date embedded in upstream feed titles
//!
//! All forms resolve in the home timezone (Moscow). A string that does not
//! match, names an unknown month, or denotes an impossible calendar day
//! yields `None`; "unparsed" is an expected outcome, not an error.

use chrono::{Datelike, NaiveDate, Utc};
use chrono_tz::Europe::Moscow;
use once_cell::sync::Lazy;
use regex::Regex;

static DAY_MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d{1,2})\s+([А-Яа-яЁё]+)\s*$").unwrap());

static DAY_MONTH_NUMERIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d{1,2})[.\-/](\d{1,2})\s*$").unwrap());

static FEED_TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d{1,2})\s+([а-яё]+)\s+(\d{4})").unwrap());

/// Closed vocabulary of the twelve month names as they appear in dates
/// (genitive case), matched case-insensitively.
fn month_number(name: &str) -> Option<u32> {
    let month = match name.to_lowercase().as_str() {
        "января" => 1,
        "февраля" => 2,
        "марта" => 3,
        "апреля" => 4,
        "мая" => 5,
        "июня" => 6,
        "июля" => 7,
        "августа" => 8,
        "сентября" => 9,
        "октября" => 10,
        "ноября" => 11,
        "декабря" => 12,
        _ => return None,
    };
    Some(month)
}

/// Today's calendar date in the home timezone.
pub fn today_home() -> NaiveDate {
    Utc::now().with_timezone(&Moscow).date_naive()
}

/// Parses `"4 ноября"` into a date in the current year.
pub fn parse_day_month(text: &str) -> Option<NaiveDate> {
    let caps = DAY_MONTH_RE.captures(text)?;
    let day: u32 = caps[1].parse().ok()?;
    let month = month_number(&caps[2])?;
    NaiveDate::from_ymd_opt(today_home().year(), month, day)
}

/// Parses `"21.01"` (also `-` and `/` separators) into a date in the
/// current year.
pub fn parse_day_month_numeric(text: &str) -> Option<NaiveDate> {
    let caps = DAY_MONTH_NUMERIC_RE.captures(text)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    NaiveDate::from_ymd_opt(today_home().year(), month, day)
}

/// Parses a user-supplied date expression, trying the month-name form
/// first and the numeric form second.
pub fn parse_user_date(text: &str) -> Option<NaiveDate> {
    parse_day_month(text).or_else(|| parse_day_month_numeric(text))
}

/// Finds a `"4 ноября 2025"` date anywhere inside a feed-entry title.
///
/// Unlike the user-input forms this one carries the year and is searched,
/// not anchored, because feed titles wrap the date in other text.
pub fn parse_feed_title(text: &str) -> Option<NaiveDate> {
    let caps = FEED_TITLE_RE.captures(text)?;
    let day: u32 = caps[1].parse().ok()?;
    let month = month_number(&caps[2])?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
