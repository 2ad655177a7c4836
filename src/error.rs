//! Error types for the calendru library.

use thiserror::Error;

/// Result type alias for holiday-resolution operations
pub type Result<T> = std::result::Result<T, HolidayError>;

/// Errors that can occur while resolving holidays or talking to the stores.
///
/// "No feed entry for this date" is not an error: the locator returns
/// `Ok(None)` and the resolver returns empty lists, so callers can render a
/// distinct empty-state message instead of a failure message.
#[derive(Error, Debug)]
pub enum HolidayError {
    /// Transport-level failure (connect, timeout, body read)
    #[error("request to {url} failed: {message}")]
    Fetch { url: String, message: String },

    /// Upstream answered with a non-success status
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    /// The syndication feed could not be parsed
    #[error("failed to parse holiday feed: {0}")]
    FeedParse(String),

    /// Custom-entry date is not a valid YYYY-MM-DD date
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Custom-entry title is empty or whitespace-only
    #[error("holiday title must not be empty")]
    EmptyTitle,

    /// Reading or writing a JSON store failed
    #[error("store I/O failed: {0}")]
    StoreIo(#[from] std::io::Error),

    /// A JSON store could not be serialized
    #[error("store serialization failed: {0}")]
    StoreFormat(#[from] serde_json::Error),
}
