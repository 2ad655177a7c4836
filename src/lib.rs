//! # calendru
//!
//! Holiday resolution against the calend.ru calendar site: given a calendar
//! date, discover that day's content page from the site's RSS feed, scrape
//! it for holiday entries, enrich each entry with a short synopsis from its
//! detail page, and split the result into home-country and rest-of-world
//! lists. A pair of small JSON-file stores covers user-added recurring
//! holidays and broadcast subscribers.
//!
//! ## Overview
//!
//! The upstream site is uncontrolled and unreliable, and the pipeline is
//! built around that: day pages are scanned with narrow regex heuristics
//! rather than a structural parse, a failing detail page degrades one
//! entry's description instead of failing the query, and a date the feed
//! does not know about resolves to empty lists rather than an error.
//!
//! One resolution performs one feed fetch, one day-page fetch, and up to
//! `max_items` detail-page fetches. Detail pages are fetched with bounded
//! concurrency; the order entries appear on the day page is preserved
//! end-to-end. Nothing is cached between calls unless a cache collaborator
//! is injected.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use calendru::{HolidayResolver, HttpFetcher};
//! use chrono::NaiveDate;
//!
//! # async fn run() -> calendru::Result<()> {
//! let resolver = HolidayResolver::new(HttpFetcher::new());
//! let date = NaiveDate::from_ymd_opt(2025, 11, 4).unwrap();
//!
//! let grouped = resolver.resolve_grouped(date).await?;
//! for entry in grouped.home.iter().chain(&grouped.other) {
//!     println!("{} — {}", entry.title, entry.description);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Parsing user-supplied dates
//!
//! The dialog layer feeds free text like `"4 ноября"` or `"21.01"`;
//! [`dates::parse_user_date`] turns it into a date in the current year or
//! returns `None` — "unparsed" is an expected outcome, not an error:
//!
//! ```rust
//! use calendru::dates;
//!
//! assert!(dates::parse_user_date("4 ноября").is_some());
//! assert!(dates::parse_user_date("30 февраля").is_none());
//! ```
//!
//! ## Custom holidays and subscribers
//!
//! ```rust,no_run
//! use calendru::{CustomStore, Repeat, SubscriberStore};
//!
//! let custom = CustomStore::open("custom_holidays.json");
//! custom.add("2025-11-04", "Наш день", Repeat::Annual)?;
//!
//! let subs = SubscriberStore::open("subs.json");
//! subs.add(123456789)?;
//! # Ok::<(), calendru::HolidayError>(())
//! ```
//!
//! ## Error Handling
//!
//! [`HolidayError`] separates transport and status failures on the two
//! structural fetches (fatal to one call) from everything that degrades
//! gracefully. Callers should render "no data for this date" (empty
//! lists) differently from "upstream unavailable" (an `Err`).

mod cache;
mod classify;
mod custom;
pub mod dates;
mod enrich;
mod entry;
mod error;
mod feed;
mod fetch;
mod options;
mod resolver;
mod scrape;
mod subscribers;
mod text;

// Public exports
pub use cache::{MemoryCache, NoCache, ResolutionCache};
pub use custom::CustomStore;
pub use entry::{CustomEntry, GroupedHolidays, HolidayEntry, Locale, Repeat};
pub use error::{HolidayError, Result};
pub use fetch::{Fetch, HttpFetcher};
pub use options::ResolverOptions;
pub use resolver::HolidayResolver;
pub use subscribers::SubscriberStore;
