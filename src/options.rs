//! Configuration options for the holiday resolver.
//!
//! [`ResolverOptions`] carries the upstream endpoints, scraping limits and
//! timeouts. Defaults mirror the reference deployment against calend.ru;
//! the builder exists mostly for tests and for pointing the resolver at a
//! mirror.
//!
//! ## Example
//!
//! ```rust
//! use calendru::ResolverOptions;
//!
//! let options = ResolverOptions::builder()
//!     .max_items(10)
//!     .description_limit(180)
//!     .enrich_concurrency(2)
//!     .build();
//! assert_eq!(options.max_items, 10);
//! ```

use regex::Regex;
use std::time::Duration;

/// Configuration for [`HolidayResolver`](crate::HolidayResolver).
#[derive(Debug, Clone)]
pub struct ResolverOptions {
    /// Syndication feed listing one entry per calendar day.
    ///
    /// Default: `https://www.calend.ru/calendar/feed/`
    pub feed_url: String,

    /// Override for the anchor pattern that recognizes holiday detail links
    /// on a day page. The built-in pattern matches absolute
    /// `calend.ru/holidays/…` hrefs.
    ///
    /// Default: `None` (built-in pattern)
    pub detail_link_regex: Option<Regex>,

    /// Substring marking an entry as belonging to the home locale, matched
    /// case-insensitively against title and description.
    ///
    /// Default: `"росси"` (matches Россия, России, российский, …)
    pub home_marker: String,

    /// Candidate cap for grouped resolutions. Bounds detail-page fetches on
    /// pathological day pages.
    ///
    /// Default: `20`
    pub max_items: usize,

    /// Candidate cap for the flat convenience path.
    ///
    /// Default: `10`
    pub flat_max_items: usize,

    /// Maximum synopsis length in characters; longer descriptions are cut
    /// and terminated with `…`.
    ///
    /// Default: `200`
    pub description_limit: usize,

    /// How many detail pages are fetched concurrently during enrichment.
    /// Candidate order is preserved regardless.
    ///
    /// Default: `4`
    pub enrich_concurrency: usize,

    /// Timeout for the feed fetch.
    ///
    /// Default: 15 seconds
    pub feed_timeout: Duration,

    /// Timeout for day-page and detail-page fetches.
    ///
    /// Default: 20 seconds
    pub page_timeout: Duration,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            feed_url: "https://www.calend.ru/calendar/feed/".to_string(),
            detail_link_regex: None,
            home_marker: "росси".to_string(),
            max_items: 20,
            flat_max_items: 10,
            description_limit: 200,
            enrich_concurrency: 4,
            feed_timeout: Duration::from_secs(15),
            page_timeout: Duration::from_secs(20),
        }
    }
}

impl ResolverOptions {
    /// Creates a new builder seeded with the defaults
    pub fn builder() -> ResolverOptionsBuilder {
        ResolverOptionsBuilder::default()
    }
}

/// Builder for [`ResolverOptions`].
#[derive(Default)]
pub struct ResolverOptionsBuilder {
    feed_url: Option<String>,
    detail_link_regex: Option<Regex>,
    home_marker: Option<String>,
    max_items: Option<usize>,
    flat_max_items: Option<usize>,
    description_limit: Option<usize>,
    enrich_concurrency: Option<usize>,
    feed_timeout: Option<Duration>,
    page_timeout: Option<Duration>,
}

impl ResolverOptionsBuilder {
    /// Set the feed endpoint
    pub fn feed_url(mut self, url: impl Into<String>) -> Self {
        self.feed_url = Some(url.into());
        self
    }

    /// Override the detail-link anchor pattern
    pub fn detail_link_regex(mut self, regex: Regex) -> Self {
        self.detail_link_regex = Some(regex);
        self
    }

    /// Set the home-locale marker substring
    pub fn home_marker(mut self, marker: impl Into<String>) -> Self {
        self.home_marker = Some(marker.into());
        self
    }

    /// Set the grouped candidate cap
    pub fn max_items(mut self, max: usize) -> Self {
        self.max_items = Some(max);
        self
    }

    /// Set the flat candidate cap
    pub fn flat_max_items(mut self, max: usize) -> Self {
        self.flat_max_items = Some(max);
        self
    }

    /// Set the synopsis length limit
    pub fn description_limit(mut self, limit: usize) -> Self {
        self.description_limit = Some(limit);
        self
    }

    /// Set the enrichment fan-out width
    pub fn enrich_concurrency(mut self, concurrency: usize) -> Self {
        self.enrich_concurrency = Some(concurrency);
        self
    }

    /// Set the feed fetch timeout
    pub fn feed_timeout(mut self, timeout: Duration) -> Self {
        self.feed_timeout = Some(timeout);
        self
    }

    /// Set the page fetch timeout
    pub fn page_timeout(mut self, timeout: Duration) -> Self {
        self.page_timeout = Some(timeout);
        self
    }

    /// Build the ResolverOptions
    pub fn build(self) -> ResolverOptions {
        let defaults = ResolverOptions::default();
        ResolverOptions {
            feed_url: self.feed_url.unwrap_or(defaults.feed_url),
            detail_link_regex: self.detail_link_regex.or(defaults.detail_link_regex),
            home_marker: self.home_marker.unwrap_or(defaults.home_marker),
            max_items: self.max_items.unwrap_or(defaults.max_items),
            flat_max_items: self.flat_max_items.unwrap_or(defaults.flat_max_items),
            description_limit: self.description_limit.unwrap_or(defaults.description_limit),
            enrich_concurrency: self
                .enrich_concurrency
                .unwrap_or(defaults.enrich_concurrency),
            feed_timeout: self.feed_timeout.unwrap_or(defaults.feed_timeout),
            page_timeout: self.page_timeout.unwrap_or(defaults.page_timeout),
        }
    }
}
