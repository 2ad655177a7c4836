//! Holiday Resolver: the orchestrator behind the public query operations.
//!
//! One resolution runs feed location, day-page scraping, per-candidate
//! description enrichment and locale classification, then partitions the
//! result. Every call is self-contained: the resolver holds no mutable
//! state and re-fetches on each invocation unless a cache collaborator is
//! injected.
//!
//! Failure policy follows the pipeline's shape. The two structural fetches
//! (feed, day page) abort the call on transport or status failure — there
//! is nothing meaningful to return without them. A failing detail fetch
//! degrades only that candidate's description to the empty string. A date
//! with no feed entry is not a failure at all: it resolves to two empty
//! lists.
//!
//! ## Example
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
//! for entry in &grouped.home {
//!     println!("{} — {}", entry.title, entry.url);
//! }
//! # Ok(())
//! # }
//! ```

use chrono::NaiveDate;
use futures::stream::{self, StreamExt};
use tracing::{debug, info};

use crate::cache::{NoCache, ResolutionCache};
use crate::classify;
use crate::dates;
use crate::entry::{GroupedHolidays, HolidayEntry, Locale};
use crate::enrich;
use crate::error::Result;
use crate::feed;
use crate::fetch::Fetch;
use crate::options::ResolverOptions;
use crate::scrape;

/// Resolves holidays for a calendar date against the upstream site.
///
/// Generic over the [`Fetch`] seam so tests can drive the full pipeline
/// with canned pages, and over an optional [`ResolutionCache`]
/// collaborator (default [`NoCache`]: stateless, per the reference
/// behavior).
pub struct HolidayResolver<F: Fetch, C: ResolutionCache = NoCache> {
    fetcher: F,
    cache: C,
    options: ResolverOptions,
}

impl<F: Fetch> HolidayResolver<F, NoCache> {
    /// Creates a resolver with default options and no caching.
    pub fn new(fetcher: F) -> Self {
        Self::with_options(fetcher, ResolverOptions::default())
    }

    /// Creates a resolver with custom options and no caching.
    pub fn with_options(fetcher: F, options: ResolverOptions) -> Self {
        Self {
            fetcher,
            cache: NoCache,
            options,
        }
    }
}

impl<F: Fetch, C: ResolutionCache> HolidayResolver<F, C> {
    /// Creates a resolver with an injected cache collaborator. Cached
    /// results are keyed by date and reused by
    /// [`resolve_grouped`](HolidayResolver::resolve_grouped) until the
    /// cache expires them.
    pub fn with_cache(fetcher: F, cache: C, options: ResolverOptions) -> Self {
        Self {
            fetcher,
            cache,
            options,
        }
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Resolves `target` into home and other lists, in day-page order.
    ///
    /// Consults the injected cache first and stores successful resolutions
    /// back into it. A date with no feed entry yields two empty lists.
    pub async fn resolve_grouped(&self, target: NaiveDate) -> Result<GroupedHolidays> {
        if let Some(cached) = self.cache.get(target).await {
            debug!(%target, "resolution served from cache");
            return Ok(cached);
        }
        let grouped = self.resolve_uncached(target, self.options.max_items).await?;
        self.cache.put(target, grouped.clone()).await;
        Ok(grouped)
    }

    /// Like [`resolve_grouped`](HolidayResolver::resolve_grouped) with an
    /// explicit candidate cap. Bypasses the cache, whose slots hold
    /// default-cap resolutions.
    pub async fn resolve_grouped_with_limit(
        &self,
        target: NaiveDate,
        max_items: usize,
    ) -> Result<GroupedHolidays> {
        self.resolve_uncached(target, max_items).await
    }

    /// Convenience composition: home entries followed by other entries,
    /// capped at `flat_max_items`.
    pub async fn resolve_flat(&self, target: NaiveDate) -> Result<Vec<HolidayEntry>> {
        let grouped = self
            .resolve_uncached(target, self.options.flat_max_items)
            .await?;
        Ok(grouped.into_flat())
    }

    /// Resolves today's date in the home timezone.
    pub async fn resolve_today(&self) -> Result<GroupedHolidays> {
        self.resolve_grouped(dates::today_home()).await
    }

    /// Titles of all feed entries for `target`, without scraping the day
    /// page. Cheap single-fetch variant for callers that only need the
    /// headline list.
    pub async fn feed_titles(&self, target: NaiveDate) -> Result<Vec<String>> {
        feed::titles_for_date(&self.fetcher, &self.options, target).await
    }

    async fn resolve_uncached(&self, target: NaiveDate, max_items: usize) -> Result<GroupedHolidays> {
        let Some(day_url) = feed::locate_day_page(&self.fetcher, &self.options, target).await?
        else {
            debug!(%target, "no feed entry for date, resolving to empty lists");
            return Ok(GroupedHolidays::default());
        };

        let page = self
            .fetcher
            .get_text(&day_url, self.options.page_timeout)
            .await?;

        let candidates = match &self.options.detail_link_regex {
            Some(pattern) => scrape::extract_candidates_with(pattern, &page, max_items),
            None => scrape::extract_candidates(&page, max_items),
        };
        debug!(%target, candidates = candidates.len(), "scraped day page");

        // Ordered scatter/gather: detail pages are fetched with bounded
        // concurrency while `buffered` yields results in candidate order.
        let fetcher = &self.fetcher;
        let options = &self.options;
        let described: Vec<(scrape::Candidate, String)> = stream::iter(candidates)
            .map(|candidate| async move {
                let description = enrich::describe(fetcher, options, &candidate.url).await;
                (candidate, description)
            })
            .buffered(self.options.enrich_concurrency.max(1))
            .collect()
            .await;

        let mut grouped = GroupedHolidays::default();
        for (candidate, description) in described {
            let locale = classify::classify(&candidate.title, &description, &self.options.home_marker);
            let entry = HolidayEntry {
                title: candidate.title,
                url: candidate.url,
                description,
                locale,
            };
            match locale {
                Locale::Home => grouped.home.push(entry),
                Locale::Other => grouped.other.push(entry),
            }
        }
        info!(
            %target,
            home = grouped.home.len(),
            other = grouped.other.len(),
            "resolved holidays"
        );
        Ok(grouped)
    }
}
