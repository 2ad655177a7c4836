//! End-to-end pipeline tests against canned upstream pages.
//!
//! A stub fetcher plays the calendar site: the RSS feed, one day page and
//! the per-holiday detail pages are served from fixtures, including pages
//! that fail on purpose. No network is touched.

use async_trait::async_trait;
use calendru::{
    Fetch, GroupedHolidays, HolidayError, HolidayResolver, Locale, MemoryCache, ResolverOptions,
};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

const FEED_URL: &str = "https://www.calend.ru/calendar/feed/";
const DAY_URL: &str = "https://www.calend.ru/day/2025-11-4/";
const UNITY_URL: &str = "https://www.calend.ru/holidays/0/0/94/";
const CARE_URL: &str = "https://www.calend.ru/holidays/0/0/2799/";

enum Page {
    Ok(String),
    Unavailable,
}

#[derive(Default)]
struct StubFetcher {
    pages: HashMap<String, Page>,
    hits: Arc<AtomicUsize>,
}

impl StubFetcher {
    fn serve(mut self, url: &str, body: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), Page::Ok(body.into()));
        self
    }

    fn fail(mut self, url: &str) -> Self {
        self.pages.insert(url.to_string(), Page::Unavailable);
        self
    }

    fn hit_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.hits)
    }
}

#[async_trait]
impl Fetch for StubFetcher {
    async fn get_bytes(&self, url: &str, _timeout: Duration) -> calendru::Result<Vec<u8>> {
        self.hits.fetch_add(1, Ordering::SeqCst);
        match self.pages.get(url) {
            Some(Page::Ok(body)) => Ok(body.clone().into_bytes()),
            Some(Page::Unavailable) => Err(HolidayError::Status {
                url: url.to_string(),
                status: 503,
            }),
            None => Err(HolidayError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}

fn feed_xml() -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <rss version=\"2.0\"><channel>\
         <title>Ежедневник</title>\
         <link>https://www.calend.ru/</link>\
         <description>Праздники по дням</description>\
         <item><title>Какие праздники 3 ноября 2025 года</title>\
         <link>https://www.calend.ru/day/2025-11-3/</link></item>\
         <item><title>Какие праздники 4 ноября 2025 года</title>\
         <link>{DAY_URL}</link></item>\
         </channel></rss>"
    )
}

fn day_page_html() -> String {
    format!(
        r#"<html><body>
        <div class="block holidays">
          <a href="{UNITY_URL}" class="title">День народного единства</a>
          <a href="{CARE_URL}" class="title">Международный день заботы</a>
          <a href="{UNITY_URL}" class="title">День народного единства</a>
        </div>
        </body></html>"#
    )
}

fn detail_html(description: &str) -> String {
    format!(
        r#"<html><head><meta name="description" content="{description}"></head>
        <body>...</body></html>"#
    )
}

fn target() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 4).unwrap()
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn full_site() -> StubFetcher {
    StubFetcher::default()
        .serve(FEED_URL, feed_xml())
        .serve(DAY_URL, day_page_html())
        .serve(
            UNITY_URL,
            detail_html("4 ноября в России отмечается День народного единства"),
        )
        .serve(CARE_URL, detail_html("Международный праздник взаимопомощи"))
}

#[tokio::test]
async fn test_grouped_resolution_splits_home_and_other_in_page_order() {
    init_logging();
    let resolver = HolidayResolver::new(full_site());
    let grouped = resolver.resolve_grouped(target()).await.unwrap();

    assert_eq!(grouped.home.len(), 1);
    assert_eq!(grouped.other.len(), 1);

    let home = &grouped.home[0];
    assert_eq!(home.title, "День народного единства");
    assert_eq!(home.url, UNITY_URL);
    assert_eq!(home.locale, Locale::Home);
    assert!(home.description.contains("России"));

    let other = &grouped.other[0];
    assert_eq!(other.title, "Международный день заботы");
    assert_eq!(other.locale, Locale::Other);
}

#[tokio::test]
async fn test_every_uncached_call_refetches() {
    let site = full_site();
    let hits = site.hit_counter();
    let resolver = HolidayResolver::new(site);

    resolver.resolve_grouped(target()).await.unwrap();
    let after_first = hits.load(Ordering::SeqCst);
    resolver.resolve_grouped(target()).await.unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), after_first * 2);
}

#[tokio::test]
async fn test_failing_detail_page_degrades_only_its_own_description() {
    init_logging();
    let site = StubFetcher::default()
        .serve(FEED_URL, feed_xml())
        .serve(DAY_URL, day_page_html())
        .serve(
            UNITY_URL,
            detail_html("День народного единства России"),
        )
        .fail(CARE_URL);

    let resolver = HolidayResolver::new(site);
    let grouped = resolver.resolve_grouped(target()).await.unwrap();

    assert_eq!(grouped.home.len(), 1);
    assert!(!grouped.home[0].description.is_empty());

    assert_eq!(grouped.other.len(), 1);
    assert_eq!(grouped.other[0].description, "");
}

#[tokio::test]
async fn test_unknown_date_resolves_to_empty_lists_not_error() {
    let resolver = HolidayResolver::new(full_site());
    let missing = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
    let grouped = resolver.resolve_grouped(missing).await.unwrap();
    assert!(grouped.is_empty());
}

#[tokio::test]
async fn test_feed_fetch_failure_aborts_the_call() {
    let resolver = HolidayResolver::new(StubFetcher::default().fail(FEED_URL));
    let result = resolver.resolve_grouped(target()).await;
    assert!(matches!(
        result,
        Err(HolidayError::Status { status: 503, .. })
    ));
}

#[tokio::test]
async fn test_day_page_fetch_failure_aborts_the_call() {
    let site = StubFetcher::default()
        .serve(FEED_URL, feed_xml())
        .fail(DAY_URL);
    let resolver = HolidayResolver::new(site);
    assert!(resolver.resolve_grouped(target()).await.is_err());
}

#[tokio::test]
async fn test_malformed_feed_is_a_parse_error() {
    let site = StubFetcher::default().serve(FEED_URL, "this is not xml");
    let resolver = HolidayResolver::new(site);
    assert!(matches!(
        resolver.resolve_grouped(target()).await,
        Err(HolidayError::FeedParse(_))
    ));
}

#[tokio::test]
async fn test_flat_resolution_concatenates_home_then_other() {
    let resolver = HolidayResolver::new(full_site());
    let flat = resolver.resolve_flat(target()).await.unwrap();
    assert_eq!(flat.len(), 2);
    assert_eq!(flat[0].locale, Locale::Home);
    assert_eq!(flat[1].locale, Locale::Other);
}

#[tokio::test]
async fn test_feed_titles_without_day_page_scrape() {
    let resolver = HolidayResolver::new(full_site());
    let titles = resolver.feed_titles(target()).await.unwrap();
    assert_eq!(titles, vec!["Какие праздники 4 ноября 2025 года"]);
}

#[tokio::test]
async fn test_injected_cache_skips_refetching() {
    let site = full_site();
    let hits = site.hit_counter();
    let cache = MemoryCache::new(Duration::from_secs(60));
    let resolver = HolidayResolver::with_cache(site, cache, ResolverOptions::default());

    let first = resolver.resolve_grouped(target()).await.unwrap();
    let fetches_for_first = hits.load(Ordering::SeqCst);
    // feed + day page + two detail pages
    assert_eq!(fetches_for_first, 4);

    let second = resolver.resolve_grouped(target()).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(hits.load(Ordering::SeqCst), fetches_for_first);
}

#[tokio::test]
async fn test_grouped_honors_max_items_cap() {
    let resolver = HolidayResolver::new(full_site());
    let grouped = resolver
        .resolve_grouped_with_limit(target(), 1)
        .await
        .unwrap();
    // only the first anchor survives the cap
    assert_eq!(grouped.home.len() + grouped.other.len(), 1);
    assert_eq!(grouped.home[0].title, "День народного единства");
}

#[tokio::test]
async fn test_grouped_output_is_plain_data() {
    // downstream formatting only needs title/url/description triples
    let resolver = HolidayResolver::new(full_site());
    let grouped: GroupedHolidays = resolver.resolve_grouped(target()).await.unwrap();
    let json = serde_json::to_string(&grouped).unwrap();
    assert!(json.contains("holidays/0/0/94"));
}
