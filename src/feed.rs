//! Feed Locator: finds the day page for a target date in the RSS feed.
//!
//! The upstream feed carries one entry per calendar day; the entry title
//! embeds a full date ("… 4 ноября 2025 …") and its link points at the
//! aggregation page for that day. An absent entry means "no data for this
//! date" and surfaces as `Ok(None)`, distinct from transport failures.

use chrono::NaiveDate;
use tracing::debug;

use crate::dates;
use crate::error::{HolidayError, Result};
use crate::fetch::Fetch;
use crate::options::ResolverOptions;

/// Returns the day-page URL for `target`, or `None` if no feed entry
/// carries that date.
pub(crate) async fn locate_day_page<F: Fetch>(
    fetcher: &F,
    options: &ResolverOptions,
    target: NaiveDate,
) -> Result<Option<String>> {
    let channel = fetch_channel(fetcher, options).await?;
    let link = day_page_from_channel(&channel, target);
    debug!(%target, found = link.is_some(), "located day page");
    Ok(link)
}

/// Returns the titles of all feed entries dated `target`.
pub(crate) async fn titles_for_date<F: Fetch>(
    fetcher: &F,
    options: &ResolverOptions,
    target: NaiveDate,
) -> Result<Vec<String>> {
    let channel = fetch_channel(fetcher, options).await?;
    Ok(titles_from_channel(&channel, target))
}

async fn fetch_channel<F: Fetch>(fetcher: &F, options: &ResolverOptions) -> Result<rss::Channel> {
    let bytes = fetcher
        .get_bytes(&options.feed_url, options.feed_timeout)
        .await?;
    rss::Channel::read_from(&bytes[..]).map_err(|e| HolidayError::FeedParse(e.to_string()))
}

fn day_page_from_channel(channel: &rss::Channel, target: NaiveDate) -> Option<String> {
    channel
        .items()
        .iter()
        .find(|item| item_date(item) == Some(target))
        .and_then(|item| item.link().map(str::to_string))
}

fn titles_from_channel(channel: &rss::Channel, target: NaiveDate) -> Vec<String> {
    channel
        .items()
        .iter()
        .filter(|item| item_date(item) == Some(target))
        .filter_map(|item| item.title())
        .map(|title| title.trim().to_string())
        .filter(|title| !title.is_empty())
        .collect()
}

fn item_date(item: &rss::Item) -> Option<NaiveDate> {
    dates::parse_feed_title(item.title().unwrap_or_default())
}
