//! Description Enricher: pulls a short synopsis from a detail page.
//!
//! The synopsis comes from the `<meta name="description">` field in the
//! page head, found by pattern match — upstream markup is not well-formed
//! enough to justify a full document parse. A fetch or parse failure for
//! one candidate degrades that candidate's description to the empty string
//! and never aborts the batch.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::fetch::Fetch;
use crate::options::ResolverOptions;
use crate::text;

static META_DESCRIPTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<meta\s+name=["']description["']\s+content=["']([^"']+)["']"#).unwrap()
});

/// Fetches `url` and returns its shortened meta description, or an empty
/// string when the page is unreachable or carries no description.
pub(crate) async fn describe<F: Fetch>(
    fetcher: &F,
    options: &ResolverOptions,
    url: &str,
) -> String {
    match fetcher.get_text(url, options.page_timeout).await {
        Ok(html) => meta_description(&html)
            .map(|raw| shorten(raw, options.description_limit))
            .unwrap_or_default(),
        Err(e) => {
            warn!(%url, error = %e, "detail page fetch failed, leaving description empty");
            String::new()
        }
    }
}

/// Finds the raw content of the head's description metadata field.
pub(crate) fn meta_description(html: &str) -> Option<&str> {
    META_DESCRIPTION_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Unescapes entities, collapses whitespace and bounds the text to `limit`
/// characters, appending `…` when cut. Counts characters, not bytes, so a
/// cut never lands inside a multibyte sequence.
pub(crate) fn shorten(raw: &str, limit: usize) -> String {
    let cleaned = text::collapse_whitespace(&text::unescape(raw));
    if cleaned.chars().count() <= limit {
        return cleaned;
    }
    let cut: String = cleaned.chars().take(limit.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}
