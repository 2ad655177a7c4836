//! Page Scraper: pulls holiday detail links out of a day page.
//!
//! Day pages are loosely structured and not guaranteed to be well-formed,
//! so candidates are found by a regex scan over the raw markup rather than
//! a structural parse. The pattern is narrow on purpose: absolute links
//! into the holiday section of the known host. Everything here is pure so
//! the heuristic can be swapped out without touching the resolver.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use url::Url;

use crate::text;

/// Anchors whose href goes to a holiday detail page on the known host.
static HOLIDAY_ANCHOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<a\s+href="(https?://(?:www\.)?calend\.ru/holidays/[^"]+)"[^>]*>([^<]+)</a>"#)
        .unwrap()
});

/// A scraped `{title, url}` pair, before enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Link text, entity-unescaped and trimmed
    pub title: String,
    /// Absolute detail-page href, the dedup key
    pub url: String,
}

/// Extracts up to `max_items` unique candidates from raw day-page markup
/// using the built-in anchor pattern.
pub(crate) fn extract_candidates(html: &str, max_items: usize) -> Vec<Candidate> {
    extract_candidates_with(&HOLIDAY_ANCHOR_RE, html, max_items)
}

/// Same as [`extract_candidates`] with a caller-supplied anchor pattern.
/// The pattern must capture the href in group 1 and the link text in
/// group 2.
///
/// Candidates are deduplicated by URL keeping first-seen order; the scan
/// stops as soon as `max_items` unique candidates are collected, bounding
/// work on pathological pages. Anchors with unparseable hrefs or empty
/// link text are skipped.
pub(crate) fn extract_candidates_with(
    pattern: &Regex,
    html: &str,
    max_items: usize,
) -> Vec<Candidate> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut candidates = Vec::new();

    for caps in pattern.captures_iter(html) {
        if candidates.len() >= max_items {
            break;
        }
        let url = caps[1].to_string();
        if Url::parse(&url).is_err() {
            continue;
        }
        if !seen.insert(url.clone()) {
            continue;
        }
        let title = text::unescape(&caps[2]).trim().to_string();
        if title.is_empty() {
            continue;
        }
        candidates.push(Candidate { title, url });
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor(url: &str, title: &str) -> String {
        format!(r#"<a href="{url}" class="title">{title}</a>"#)
    }

    #[test]
    fn test_dedup_by_url_keeps_first_seen_order() {
        let html = [
            anchor("https://www.calend.ru/holidays/0/0/94/", "День народного единства"),
            anchor("https://www.calend.ru/holidays/0/0/2799/", "День заботы"),
            anchor("https://www.calend.ru/holidays/0/0/94/", "День народного единства"),
            anchor("https://www.calend.ru/holidays/0/0/7/", "День согласия"),
        ]
        .join("\n");

        let candidates = extract_candidates(&html, 20);
        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[0].title, "День народного единства");
        assert_eq!(candidates[1].title, "День заботы");
        assert_eq!(candidates[2].title, "День согласия");
    }

    #[test]
    fn test_stops_at_max_items() {
        let html: String = (0..50)
            .map(|i| anchor(&format!("https://calend.ru/holidays/0/0/{i}/"), "Праздник"))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(extract_candidates(&html, 20).len(), 20);
        assert_eq!(extract_candidates(&html, 3).len(), 3);
    }

    #[test]
    fn test_foreign_hosts_and_other_sections_ignored() {
        let html = [
            anchor("https://example.com/holidays/1/", "Чужой хост"),
            anchor("https://www.calend.ru/events/5/", "Не праздник"),
            anchor("https://www.calend.ru/holidays/0/0/94/", "Наш"),
        ]
        .join("\n");
        let candidates = extract_candidates(&html, 20);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].url, "https://www.calend.ru/holidays/0/0/94/");
    }

    #[test]
    fn test_title_entities_are_decoded() {
        let html = anchor(
            "https://www.calend.ru/holidays/0/0/94/",
            "День &laquo;спасибо&raquo; &amp; добра",
        );
        let candidates = extract_candidates(&html, 20);
        assert_eq!(candidates[0].title, "День «спасибо» & добра");
    }

    #[test]
    fn test_whitespace_only_titles_are_skipped() {
        let html = anchor("https://www.calend.ru/holidays/0/0/94/", "  \n ");
        assert!(extract_candidates(&html, 20).is_empty());
    }
}
