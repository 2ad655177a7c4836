//! Locale Classifier: the two-way home/other heuristic.
//!
//! An entry belongs to the home locale when the marker substring appears in
//! its title or description, case-insensitively. The home check runs first
//! and any match short-circuits, so an entry carrying both home and foreign
//! markers classifies as home. This is a deliberate approximation, not a
//! general classifier.

use crate::entry::Locale;

/// Classifies one entry. Pure and order-independent; no I/O.
pub(crate) fn classify(title: &str, description: &str, home_marker: &str) -> Locale {
    let marker = home_marker.to_lowercase();
    if title.to_lowercase().contains(&marker) || description.to_lowercase().contains(&marker) {
        Locale::Home
    } else {
        Locale::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &str = "росси";

    #[test]
    fn test_marker_in_title() {
        assert_eq!(
            classify("День народного единства России", "", MARKER),
            Locale::Home
        );
    }

    #[test]
    fn test_marker_only_in_description() {
        assert_eq!(
            classify("День заботы", "В России отмечается ежегодно", MARKER),
            Locale::Home
        );
    }

    #[test]
    fn test_marker_case_insensitive() {
        assert_eq!(classify("РОССИЯ празднует", "", MARKER), Locale::Home);
        assert_eq!(classify("", "российский праздник", MARKER), Locale::Home);
    }

    #[test]
    fn test_no_marker_is_other() {
        assert_eq!(
            classify("День флага Азербайджана", "Отмечается в Баку", MARKER),
            Locale::Other
        );
    }

    #[test]
    fn test_home_wins_when_both_markers_present() {
        assert_eq!(
            classify("День единства России и Беларуси", "", MARKER),
            Locale::Home
        );
    }
}
