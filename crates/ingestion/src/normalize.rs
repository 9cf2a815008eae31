//! Raw page cleanup.
//!
//! The authority page is hand-edited HTML with no stable structure, so
//! everything downstream works on one flattened line of text.

use scraper::Html;

/// Strip markup from a fetched page and collapse it to plain text.
///
/// Empty input yields an empty string.
pub fn normalize_page(html: &str) -> String {
    let document = Html::parse_document(html);
    let text = document
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join(" ");
    collapse_whitespace(&text)
}

/// Collapse whitespace runs to single spaces and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
