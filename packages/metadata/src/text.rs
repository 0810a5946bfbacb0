//! Text heuristics shared by the section enumerator and the report view.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::ELLIPSIS;

/// Placeholder for elided content: only dots (ASCII or ellipsis) and spaces.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PLACEHOLDER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\s.…]*[.…][\s.…]*$").expect("valid regex"));

/// Sentence boundary: a period followed by whitespace.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.\s").expect("valid regex"));

const EM_DASH: char = '—';

/// Check whether text stands in for elided content (e.g. `". . ."`).
///
/// # Examples
/// ```
/// use legislation_metadata::text::is_placeholder;
///
/// assert!(is_placeholder(". . ."));
/// assert!(is_placeholder("…"));
/// assert!(!is_placeholder("1."));
/// assert!(!is_placeholder(""));
/// ```
pub fn is_placeholder(text: &str) -> bool {
    PLACEHOLDER_PATTERN.is_match(text)
}

/// Cut text to at most `width` characters, appending `...` when cut.
///
/// # Examples
/// ```
/// use legislation_metadata::text::truncate_with_ellipsis;
///
/// assert_eq!(truncate_with_ellipsis("short", 10), "short");
/// assert_eq!(truncate_with_ellipsis("abcdefghij", 4), "abcd...");
/// ```
pub fn truncate_with_ellipsis(text: &str, width: usize) -> String {
    match text.char_indices().nth(width) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", text[..cut].trim_end()),
        None => text.to_string(),
    }
}

/// Derive a short heading from running text.
///
/// Takes the first sentence (through its period) when a period is followed by
/// whitespace, otherwise the text before the first em-dash, otherwise the
/// whole text. With `width`, the whole-text case is truncated to that many
/// characters.
///
/// # Examples
/// ```
/// use legislation_metadata::text::lead_sentence;
///
/// assert_eq!(lead_sentence("In force. Other text.", None), "In force.");
/// assert_eq!(lead_sentence("In this Act— (a) one", None), "In this Act");
/// assert_eq!(lead_sentence("abcdef", Some(3)), "abc...");
/// ```
pub fn lead_sentence(text: &str, width: Option<usize>) -> String {
    let text = text.trim();

    if let Some(boundary) = SENTENCE_BOUNDARY.find(text) {
        return text[..=boundary.start()].to_string();
    }

    if let Some(dash) = text.find(EM_DASH) {
        let lead = text[..dash].trim_end();
        if !lead.is_empty() {
            return lead.to_string();
        }
    }

    match width {
        Some(width) => truncate_with_ellipsis(text, width),
        None => text.to_string(),
    }
}
