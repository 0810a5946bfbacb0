//! Atom feed listing of legislation documents.
//!
//! Search and "new legislation" listings are published as Atom feeds:
//!
//! ```text
//! <feed xmlns="http://www.w3.org/2005/Atom">
//! └── entry
//!     ├── id       http://www.legislation.gov.uk/id/ukpga/2020/7
//!     ├── title    Coronavirus Act 2020
//!     └── updated  2020-03-25T00:00:00Z
//! ```

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::error::Result;
use crate::namespace::{NamespaceResolver, NamespaceRole};
use crate::xml::{collect_text, find_child, find_descendants, parse_document};

/// One entry of a legislation feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedEntry {
    pub uri: String,
    pub title: String,
    pub updated: DateTime<FixedOffset>,
}

/// Parse an Atom feed into its entries, in feed order.
///
/// Entries missing an `id`, a `title`, or a valid RFC 3339 `updated`
/// timestamp are skipped with a warning.
///
/// # Errors
/// Returns `MalformedDocument` when the feed is not well-formed markup.
///
/// # Examples
/// ```
/// use legislation_metadata::atom::parse_atom_feed;
///
/// let feed = r#"<feed xmlns="http://www.w3.org/2005/Atom">
///   <entry>
///     <id>http://www.legislation.gov.uk/id/ukpga/2020/7</id>
///     <title>Coronavirus Act 2020</title>
///     <updated>2020-03-25T00:00:00Z</updated>
///   </entry>
/// </feed>"#;
/// let entries = parse_atom_feed(feed).unwrap();
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].title, "Coronavirus Act 2020");
/// ```
pub fn parse_atom_feed(xml: &str) -> Result<Vec<FeedEntry>> {
    let doc = parse_document(xml)?;
    let resolver = NamespaceResolver::clml();

    let nodes = find_descendants(&resolver, doc.root_element(), NamespaceRole::AtomFeed, "entry");

    let mut entries = Vec::new();
    for (index, node) in nodes.enumerate() {
        let child = |tag: &str| {
            find_child(&resolver, node, NamespaceRole::AtomFeed, tag)
                .map(collect_text)
                .filter(|text| !text.is_empty())
        };

        let (Some(uri), Some(title), Some(updated)) =
            (child("id"), child("title"), child("updated"))
        else {
            tracing::warn!(entry = index, "Skipping feed entry with missing id, title or updated");
            continue;
        };

        match DateTime::parse_from_rfc3339(&updated) {
            Ok(updated) => entries.push(FeedEntry {
                uri,
                title,
                updated,
            }),
            Err(err) => {
                tracing::warn!(
                    entry = index,
                    value = %updated,
                    error = %err,
                    "Skipping feed entry with invalid date"
                );
            }
        }
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_in_order() {
        let feed = r#"<feed xmlns="http://www.w3.org/2005/Atom" xmlns:leg="http://www.legislation.gov.uk/namespaces/legislation">
            <title>New legislation</title>
            <entry><id>http://www.legislation.gov.uk/id/uksi/2020/350</id><title>The Health Protection Regulations 2020</title><updated>2020-03-26T13:00:00+00:00</updated></entry>
            <entry><id>http://www.legislation.gov.uk/id/ukpga/2020/7</id><title>Coronavirus Act 2020</title><updated>2020-03-25T00:00:00Z</updated></entry>
        </feed>"#;
        let entries = parse_atom_feed(feed).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].uri, "http://www.legislation.gov.uk/id/uksi/2020/350");
        assert_eq!(entries[1].title, "Coronavirus Act 2020");
        assert_eq!(entries[1].updated.to_rfc3339(), "2020-03-25T00:00:00+00:00");
    }

    #[test]
    fn test_incomplete_entries_skipped() {
        let feed = r#"<feed xmlns="http://www.w3.org/2005/Atom">
            <entry><id>http://www.legislation.gov.uk/id/ukpga/2020/1</id><updated>2020-01-01T00:00:00Z</updated></entry>
            <entry><id>http://www.legislation.gov.uk/id/ukpga/2020/2</id><title>Bad date</title><updated>yesterday</updated></entry>
            <entry><id>http://www.legislation.gov.uk/id/ukpga/2020/3</id><title>Good</title><updated>2020-01-03T00:00:00Z</updated></entry>
        </feed>"#;
        let entries = parse_atom_feed(feed).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Good");
    }

    #[test]
    fn test_empty_feed() {
        let entries = parse_atom_feed(r#"<feed xmlns="http://www.w3.org/2005/Atom"/>"#).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_malformed_feed_is_error() {
        let err = parse_atom_feed("<feed><entry></feed>").unwrap_err();
        assert!(err.is_malformed_document());
    }
}
