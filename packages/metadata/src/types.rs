//! Core data types produced by extraction.
//!
//! Records own copies of every string they carry; nothing borrows from the
//! parsed tree, so a record outlives the document it was extracted from.

use serde::Serialize;

/// Structured metadata for one legislation document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataRecord {
    /// Best-effort title, `"Unknown Title"` when nothing was found.
    pub title: String,

    /// Descriptive long title, empty when absent.
    pub long_title: String,

    /// Publication year, absent unless a four-digit value was found.
    pub year: Option<i32>,

    /// Canonical document URI, empty when unresolved.
    pub document_uri: String,

    /// Legislation type (e.g. "ukpga"), empty when unresolved.
    pub legislation_type: String,

    /// Legislation number within its year.
    pub legislation_number: Option<String>,

    /// Document status (e.g. "revised", "final").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Document category (e.g. "primary", "secondary").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Provisions in enumeration order.
    pub sections: Vec<SectionRecord>,

    /// Number of entries in `sections`.
    pub sections_count: usize,

    /// Number of schedules in the document body.
    pub schedules_count: usize,

    /// Unapplied effects in document order.
    pub amendments: Vec<AmendmentRecord>,
}

/// One provision-like node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionRecord {
    /// The node's `id` attribute, empty when missing.
    pub id: String,

    /// Tag name without namespace prefix (e.g. "P1", "Part").
    #[serde(rename = "type")]
    pub kind: String,

    /// Provision number, empty when none could be found.
    pub number: String,

    /// Heading, or a title inferred from the provision text.
    pub title: String,

    /// Body text with number and heading removed.
    pub content: String,
}

/// One amendment/effect entry from the metadata block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AmendmentRecord {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: String,

    pub affecting_uri: String,

    pub affected_uri: String,

    pub affected_provisions: String,

    pub description: String,
}
