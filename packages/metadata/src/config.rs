//! Configuration constants and extraction options.

use crate::error::{ExtractorError, Result};

/// Legislation core namespace (body markup), both spellings seen in the wild.
pub const LEGISLATION_NAMESPACES: &[&str] = &[
    "http://www.legislation.gov.uk/namespaces/legislation",
    "https://www.legislation.gov.uk/namespaces/legislation",
];

/// Legislation metadata namespace (`ukm:` prefix).
pub const METADATA_NAMESPACES: &[&str] = &[
    "http://www.legislation.gov.uk/namespaces/metadata",
    "https://www.legislation.gov.uk/namespaces/metadata",
];

/// Atom syndication namespace.
pub const ATOM_NAMESPACES: &[&str] = &["http://www.w3.org/2005/Atom"];

/// Dublin Core elements and terms.
pub const DUBLIN_CORE_NAMESPACES: &[&str] = &[
    "http://purl.org/dc/elements/1.1/",
    "http://purl.org/dc/terms/",
];

/// Title returned when no candidate location yields text.
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Maximum number of records in the key-sections view.
pub const KEY_SECTIONS_LIMIT: usize = 10;

/// Width of inferred short titles in the key-sections view.
pub const SHORT_TITLE_WIDTH: usize = 80;

/// Descendant text must be longer than this to be picked by the last-resort scan.
pub const MIN_SCAN_TEXT_LEN: usize = 5;

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Display widths used by the report view.
pub const REPORT_SECTION_ROWS: usize = 20;
pub const REPORT_TITLE_WIDTH: usize = 80;
pub const REPORT_DESCRIPTION_WIDTH: usize = 120;
pub const REPORT_CONTENT_WIDTH: usize = 500;

/// Text wrap width for the plain-text summary.
pub const TEXT_WRAP_WIDTH: usize = 100;

/// Options controlling extraction behaviour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionConfig {
    /// Skip nodes already recorded under an earlier vocabulary entry.
    ///
    /// Off by default: overlapping vocabularies produce one record per match.
    /// The CLML vocabulary lists each tag once and nested provisions are
    /// distinct nodes, so this only changes output for custom vocabularies
    /// that register the same tag more than once.
    pub dedupe_sections: bool,

    /// Cap on records in the key-sections view.
    pub key_section_limit: usize,

    /// Truncation width for inferred titles in the key-sections view.
    pub short_title_width: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            dedupe_sections: false,
            key_section_limit: KEY_SECTIONS_LIMIT,
            short_title_width: SHORT_TITLE_WIDTH,
        }
    }
}

impl ExtractionConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable section deduplication by node identity.
    #[must_use]
    pub fn with_dedupe_sections(mut self, dedupe: bool) -> Self {
        self.dedupe_sections = dedupe;
        self
    }

    /// Set the key-sections cap.
    #[must_use]
    pub fn with_key_section_limit(mut self, limit: usize) -> Self {
        self.key_section_limit = limit;
        self
    }

    /// Set the short title width.
    #[must_use]
    pub fn with_short_title_width(mut self, width: usize) -> Self {
        self.short_title_width = width;
        self
    }

    /// Validate the configuration.
    ///
    /// # Examples
    /// ```
    /// use legislation_metadata::config::ExtractionConfig;
    ///
    /// assert!(ExtractionConfig::default().validate().is_ok());
    /// assert!(ExtractionConfig::default().with_key_section_limit(0).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.key_section_limit == 0 {
            return Err(ExtractorError::InvalidConfig(
                "key_section_limit must be greater than zero".to_string(),
            ));
        }
        if self.short_title_width == 0 {
            return Err(ExtractorError::InvalidConfig(
                "short_title_width must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExtractionConfig::default();
        assert!(!config.dedupe_sections);
        assert_eq!(config.key_section_limit, 10);
        assert_eq!(config.short_title_width, 80);
    }

    #[test]
    fn test_builder() {
        let config = ExtractionConfig::new()
            .with_dedupe_sections(true)
            .with_key_section_limit(3)
            .with_short_title_width(40);
        assert!(config.dedupe_sections);
        assert_eq!(config.key_section_limit, 3);
        assert_eq!(config.short_title_width, 40);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_width() {
        let err = ExtractionConfig::new()
            .with_short_title_width(0)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("short_title_width"));
    }
}
