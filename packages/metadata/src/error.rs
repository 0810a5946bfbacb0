//! Error types for metadata extraction.
//!
//! Extraction has a two-tier policy: the only hard failure is input that
//! cannot be parsed as markup at all. Everything else degrades to a
//! documented default inside the extractor and never surfaces here.

use thiserror::Error;

/// Main error type for the extraction library.
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// Markup is not well-formed (mismatched tags, bad entities, ...).
    #[error("Malformed document: {0}")]
    MalformedDocument(#[from] roxmltree::Error),

    /// Input bytes are not valid UTF-8.
    #[error("Malformed document: invalid UTF-8 ({0})")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    /// Extraction configuration is unusable.
    #[error("Invalid extraction config: {0}")]
    InvalidConfig(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// Some documents in a batch could not be extracted.
    #[error("{failed} of {total} documents could not be extracted")]
    BatchFailed { failed: usize, total: usize },
}

impl ExtractorError {
    /// Whether this error means the document itself could not be parsed.
    ///
    /// Callers abort extraction for that document when this is `true`.
    #[must_use]
    pub fn is_malformed_document(&self) -> bool {
        matches!(self, Self::MalformedDocument(_) | Self::InvalidEncoding(_))
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_document_display() {
        let err = roxmltree::Document::parse("<a><b></a>").unwrap_err();
        let err = ExtractorError::from(err);
        assert!(err.to_string().starts_with("Malformed document:"));
        assert!(err.is_malformed_document());
    }

    #[test]
    fn test_invalid_encoding_is_malformed() {
        let bytes = [0x3c, 0x61, 0xff, 0x3e];
        let err = std::str::from_utf8(&bytes).unwrap_err();
        let err = ExtractorError::from(err);
        assert!(err.is_malformed_document());
        assert!(err.to_string().contains("invalid UTF-8"));
    }

    #[test]
    fn test_invalid_config_not_malformed() {
        let err = ExtractorError::InvalidConfig("key_section_limit must be > 0".to_string());
        assert!(!err.is_malformed_document());
        assert_eq!(
            err.to_string(),
            "Invalid extraction config: key_section_limit must be > 0"
        );
    }

    #[test]
    fn test_batch_failed_display() {
        let err = ExtractorError::BatchFailed { failed: 1, total: 3 };
        assert_eq!(err.to_string(), "1 of 3 documents could not be extracted");
        assert!(!err.is_malformed_document());
    }
}
