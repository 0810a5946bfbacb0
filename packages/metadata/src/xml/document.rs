//! Parsing raw markup into a navigable tree.

use roxmltree::{Document, ParsingOptions};

use crate::error::Result;

/// Parse markup text into a tree.
///
/// DOCTYPE declarations are accepted; a leading byte-order mark is ignored.
///
/// # Errors
/// Returns `MalformedDocument` when the text is not well-formed markup.
///
/// # Examples
/// ```
/// use legislation_metadata::xml::parse_document;
///
/// assert!(parse_document("<Legislation/>").is_ok());
/// assert!(parse_document("<Legislation>").is_err());
/// ```
pub fn parse_document(text: &str) -> Result<Document<'_>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut options = ParsingOptions::default();
    options.allow_dtd = true;

    let doc = Document::parse_with_options(text, options).map_err(|err| {
        tracing::debug!(error = %err, "Rejecting malformed document");
        err
    })?;
    Ok(doc)
}

/// Parse UTF-8 encoded markup bytes into a tree.
///
/// # Errors
/// Returns `InvalidEncoding` for bytes that are not UTF-8 and
/// `MalformedDocument` for text that is not well-formed markup.
pub fn parse_bytes(bytes: &[u8]) -> Result<Document<'_>> {
    let text = std::str::from_utf8(bytes)?;
    parse_document(text)
}
