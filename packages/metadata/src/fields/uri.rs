//! Legislation type/number derivation from document URIs.

/// Type and number parsed from a `.../{type}/{year}/{number}` URI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegislationUri {
    pub legislation_type: Option<String>,
    pub number: Option<String>,
}

/// Split a URI into its path segments.
///
/// Scheme and host are dropped, as are query and fragment. Relative paths
/// such as `ukpga/2020/7` are taken as-is.
fn path_segments(uri: &str) -> Vec<&str> {
    let uri = uri.trim();
    let uri = uri.split(|c: char| c == '?' || c == '#').next().unwrap_or_default();

    let path = match uri.split_once("://") {
        Some((_, rest)) => rest.split_once('/').map(|(_, path)| path).unwrap_or_default(),
        None => uri,
    };

    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

/// Derive legislation type and number from a document URI.
///
/// The type is the third segment from the end and the number the last one,
/// provided the path has at least three segments. URIs outside this layout
/// yield absent values.
///
/// # Examples
/// ```
/// use legislation_metadata::fields::parse_legislation_uri;
///
/// let parsed = parse_legislation_uri("http://www.legislation.gov.uk/ukpga/2020/7");
/// assert_eq!(parsed.legislation_type.as_deref(), Some("ukpga"));
/// assert_eq!(parsed.number.as_deref(), Some("7"));
///
/// let parsed = parse_legislation_uri("ukpga");
/// assert!(parsed.legislation_type.is_none());
/// assert!(parsed.number.is_none());
/// ```
pub fn parse_legislation_uri(uri: &str) -> LegislationUri {
    let segments = path_segments(uri);
    if segments.len() < 3 {
        return LegislationUri::default();
    }

    LegislationUri {
        legislation_type: Some(segments[segments.len() - 3].to_string()),
        number: segments.last().map(|s| (*s).to_string()),
    }
}

/// Parse a four-digit year. Anything else is absent.
///
/// # Examples
/// ```
/// use legislation_metadata::fields::parse_year;
///
/// assert_eq!(parse_year("2020"), Some(2020));
/// assert_eq!(parse_year(" 1998 "), Some(1998));
/// assert_eq!(parse_year("20xy"), None);
/// ```
pub fn parse_year(text: &str) -> Option<i32> {
    let text = text.trim();
    if text.len() != 4 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_uri() {
        let parsed = parse_legislation_uri("ukpga/2020/7");
        assert_eq!(parsed.legislation_type.as_deref(), Some("ukpga"));
        assert_eq!(parsed.number.as_deref(), Some("7"));
    }

    #[test]
    fn test_id_uri_with_prefix_segment() {
        let parsed = parse_legislation_uri("http://www.legislation.gov.uk/id/uksi/2020/350");
        assert_eq!(parsed.legislation_type.as_deref(), Some("uksi"));
        assert_eq!(parsed.number.as_deref(), Some("350"));
    }

    #[test]
    fn test_trailing_slash_query_and_fragment() {
        let parsed =
            parse_legislation_uri("https://www.legislation.gov.uk/asp/2019/4/?view=plain#top");
        assert_eq!(parsed.legislation_type.as_deref(), Some("asp"));
        assert_eq!(parsed.number.as_deref(), Some("4"));
    }

    #[test]
    fn test_host_only_uri_is_absent() {
        assert_eq!(
            parse_legislation_uri("http://www.legislation.gov.uk/ukpga"),
            LegislationUri::default()
        );
        assert_eq!(parse_legislation_uri(""), LegislationUri::default());
    }

    #[test]
    fn test_two_segments_is_absent() {
        assert_eq!(parse_legislation_uri("ukpga/2020"), LegislationUri::default());
    }

    #[test]
    fn test_parse_year_rejects_other_lengths() {
        assert_eq!(parse_year("202"), None);
        assert_eq!(parse_year("20201"), None);
        assert_eq!(parse_year("-202"), None);
        assert_eq!(parse_year(""), None);
    }
}
