//! Types for the declarative field lookup tables.

use crate::namespace::NamespaceRole;

/// Metadata fields with known candidate locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    LongTitle,
    Year,
    Number,
    DocumentUri,
    LegislationType,
    DocumentStatus,
    DocumentCategory,
}

impl Field {
    /// All fields in a fixed order.
    pub const ALL: [Self; 8] = [
        Self::Title,
        Self::LongTitle,
        Self::Year,
        Self::Number,
        Self::DocumentUri,
        Self::LegislationType,
        Self::DocumentStatus,
        Self::DocumentCategory,
    ];

    /// Snake-case field name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::LongTitle => "long_title",
            Self::Year => "year",
            Self::Number => "legislation_number",
            Self::DocumentUri => "document_uri",
            Self::LegislationType => "legislation_type",
            Self::DocumentStatus => "status",
            Self::DocumentCategory => "category",
        }
    }

    /// Parse a snake-case field name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

/// Where the value of a resolved node comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource {
    /// All descendant text, whitespace-joined.
    Text,
    /// A named attribute.
    Attribute(String),
}

/// One historical location of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Namespace role every path segment must belong to.
    pub role: NamespaceRole,

    /// Slash-separated tag path (e.g. "TitleBlock/Title").
    pub path: String,

    pub source: ValueSource,
}

impl Candidate {
    /// Candidate read from the text of the node at `path`.
    #[must_use]
    pub fn text(role: NamespaceRole, path: impl Into<String>) -> Self {
        Self {
            role,
            path: path.into(),
            source: ValueSource::Text,
        }
    }

    /// Candidate read from attribute `name` of the node at `path`.
    #[must_use]
    pub fn attribute(
        role: NamespaceRole,
        path: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            role,
            path: path.into(),
            source: ValueSource::Attribute(name.into()),
        }
    }
}

/// Value used when no candidate yields text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldDefault {
    /// Empty string.
    Empty,
    /// No value at all.
    Absent,
    /// A fixed placeholder such as "Unknown Title".
    Sentinel(String),
}

/// Part of a `.../{type}/{year}/{number}` URI a field can be derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriPart {
    LegislationType,
    Number,
}

/// Declarative specification of how to find one field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub field: Field,

    /// Candidate locations in priority order - first non-empty match wins.
    pub candidates: Vec<Candidate>,

    /// Derive from the document URI when no candidate matches.
    pub uri_fallback: Option<UriPart>,

    pub default: FieldDefault,
}

impl FieldSpec {
    /// Create a spec with no candidates and an empty-string default.
    #[must_use]
    pub fn new(field: Field) -> Self {
        Self {
            field,
            candidates: Vec::new(),
            uri_fallback: None,
            default: FieldDefault::Empty,
        }
    }

    /// Append a candidate after the existing ones.
    #[must_use]
    pub fn with_candidate(mut self, candidate: Candidate) -> Self {
        self.candidates.push(candidate);
        self
    }

    /// Set the URI fallback.
    #[must_use]
    pub fn with_uri_fallback(mut self, part: UriPart) -> Self {
        self.uri_fallback = Some(part);
        self
    }

    /// Set the default.
    #[must_use]
    pub fn with_default(mut self, default: FieldDefault) -> Self {
        self.default = default;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.as_str()), Some(field));
        }
        assert_eq!(Field::from_name("bogus"), None);
    }

    #[test]
    fn test_field_spec_builder_keeps_order() {
        let spec = FieldSpec::new(Field::Title)
            .with_candidate(Candidate::text(NamespaceRole::DublinCore, "title"))
            .with_candidate(Candidate::text(NamespaceRole::LegislationCore, "Title"))
            .with_default(FieldDefault::Sentinel("Unknown Title".to_string()));

        assert_eq!(spec.candidates.len(), 2);
        assert_eq!(spec.candidates[0].role, NamespaceRole::DublinCore);
        assert_eq!(spec.candidates[1].path, "Title");
        assert_eq!(spec.default, FieldDefault::Sentinel("Unknown Title".to_string()));
        assert!(spec.uri_fallback.is_none());
    }

    #[test]
    fn test_attribute_candidate() {
        let candidate = Candidate::attribute(NamespaceRole::Metadata, "Year", "Value");
        assert_eq!(candidate.source, ValueSource::Attribute("Value".to_string()));
    }
}
