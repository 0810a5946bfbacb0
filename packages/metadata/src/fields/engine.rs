//! Generic resolver that evaluates field lookup tables against a tree.

use roxmltree::Document;

use super::registry::FieldRegistry;
use super::types::{Candidate, Field, FieldDefault, UriPart, ValueSource};
use super::uri::{parse_legislation_uri, parse_year};
use crate::namespace::NamespaceResolver;
use crate::xml::{collect_text, find_by_path};

/// Resolves metadata fields by trying each registered candidate in order.
///
/// Extraction never fails: a field nobody can find resolves to its
/// documented default.
pub struct FieldExtractor {
    registry: FieldRegistry,
    resolver: NamespaceResolver,
}

impl FieldExtractor {
    /// Create an extractor from a registry and a namespace resolver.
    #[must_use]
    pub fn new(registry: FieldRegistry, resolver: NamespaceResolver) -> Self {
        Self { registry, resolver }
    }

    /// Get a reference to the underlying registry.
    #[must_use]
    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    /// Evaluate a single candidate.
    ///
    /// Returns the trimmed value when the node exists and the value is non-empty.
    pub fn evaluate(&self, doc: &Document<'_>, candidate: &Candidate) -> Option<String> {
        let node = find_by_path(
            &self.resolver,
            doc.root_element(),
            candidate.role,
            &candidate.path,
        )?;

        let value = match &candidate.source {
            ValueSource::Text => collect_text(node),
            ValueSource::Attribute(name) => node
                .attribute(name.as_str())
                .map(|v| v.trim().to_string())
                .unwrap_or_default(),
        };

        (!value.is_empty()).then_some(value)
    }

    /// Resolve a field without applying its default.
    ///
    /// Candidates are tried in priority order; the first non-empty value wins.
    /// Fields with a URI fallback are then derived from the document URI.
    pub fn resolve(&self, doc: &Document<'_>, field: Field) -> Option<String> {
        let spec = self.registry.get_spec(field)?;

        for (index, candidate) in spec.candidates.iter().enumerate() {
            if let Some(value) = self.evaluate(doc, candidate) {
                tracing::debug!(
                    field = field.as_str(),
                    candidate = index,
                    path = %candidate.path,
                    "Field resolved"
                );
                return Some(value);
            }
        }

        let part = spec.uri_fallback?;
        if field == Field::DocumentUri {
            return None;
        }

        let uri = self.resolve(doc, Field::DocumentUri)?;
        let parsed = parse_legislation_uri(&uri);
        let derived = match part {
            UriPart::LegislationType => parsed.legislation_type,
            UriPart::Number => parsed.number,
        };
        if derived.is_some() {
            tracing::debug!(field = field.as_str(), uri = %uri, "Field derived from document URI");
        }
        derived
    }

    /// Resolve a field, falling back to its documented default.
    ///
    /// `Empty` defaults give `Some("")`, `Absent` defaults and unregistered
    /// fields give `None`.
    pub fn extract_field(&self, doc: &Document<'_>, field: Field) -> Option<String> {
        if let Some(value) = self.resolve(doc, field) {
            return Some(value);
        }

        match &self.registry.get_spec(field)?.default {
            FieldDefault::Empty => Some(String::new()),
            FieldDefault::Absent => None,
            FieldDefault::Sentinel(sentinel) => Some(sentinel.clone()),
        }
    }

    /// Resolve a string-shaped field, empty when absent.
    pub fn text(&self, doc: &Document<'_>, field: Field) -> String {
        self.extract_field(doc, field).unwrap_or_default()
    }

    /// Resolve the publication year.
    ///
    /// Non-numeric values are treated as absent.
    pub fn year(&self, doc: &Document<'_>) -> Option<i32> {
        let raw = self.extract_field(doc, Field::Year)?;
        let year = parse_year(&raw);
        if year.is_none() {
            tracing::warn!(value = %raw, "Ignoring unparseable year");
        }
        year
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new(super::create_clml_field_registry(), NamespaceResolver::clml())
    }
}
