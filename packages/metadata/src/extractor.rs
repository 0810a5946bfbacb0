//! Metadata record assembly.

use roxmltree::Document;

use crate::config::ExtractionConfig;
use crate::effects::EffectCollector;
use crate::error::Result;
use crate::fields::{create_clml_field_registry, Field, FieldExtractor};
use crate::namespace::NamespaceResolver;
use crate::sections::{create_clml_vocabulary, SectionEnumerator};
use crate::types::{MetadataRecord, SectionRecord};
use crate::xml::{parse_bytes, parse_document};

/// Turns legislation markup into a [`MetadataRecord`].
///
/// Only unparseable markup is an error. Everything after parsing degrades to
/// defaults: a document with no recognisable metadata still yields a record.
pub struct MetadataExtractor {
    fields: FieldExtractor,
    sections: SectionEnumerator,
    effects: EffectCollector,
}

impl MetadataExtractor {
    /// Create an extractor for CLML documents.
    ///
    /// # Errors
    /// Returns `InvalidConfig` when `config` fails validation.
    pub fn new(config: ExtractionConfig) -> Result<Self> {
        config.validate()?;
        let resolver = NamespaceResolver::clml();

        Ok(Self {
            fields: FieldExtractor::new(create_clml_field_registry(), resolver.clone()),
            sections: SectionEnumerator::new(create_clml_vocabulary(), resolver.clone(), config),
            effects: EffectCollector::new(resolver),
        })
    }

    /// Parse and extract from markup text.
    ///
    /// # Errors
    /// Returns `MalformedDocument` when the markup is not well-formed.
    pub fn extract(&self, xml: &str) -> Result<MetadataRecord> {
        let doc = parse_document(xml)?;
        Ok(self.extract_document(&doc))
    }

    /// Parse and extract from raw bytes.
    ///
    /// # Errors
    /// Returns `InvalidEncoding` for non-UTF-8 input and `MalformedDocument`
    /// when the markup is not well-formed.
    pub fn extract_bytes(&self, bytes: &[u8]) -> Result<MetadataRecord> {
        let doc = parse_bytes(bytes)?;
        Ok(self.extract_document(&doc))
    }

    /// Extract from an already parsed tree.
    pub fn extract_document(&self, doc: &Document<'_>) -> MetadataRecord {
        let sections = self.sections.enumerate_sections(doc);
        let record = self.assemble(doc, sections);

        tracing::debug!(
            title = %record.title,
            sections = record.sections_count,
            amendments = record.amendments.len(),
            "Extracted metadata"
        );
        record
    }

    /// Same as [`Self::extract_document`], but with the key-sections view.
    pub fn key_sections(&self, doc: &Document<'_>) -> MetadataRecord {
        let sections = self.sections.key_sections(doc);
        self.assemble(doc, sections)
    }

    fn assemble(&self, doc: &Document<'_>, sections: Vec<SectionRecord>) -> MetadataRecord {
        MetadataRecord {
            title: self.fields.text(doc, Field::Title),
            long_title: self.fields.text(doc, Field::LongTitle),
            year: self.fields.year(doc),
            document_uri: self.fields.text(doc, Field::DocumentUri),
            legislation_type: self.fields.text(doc, Field::LegislationType),
            legislation_number: self.fields.extract_field(doc, Field::Number),
            status: self.fields.extract_field(doc, Field::DocumentStatus),
            category: self.fields.extract_field(doc, Field::DocumentCategory),
            sections_count: sections.len(),
            sections,
            schedules_count: self.sections.count_schedules(doc),
            amendments: self.effects.collect_effects(doc),
        }
    }
}

impl Default for MetadataExtractor {
    fn default() -> Self {
        Self {
            fields: FieldExtractor::default(),
            sections: SectionEnumerator::default(),
            effects: EffectCollector::default(),
        }
    }
}

/// Extract a record with default options.
///
/// # Errors
/// Returns `MalformedDocument` when the markup is not well-formed.
///
/// # Examples
/// ```
/// use legislation_metadata::extract_metadata;
///
/// let record = extract_metadata("<Legislation/>").unwrap();
/// assert_eq!(record.title, "Unknown Title");
/// assert!(record.sections.is_empty());
/// assert!(record.amendments.is_empty());
/// ```
pub fn extract_metadata(xml: &str) -> Result<MetadataRecord> {
    MetadataExtractor::default().extract(xml)
}
