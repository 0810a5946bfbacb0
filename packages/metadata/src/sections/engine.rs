//! Provision enumeration over a parsed tree.

use std::collections::HashSet;

use roxmltree::{Document, Node};

use super::config::{create_clml_vocabulary, SCHEDULE_TAG};
use super::inference::{infer_title, InferenceContext};
use super::registry::ProvisionVocabulary;
use super::types::{EnumerationMode, ProvisionSpec};
use crate::config::ExtractionConfig;
use crate::namespace::{NamespaceResolver, NamespaceRole};
use crate::types::SectionRecord;
use crate::xml::{
    collect_text, collect_text_where, find_child, find_descendants, first_attribute, get_tag_name,
};

/// Walks a document and produces one [`SectionRecord`] per provision.
///
/// Vocabulary entries are processed in priority order; within an entry,
/// matches come in document order. Nested provisions each get a record.
pub struct SectionEnumerator {
    vocabulary: ProvisionVocabulary,
    resolver: NamespaceResolver,
    config: ExtractionConfig,
}

impl SectionEnumerator {
    /// Create an enumerator from its parts.
    #[must_use]
    pub fn new(
        vocabulary: ProvisionVocabulary,
        resolver: NamespaceResolver,
        config: ExtractionConfig,
    ) -> Self {
        Self {
            vocabulary,
            resolver,
            config,
        }
    }

    /// Create an enumerator for CLML documents with the given options.
    #[must_use]
    pub fn with_config(config: ExtractionConfig) -> Self {
        Self::new(create_clml_vocabulary(), NamespaceResolver::clml(), config)
    }

    /// Get a reference to the vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &ProvisionVocabulary {
        &self.vocabulary
    }

    /// Every provision, with full-length titles.
    pub fn enumerate_sections(&self, doc: &Document<'_>) -> Vec<SectionRecord> {
        self.enumerate(doc, EnumerationMode::Full)
    }

    /// The leading provisions with shortened inferred titles.
    pub fn key_sections(&self, doc: &Document<'_>) -> Vec<SectionRecord> {
        self.enumerate(doc, EnumerationMode::KeySections)
    }

    /// Enumerate provisions in the given mode.
    pub fn enumerate(&self, doc: &Document<'_>, mode: EnumerationMode) -> Vec<SectionRecord> {
        let (width, limit) = match mode {
            EnumerationMode::Full => (None, usize::MAX),
            EnumerationMode::KeySections => (
                Some(self.config.short_title_width),
                self.config.key_section_limit,
            ),
        };

        let mut seen = HashSet::new();
        let mut records = Vec::new();

        for spec in self.vocabulary.specs() {
            let matches = find_descendants(
                &self.resolver,
                doc.root_element(),
                NamespaceRole::LegislationCore,
                &spec.tag,
            );
            for node in matches {
                if self.config.dedupe_sections && !seen.insert(node.id()) {
                    continue;
                }
                if let Some(record) = self.build_record(node, spec, width) {
                    records.push(record);
                }
                if records.len() >= limit {
                    return records;
                }
            }
        }

        tracing::debug!(count = records.len(), ?mode, "Enumerated provisions");
        records
    }

    /// Count schedules anywhere in the document.
    pub fn count_schedules(&self, doc: &Document<'_>) -> usize {
        find_descendants(
            &self.resolver,
            doc.root_element(),
            NamespaceRole::LegislationCore,
            SCHEDULE_TAG,
        )
        .count()
    }

    fn build_record(
        &self,
        node: Node<'_, '_>,
        spec: &ProvisionSpec,
        width: Option<usize>,
    ) -> Option<SectionRecord> {
        let number = self.number(node, spec);
        let ctx = InferenceContext {
            resolver: &self.resolver,
            vocabulary: &self.vocabulary,
            spec,
            number: &number,
            width,
        };

        let title = match infer_title(node, &ctx) {
            Some((rule, title)) => {
                tracing::trace!(tag = %spec.tag, rule = rule.as_str(), "Title inferred");
                title
            }
            None if !number.is_empty() => format!("Section {number}"),
            None => {
                tracing::debug!(
                    tag = %spec.tag,
                    "Skipping provision with neither number nor title"
                );
                return None;
            }
        };

        let content = collect_text_where(node, |child| !self.is_label(node, child, spec));

        Some(SectionRecord {
            id: node.attribute("id").unwrap_or_default().to_string(),
            kind: get_tag_name(node).to_string(),
            number,
            title,
            content,
        })
    }

    /// Number from the first non-empty number child, else the number attribute.
    fn number(&self, node: Node<'_, '_>, spec: &ProvisionSpec) -> String {
        spec.number_sources
            .iter()
            .filter_map(|tag| find_child(&self.resolver, node, NamespaceRole::LegislationCore, tag))
            .map(collect_text)
            .find(|text| !text.is_empty())
            .or_else(|| {
                spec.number_attribute
                    .as_deref()
                    .and_then(|name| first_attribute(node, &[name]))
            })
            .unwrap_or_default()
    }

    /// Number and heading children are left out of the content.
    fn is_label<'a, 'input>(
        &self,
        node: Node<'a, 'input>,
        child: Node<'a, 'input>,
        spec: &ProvisionSpec,
    ) -> bool {
        if child.parent() != Some(node) {
            return false;
        }
        spec.number_sources
            .iter()
            .chain(spec.title_source.iter())
            .any(|tag| self.resolver.matches(child, NamespaceRole::LegislationCore, tag))
    }
}

impl Default for SectionEnumerator {
    fn default() -> Self {
        Self::with_config(ExtractionConfig::default())
    }
}
