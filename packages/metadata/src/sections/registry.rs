//! Ordered vocabulary of provision specifications.

use super::types::ProvisionSpec;

/// Provision specifications in priority order.
///
/// Unlike a lookup table, order matters here: the enumerator walks the
/// entries front to back, and the same tag may appear more than once.
#[derive(Debug, Clone)]
pub struct ProvisionVocabulary {
    specs: Vec<ProvisionSpec>,
}

impl ProvisionVocabulary {
    /// Create a new empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self { specs: Vec::new() }
    }

    /// Append a specification after the existing ones.
    pub fn register(&mut self, spec: ProvisionSpec) {
        self.specs.push(spec);
    }

    /// Specifications in priority order.
    pub fn specs(&self) -> impl Iterator<Item = &ProvisionSpec> {
        self.specs.iter()
    }

    /// Get the first specification registered for a tag.
    #[must_use]
    pub fn get_spec(&self, tag: &str) -> Option<&ProvisionSpec> {
        self.specs.iter().find(|spec| spec.tag == tag)
    }

    /// Check if a tag is a provision in this vocabulary.
    #[must_use]
    pub fn is_provision(&self, tag: &str) -> bool {
        self.get_spec(tag).is_some()
    }

    /// Number of registered specifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl Default for ProvisionVocabulary {
    fn default() -> Self {
        Self::new()
    }
}
