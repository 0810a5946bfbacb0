//! Types for the section enumerator.

/// Declarative specification of a provision-like element.
///
/// Defines where an element keeps its number, heading, and running text.
#[derive(Debug, Clone)]
pub struct ProvisionSpec {
    /// XML tag name (without namespace).
    pub tag: String,

    /// Child tags carrying the number, in priority order.
    ///
    /// Examples: "Pnumber" for P1/P2/P3, "Number" for Part and Chapter.
    pub number_sources: Vec<String>,

    /// Attribute used as the number when no number child has text.
    pub number_attribute: Option<String>,

    /// Child tag carrying the heading (e.g. "Title").
    pub title_source: Option<String>,

    /// Wrapper element whose heading applies to this element (e.g. "P1group").
    pub group_tag: Option<String>,

    /// Tags holding running text (e.g. ["Text"]).
    pub content_tags: Vec<String>,
}

impl ProvisionSpec {
    /// Create a new provision specification.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            number_sources: Vec::new(),
            number_attribute: None,
            title_source: None,
            group_tag: None,
            content_tags: Vec::new(),
        }
    }

    /// Set the number child tags.
    #[must_use]
    pub fn with_number_sources(
        mut self,
        tags: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.number_sources = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the number attribute.
    #[must_use]
    pub fn with_number_attribute(mut self, name: impl Into<String>) -> Self {
        self.number_attribute = Some(name.into());
        self
    }

    /// Set the heading child tag.
    #[must_use]
    pub fn with_title_source(mut self, tag: impl Into<String>) -> Self {
        self.title_source = Some(tag.into());
        self
    }

    /// Set the heading group wrapper.
    #[must_use]
    pub fn with_group_tag(mut self, tag: impl Into<String>) -> Self {
        self.group_tag = Some(tag.into());
        self
    }

    /// Set the running-text tags.
    #[must_use]
    pub fn with_content_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.content_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `tag` is one of this element's number children.
    #[must_use]
    pub fn is_number_source(&self, tag: &str) -> bool {
        self.number_sources.iter().any(|t| t == tag)
    }

    /// Whether `tag` is this element's heading child.
    #[must_use]
    pub fn is_title_source(&self, tag: &str) -> bool {
        self.title_source.as_deref() == Some(tag)
    }
}

/// How much the enumerator returns and how titles are shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumerationMode {
    /// Every match, full-length titles and content.
    #[default]
    Full,
    /// At most the configured number of records, inferred titles shortened.
    KeySections,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provision_spec_builder() {
        let spec = ProvisionSpec::new("P1")
            .with_number_sources(["Pnumber", "Number"])
            .with_number_attribute("id")
            .with_title_source("Title")
            .with_group_tag("P1group")
            .with_content_tags(["Text"]);

        assert_eq!(spec.tag, "P1");
        assert_eq!(spec.number_sources, vec!["Pnumber", "Number"]);
        assert_eq!(spec.number_attribute.as_deref(), Some("id"));
        assert!(spec.is_title_source("Title"));
        assert!(spec.is_number_source("Number"));
        assert!(!spec.is_number_source("Title"));
        assert_eq!(spec.group_tag.as_deref(), Some("P1group"));
        assert_eq!(spec.content_tags, vec!["Text"]);
    }

    #[test]
    fn test_default_mode_is_full() {
        assert_eq!(EnumerationMode::default(), EnumerationMode::Full);
    }
}
