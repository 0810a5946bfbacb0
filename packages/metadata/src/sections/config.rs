//! Provision vocabulary for CLML documents.

use super::registry::ProvisionVocabulary;
use super::types::ProvisionSpec;

/// Tag of schedule elements, counted but not enumerated.
pub const SCHEDULE_TAG: &str = "Schedule";

/// Create the provision vocabulary for CLML documents.
///
/// Entries run from finest numbered granularity to coarse structure:
///
/// ```text
/// Part (Number, Title)
/// └── Chapter (Number, Title)
///     └── P1group (Title)
///         └── P1 (Pnumber)          section
///             └── P1para/Text
///                 └── P2 (Pnumber)  subsection
///                     └── P3        paragraph
/// ```
///
/// `Section` covers documents that use a generic section element instead
/// of the P1 family.
#[must_use]
pub fn create_clml_vocabulary() -> ProvisionVocabulary {
    let mut vocabulary = ProvisionVocabulary::new();

    for (tag, group) in [("P1", "P1group"), ("P2", "P2group"), ("P3", "P3group")] {
        vocabulary.register(numbered(tag).with_group_tag(group));
    }
    for tag in ["Section", "Part", "Chapter"] {
        vocabulary.register(numbered(tag));
    }

    vocabulary
}

fn numbered(tag: &str) -> ProvisionSpec {
    ProvisionSpec::new(tag)
        .with_number_sources(["Pnumber", "Number"])
        .with_number_attribute("id")
        .with_title_source("Title")
        .with_content_tags(["Text"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_priority_order() {
        let vocabulary = create_clml_vocabulary();
        let tags: Vec<_> = vocabulary.specs().map(|s| s.tag.as_str()).collect();
        assert_eq!(tags, vec!["P1", "P2", "P3", "Section", "Part", "Chapter"]);
    }

    #[test]
    fn test_p1_spec() {
        let vocabulary = create_clml_vocabulary();
        let p1 = vocabulary.get_spec("P1").unwrap();
        assert_eq!(p1.number_sources, vec!["Pnumber", "Number"]);
        assert_eq!(p1.number_attribute.as_deref(), Some("id"));
        assert_eq!(p1.group_tag.as_deref(), Some("P1group"));
    }

    #[test]
    fn test_structural_specs_have_no_group() {
        let vocabulary = create_clml_vocabulary();
        assert!(vocabulary.get_spec("Part").unwrap().group_tag.is_none());
        assert!(!vocabulary.is_provision(SCHEDULE_TAG));
    }
}
