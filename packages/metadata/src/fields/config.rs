//! Candidate locations for legislation metadata fields.

use super::registry::FieldRegistry;
use super::types::{Candidate, Field, FieldDefault, FieldSpec, UriPart};
use crate::config::UNKNOWN_TITLE;
use crate::namespace::NamespaceRole::{AtomFeed, DublinCore, LegislationCore, Metadata};

/// Create the field registry for CLML documents.
///
/// Candidates follow the locations each datum has occupied across schema
/// vintages:
///
/// ```text
/// <Legislation DocumentURI=".../ukpga/2020/7" IdURI=".../id/ukpga/2020/7">
/// ├── ukm:Metadata
/// │   ├── dc:title, dc:description, dc:identifier
/// │   ├── ukm:DocumentClassification
/// │   │   ├── ukm:DocumentCategory Value="primary"
/// │   │   ├── ukm:DocumentMainType Value="UnitedKingdomPublicGeneralAct"
/// │   │   └── ukm:DocumentStatus Value="revised"
/// │   ├── ukm:Year Value="2020"
/// │   └── ukm:Number Value="7"
/// └── Primary
///     └── PrimaryPrelims
///         ├── Title / TitleBlock/Title
///         └── LongTitle
/// ```
#[must_use]
pub fn create_clml_field_registry() -> FieldRegistry {
    let mut registry = FieldRegistry::new();

    registry.register(
        FieldSpec::new(Field::Title)
            .with_candidate(Candidate::text(DublinCore, "title"))
            .with_candidate(Candidate::text(LegislationCore, "Title"))
            .with_candidate(Candidate::text(LegislationCore, "TitleBlock/Title"))
            .with_default(FieldDefault::Sentinel(UNKNOWN_TITLE.to_string())),
    );

    registry.register(
        FieldSpec::new(Field::LongTitle)
            .with_candidate(Candidate::text(LegislationCore, "LongTitle"))
            .with_candidate(Candidate::text(DublinCore, "description")),
    );

    registry.register(
        FieldSpec::new(Field::Year)
            .with_candidate(Candidate::attribute(Metadata, "Year", "Value"))
            .with_candidate(Candidate::text(LegislationCore, "Year"))
            .with_default(FieldDefault::Absent),
    );

    registry.register(
        FieldSpec::new(Field::Number)
            .with_candidate(Candidate::attribute(Metadata, "Number", "Value"))
            .with_uri_fallback(UriPart::Number)
            .with_default(FieldDefault::Absent),
    );

    registry.register(
        FieldSpec::new(Field::DocumentUri)
            .with_candidate(Candidate::attribute(LegislationCore, "Legislation", "DocumentURI"))
            .with_candidate(Candidate::attribute(LegislationCore, "Legislation", "IdURI"))
            .with_candidate(Candidate::text(AtomFeed, "id"))
            .with_candidate(Candidate::text(DublinCore, "identifier")),
    );

    registry.register(
        FieldSpec::new(Field::LegislationType)
            .with_candidate(Candidate::attribute(Metadata, "DocumentMainType", "Value"))
            .with_uri_fallback(UriPart::LegislationType),
    );

    registry.register(
        FieldSpec::new(Field::DocumentStatus)
            .with_candidate(Candidate::attribute(Metadata, "DocumentStatus", "Value"))
            .with_default(FieldDefault::Absent),
    );

    registry.register(
        FieldSpec::new(Field::DocumentCategory)
            .with_candidate(Candidate::attribute(Metadata, "DocumentCategory", "Value"))
            .with_default(FieldDefault::Absent),
    );

    registry
}
