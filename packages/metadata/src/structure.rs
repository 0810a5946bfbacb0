//! Lightweight structure check for legislation documents.
//!
//! Not a schema validation: it only reports what extraction will have to
//! fall back on, so callers can flag unusual documents.

use roxmltree::Document;
use serde::Serialize;

use crate::config::{LEGISLATION_NAMESPACES, METADATA_NAMESPACES};
use crate::namespace::{declared_namespaces, DeclaredNamespace, NamespaceResolver, NamespaceRole};
use crate::xml::find_descendants;

/// Metadata elements every well-formed CLML document is expected to carry.
pub const EXPECTED_METADATA_ELEMENTS: &[&str] = &[
    "DocumentMainType",
    "DocumentStatus",
    "DocumentCategory",
    "Year",
    "Number",
];

/// Outcome of [`check_structure`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureReport {
    /// Namespaces declared on the root element.
    pub namespaces: Vec<DeclaredNamespace>,

    /// Human-readable findings, empty for a conforming document.
    pub warnings: Vec<String>,
}

impl StructureReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Check a parsed document for the expected namespaces and metadata elements.
pub fn check_structure(doc: &Document<'_>) -> StructureReport {
    let namespaces = declared_namespaces(doc);
    let mut warnings = Vec::new();

    let expected: [(&str, &[&str]); 2] = [
        ("legislation", LEGISLATION_NAMESPACES),
        ("metadata", METADATA_NAMESPACES),
    ];
    for (label, uris) in expected {
        if !namespaces.iter().any(|ns| uris.contains(&ns.uri.as_str())) {
            warnings.push(format!("Expected {label} namespace {} not declared", uris[0]));
        }
    }

    let resolver = NamespaceResolver::clml();
    let root = doc.root_element();
    for element in EXPECTED_METADATA_ELEMENTS {
        let found = find_descendants(&resolver, root, NamespaceRole::Metadata, element)
            .next()
            .is_some();
        if !found {
            warnings.push(format!("Metadata element {element} not found"));
        }
    }

    for warning in &warnings {
        tracing::debug!(%warning, "Structure check");
    }

    StructureReport {
        namespaces,
        warnings,
    }
}
