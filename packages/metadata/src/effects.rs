//! Unapplied effect (amendment) collection.
//!
//! Effects are attribute-encoded in the metadata block:
//!
//! ```text
//! ukm:Metadata
//! └── ukm:UnappliedEffects
//!     └── ukm:UnappliedEffect Id="key-..." Type="inserted"
//!             AffectingURI=".../ukpga/2021/3" AffectedURI=".../ukpga/2020/7"
//!             AffectedProvisions="s. 2(1)"
//! ```

use roxmltree::{Document, Node};

use crate::namespace::{NamespaceResolver, NamespaceRole};
use crate::types::AmendmentRecord;
use crate::xml::{find_descendants, first_attribute};

/// Tag of an effect node.
pub const EFFECT_TAG: &str = "UnappliedEffect";

/// Tag of the metadata block effects live under.
pub const METADATA_BLOCK_TAG: &str = "Metadata";

const ID_ATTRIBUTES: &[&str] = &["Id", "EffectId"];
const TYPE_ATTRIBUTES: &[&str] = &["Type"];
const AFFECTING_ATTRIBUTES: &[&str] = &["AffectingURI"];
const AFFECTED_ATTRIBUTES: &[&str] = &["AffectedURI"];
const PROVISIONS_ATTRIBUTES: &[&str] = &["AffectedProvisions"];
const DESCRIPTION_ATTRIBUTES: &[&str] = &["Description", "Notes"];

/// Collects amendment records from effect nodes.
#[derive(Debug, Clone, Default)]
pub struct EffectCollector {
    resolver: NamespaceResolver,
}

impl EffectCollector {
    #[must_use]
    pub fn new(resolver: NamespaceResolver) -> Self {
        Self { resolver }
    }

    /// Collect every effect in document order.
    ///
    /// Effects are looked up under the metadata blocks; a document without a
    /// metadata block is searched as a whole. Missing attributes become empty
    /// strings and never cause a record to be skipped.
    pub fn collect_effects(&self, doc: &Document<'_>) -> Vec<AmendmentRecord> {
        let root = doc.root_element();
        let blocks: Vec<Node<'_, '_>> =
            find_descendants(&self.resolver, root, NamespaceRole::Metadata, METADATA_BLOCK_TAG)
                .collect();
        let scopes = if blocks.is_empty() { vec![root] } else { blocks };

        let mut records = Vec::new();
        for scope in scopes {
            let effects =
                find_descendants(&self.resolver, scope, NamespaceRole::Metadata, EFFECT_TAG);
            records.extend(effects.map(to_record));
        }

        tracing::debug!(count = records.len(), "Collected effects");
        records
    }
}

fn to_record(node: Node<'_, '_>) -> AmendmentRecord {
    let attr = |names: &[&str]| first_attribute(node, names).unwrap_or_default();

    AmendmentRecord {
        id: attr(ID_ATTRIBUTES),
        kind: attr(TYPE_ATTRIBUTES),
        affecting_uri: attr(AFFECTING_ATTRIBUTES),
        affected_uri: attr(AFFECTED_ATTRIBUTES),
        affected_provisions: attr(PROVISIONS_ATTRIBUTES),
        description: attr(DESCRIPTION_ATTRIBUTES),
    }
}

/// Collect effects with the default CLML namespaces.
pub fn collect_effects(doc: &Document<'_>) -> Vec<AmendmentRecord> {
    EffectCollector::default().collect_effects(doc)
}
