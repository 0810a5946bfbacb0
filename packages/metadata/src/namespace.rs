//! Namespace roles and namespace-tolerant tag matching.
//!
//! The legislation schema family has moved its namespace URIs around over
//! the years, and older documents sometimes carry no namespace at all. Lookups
//! therefore go through a logical [`NamespaceRole`] rather than a concrete URI.

use std::collections::HashMap;

use roxmltree::{Document, Node};
use serde::Serialize;

use crate::config::{
    ATOM_NAMESPACES, DUBLIN_CORE_NAMESPACES, LEGISLATION_NAMESPACES, METADATA_NAMESPACES,
};

/// XML's built-in namespace, reported by the parser on every element.
const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Logical namespace categories used by the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamespaceRole {
    /// Body markup: provisions, titles, numbers.
    LegislationCore,
    /// Document metadata block (`ukm:`).
    Metadata,
    /// Atom feeds and links.
    AtomFeed,
    /// Dublin Core elements and terms.
    DublinCore,
}

impl NamespaceRole {
    /// All roles in a fixed order.
    pub const ALL: [Self; 4] = [
        Self::LegislationCore,
        Self::Metadata,
        Self::AtomFeed,
        Self::DublinCore,
    ];

    /// Kebab-case role name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LegislationCore => "legislation-core",
            Self::Metadata => "metadata",
            Self::AtomFeed => "atom-feed",
            Self::DublinCore => "dublin-core",
        }
    }

    /// Parse a kebab-case role name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == name)
    }
}

/// Mapping from namespace role to the URIs valid for it.
#[derive(Debug, Clone)]
pub struct NamespaceResolver {
    roles: HashMap<NamespaceRole, Vec<String>>,
}

impl NamespaceResolver {
    /// Create a resolver with no registered namespaces.
    #[must_use]
    pub fn new() -> Self {
        Self {
            roles: HashMap::new(),
        }
    }

    /// Create a resolver with every known legislation namespace registered.
    #[must_use]
    pub fn clml() -> Self {
        let mut resolver = Self::new();
        let known: [(NamespaceRole, &[&str]); 4] = [
            (NamespaceRole::LegislationCore, LEGISLATION_NAMESPACES),
            (NamespaceRole::Metadata, METADATA_NAMESPACES),
            (NamespaceRole::AtomFeed, ATOM_NAMESPACES),
            (NamespaceRole::DublinCore, DUBLIN_CORE_NAMESPACES),
        ];
        for (role, uris) in known {
            for uri in uris {
                resolver.register(role, *uri);
            }
        }
        resolver
    }

    /// Register an additional URI for a role.
    pub fn register(&mut self, role: NamespaceRole, uri: impl Into<String>) {
        let uri = uri.into();
        let uris = self.roles.entry(role).or_default();
        if !uris.contains(&uri) {
            uris.push(uri);
        }
    }

    /// URIs valid for a role, in registration order. Empty if none.
    #[must_use]
    pub fn resolve(&self, role: NamespaceRole) -> &[String] {
        self.roles.get(&role).map(Vec::as_slice).unwrap_or_default()
    }

    /// URIs for a role given by name. Unknown names resolve to nothing.
    ///
    /// # Examples
    /// ```
    /// use legislation_metadata::namespace::NamespaceResolver;
    ///
    /// let resolver = NamespaceResolver::clml();
    /// assert!(!resolver.resolve_name("metadata").is_empty());
    /// assert!(resolver.resolve_name("no-such-role").is_empty());
    /// ```
    #[must_use]
    pub fn resolve_name(&self, name: &str) -> &[String] {
        NamespaceRole::from_name(name)
            .map(|role| self.resolve(role))
            .unwrap_or_default()
    }

    /// Role that a namespace URI belongs to, if any.
    #[must_use]
    pub fn role_of(&self, uri: &str) -> Option<NamespaceRole> {
        NamespaceRole::ALL
            .into_iter()
            .find(|role| self.resolve(*role).iter().any(|known| known == uri))
    }

    /// Check whether a node is the `local_name` element of `role`.
    ///
    /// A node in a recognised namespace must belong to `role`. A node with no
    /// namespace, or one nobody registered, is matched on local name alone.
    pub fn matches(&self, node: Node<'_, '_>, role: NamespaceRole, local_name: &str) -> bool {
        if !node.is_element() || node.tag_name().name() != local_name {
            return false;
        }

        match node.tag_name().namespace().and_then(|ns| self.role_of(ns)) {
            Some(found) => found == role,
            None => {
                if let Some(ns) = node.tag_name().namespace() {
                    tracing::trace!(
                        namespace = ns,
                        tag = local_name,
                        "Unrecognised namespace, matching on local name"
                    );
                }
                true
            }
        }
    }
}

impl Default for NamespaceResolver {
    fn default() -> Self {
        Self::clml()
    }
}

/// A namespace declared on the document root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeclaredNamespace {
    /// Prefix, `None` for the default namespace.
    pub prefix: Option<String>,
    pub uri: String,
}

/// Namespaces in scope on the root element, excluding the implicit `xml` one.
pub fn declared_namespaces(doc: &Document<'_>) -> Vec<DeclaredNamespace> {
    doc.root_element()
        .namespaces()
        .filter(|ns| ns.uri() != XML_NAMESPACE)
        .map(|ns| DeclaredNamespace {
            prefix: ns.name().map(str::to_string),
            uri: ns.uri().to_string(),
        })
        .collect()
}
