//! Helpers for navigating parsed legislation trees.
//!
//! Every lookup goes through [`NamespaceResolver::matches`], so the same
//! call finds `leg:Title`, an unqualified `Title` in an old document, or a
//! `Title` under a namespace URI nobody registered.

use roxmltree::Node;
use unicode_normalization::UnicodeNormalization;

use crate::namespace::{NamespaceResolver, NamespaceRole};

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use legislation_metadata::xml::get_tag_name;
///
/// let xml = r#"<leg:P1 xmlns:leg="http://www.legislation.gov.uk/namespaces/legislation"/>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(get_tag_name(doc.root_element()), "P1");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Find the first child element `tag` of `role`.
pub fn find_child<'a, 'input>(
    resolver: &NamespaceResolver,
    node: Node<'a, 'input>,
    role: NamespaceRole,
    tag: &str,
) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| resolver.matches(*child, role, tag))
}

/// Find all descendant elements `tag` of `role` in document order.
///
/// The starting node itself is included when it matches.
pub fn find_descendants<'r, 'a: 'r, 'input: 'a>(
    resolver: &'r NamespaceResolver,
    node: Node<'a, 'input>,
    role: NamespaceRole,
    tag: &'r str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'r {
    node.descendants()
        .filter(move |n| resolver.matches(*n, role, tag))
}

/// Find an element matching a slash-separated path of tag names.
///
/// The first segment may match anywhere below (or at) `node`; each later
/// segment must be a direct child. Candidates for the first segment are tried
/// in document order until the whole path resolves.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use legislation_metadata::namespace::{NamespaceResolver, NamespaceRole};
/// use legislation_metadata::xml::find_by_path;
///
/// let xml = r#"<Legislation><Primary><TitleBlock><Title>Test Act</Title></TitleBlock></Primary></Legislation>"#;
/// let doc = Document::parse(xml).unwrap();
/// let resolver = NamespaceResolver::clml();
///
/// let title = find_by_path(&resolver, doc.root_element(), NamespaceRole::LegislationCore, "TitleBlock/Title");
/// assert_eq!(title.unwrap().text(), Some("Test Act"));
/// ```
pub fn find_by_path<'a, 'input>(
    resolver: &NamespaceResolver,
    node: Node<'a, 'input>,
    role: NamespaceRole,
    path: &str,
) -> Option<Node<'a, 'input>> {
    let mut parts = path.split('/').filter(|p| !p.is_empty());
    let first = parts.next()?;
    let rest: Vec<&str> = parts.collect();

    find_descendants(resolver, node, role, first).find_map(|start| {
        rest.iter()
            .try_fold(start, |current, part| find_child(resolver, current, role, part))
    })
}

/// Get the direct text content of a node, trimmed.
pub fn get_text(node: Node<'_, '_>) -> String {
    node.text()
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Concatenate all descendant text, whitespace-joined and NFC-normalized.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use legislation_metadata::xml::collect_text;
///
/// let xml = "<Title>Coronavirus\n   <Emphasis>Act</Emphasis> 2020 </Title>";
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(collect_text(doc.root_element()), "Coronavirus Act 2020");
/// ```
pub fn collect_text(node: Node<'_, '_>) -> String {
    collect_text_where(node, |_| true)
}

/// Like [`collect_text`], but does not descend into elements rejected by `keep`.
///
/// `keep` is not applied to `node` itself.
pub fn collect_text_where<'a, 'input, F>(node: Node<'a, 'input>, keep: F) -> String
where
    F: Fn(Node<'a, 'input>) -> bool,
{
    let mut words: Vec<String> = Vec::new();
    push_words(node, &keep, &mut words);
    words.join(" ").nfc().collect()
}

fn push_words<'a, 'input, F>(node: Node<'a, 'input>, keep: &F, words: &mut Vec<String>)
where
    F: Fn(Node<'a, 'input>) -> bool,
{
    for child in node.children() {
        if child.is_text() {
            if let Some(text) = child.text() {
                words.extend(text.split_whitespace().map(str::to_string));
            }
        } else if child.is_element() && keep(child) {
            push_words(child, keep, words);
        }
    }
}

/// Text nodes below `node` in document order, each trimmed, empty ones skipped.
pub fn text_nodes(node: Node<'_, '_>) -> Vec<String> {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .map(|t| t.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|t| !t.is_empty())
        .collect()
}

/// Get the first non-empty trimmed value among several attribute names.
pub fn first_attribute(node: Node<'_, '_>, names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| node.attribute(*name))
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(str::to_string)
}
