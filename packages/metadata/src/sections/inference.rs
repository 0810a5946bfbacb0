//! Title inference for provisions.
//!
//! Legislation mixes explicit headings with headings implied by the text, and
//! older documents often have neither. The rules below are tried in order
//! until one yields a usable title.

use roxmltree::Node;

use super::registry::ProvisionVocabulary;
use super::types::ProvisionSpec;
use crate::config::MIN_SCAN_TEXT_LEN;
use crate::namespace::{NamespaceResolver, NamespaceRole};
use crate::text::{is_placeholder, lead_sentence, truncate_with_ellipsis};
use crate::xml::{collect_text, find_child, get_tag_name, text_nodes};

/// Everything a rule needs besides the node itself.
#[derive(Debug, Clone, Copy)]
pub struct InferenceContext<'c> {
    pub resolver: &'c NamespaceResolver,
    pub vocabulary: &'c ProvisionVocabulary,
    pub spec: &'c ProvisionSpec,

    /// Number already resolved for the node; never reused as its title.
    pub number: &'c str,

    /// Truncation width for text-derived titles, `None` for full length.
    pub width: Option<usize>,
}

/// One step of the title inference chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleRule {
    /// Text of the heading child, or of the enclosing group's heading.
    Heading,
    /// First sentence of the provision's own running text.
    LeadText,
    /// Summary naming the nested provisions when there is no own text.
    SubProvisionSummary,
    /// First substantial text anywhere below the node.
    DescendantScan,
}

/// Inference rules in the order they are tried.
pub const TITLE_RULES: &[TitleRule] = &[
    TitleRule::Heading,
    TitleRule::LeadText,
    TitleRule::SubProvisionSummary,
    TitleRule::DescendantScan,
];

impl TitleRule {
    /// Rule name for logging.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Heading => "heading",
            Self::LeadText => "lead_text",
            Self::SubProvisionSummary => "sub_provision_summary",
            Self::DescendantScan => "descendant_scan",
        }
    }

    /// Apply this rule. Empty and placeholder results count as no result.
    pub fn apply(&self, node: Node<'_, '_>, ctx: &InferenceContext<'_>) -> Option<String> {
        let title = match self {
            Self::Heading => heading(node, ctx),
            Self::LeadText => lead_text(node, ctx),
            Self::SubProvisionSummary => sub_provision_summary(node, ctx),
            Self::DescendantScan => descendant_scan(node, ctx),
        }?;

        (!title.is_empty() && !is_placeholder(&title)).then_some(title)
    }
}

/// Run [`TITLE_RULES`] in order and return the first title with its rule.
pub fn infer_title(node: Node<'_, '_>, ctx: &InferenceContext<'_>) -> Option<(TitleRule, String)> {
    TITLE_RULES
        .iter()
        .find_map(|rule| rule.apply(node, ctx).map(|title| (*rule, title)))
}

/// Heading child text, falling back to the enclosing group's heading.
fn heading(node: Node<'_, '_>, ctx: &InferenceContext<'_>) -> Option<String> {
    let tag = ctx.spec.title_source.as_deref()?;

    let own = find_child(ctx.resolver, node, NamespaceRole::LegislationCore, tag)
        .map(collect_text)
        .filter(|text| !text.is_empty());
    if own.is_some() {
        return own;
    }

    let group = ctx.spec.group_tag.as_deref()?;
    let parent = node
        .parent_element()
        .filter(|p| ctx.resolver.matches(*p, NamespaceRole::LegislationCore, group))?;
    find_child(ctx.resolver, parent, NamespaceRole::LegislationCore, tag).map(collect_text)
}

fn lead_text(node: Node<'_, '_>, ctx: &InferenceContext<'_>) -> Option<String> {
    node.descendants()
        .skip(1)
        .filter(|d| {
            ctx.spec
                .content_tags
                .iter()
                .any(|tag| ctx.resolver.matches(*d, NamespaceRole::LegislationCore, tag))
        })
        .filter(|d| owning_provision(*d, ctx) == Some(node))
        .map(collect_text)
        .find(|text| !text.is_empty() && !is_placeholder(text))
        .map(|text| lead_sentence(&text, ctx.width))
}

fn sub_provision_summary(node: Node<'_, '_>, ctx: &InferenceContext<'_>) -> Option<String> {
    let children: Vec<_> = node
        .descendants()
        .skip(1)
        .filter(|d| is_provision(*d, ctx) && owning_provision(*d, ctx) == Some(node))
        .collect();
    if children.is_empty() {
        return None;
    }

    let mut tags: Vec<&str> = Vec::new();
    for child in &children {
        let tag = get_tag_name(*child);
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }

    let noun = if children.len() == 1 {
        "sub-provision"
    } else {
        "sub-provisions"
    };
    Some(format!("[{} {noun}: {}]", children.len(), tags.join(", ")))
}

fn descendant_scan(node: Node<'_, '_>, ctx: &InferenceContext<'_>) -> Option<String> {
    text_nodes(node)
        .into_iter()
        .find(|text| {
            text.chars().count() > MIN_SCAN_TEXT_LEN && !is_placeholder(text) && text != ctx.number
        })
        .map(|text| match ctx.width {
            Some(width) => truncate_with_ellipsis(&text, width),
            None => text,
        })
}

fn is_provision(node: Node<'_, '_>, ctx: &InferenceContext<'_>) -> bool {
    node.is_element()
        && ctx.vocabulary.is_provision(get_tag_name(node))
        && ctx
            .resolver
            .matches(node, NamespaceRole::LegislationCore, get_tag_name(node))
}

/// Nearest provision strictly above `node`.
fn owning_provision<'a, 'input>(
    node: Node<'a, 'input>,
    ctx: &InferenceContext<'_>,
) -> Option<Node<'a, 'input>> {
    node.ancestors().skip(1).find(|a| is_provision(*a, ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::create_clml_vocabulary;
    use roxmltree::Document;

    fn infer(
        xml: &str,
        tag: &str,
        number: &str,
        width: Option<usize>,
    ) -> Option<(TitleRule, String)> {
        let doc = Document::parse(xml).unwrap();
        let resolver = NamespaceResolver::clml();
        let vocabulary = create_clml_vocabulary();
        let spec = vocabulary.get_spec(tag).unwrap();
        let node = doc.descendants().find(|n| n.has_tag_name(tag)).unwrap();
        let ctx = InferenceContext {
            resolver: &resolver,
            vocabulary: &vocabulary,
            spec,
            number,
            width,
        };
        infer_title(node, &ctx)
    }

    #[test]
    fn test_rule_order() {
        assert_eq!(
            TITLE_RULES,
            &[
                TitleRule::Heading,
                TitleRule::LeadText,
                TitleRule::SubProvisionSummary,
                TitleRule::DescendantScan
            ]
        );
    }

    #[test]
    fn test_heading_child() {
        let xml = "<Part><Number>Part 1</Number><Title>General <Emphasis>provisions</Emphasis></Title></Part>";
        assert_eq!(
            infer(xml, "Part", "Part 1", None),
            Some((TitleRule::Heading, "General provisions".to_string()))
        );
    }

    #[test]
    fn test_heading_from_group() {
        let xml = "<P1group><Title>Short title</Title><P1><Pnumber>1</Pnumber><P1para><Text>This Act may be cited as the Test Act 2020.</Text></P1para></P1></P1group>";
        assert_eq!(
            infer(xml, "P1", "1", None),
            Some((TitleRule::Heading, "Short title".to_string()))
        );
    }

    #[test]
    fn test_lead_text_sentence() {
        let xml = "<P1><Pnumber>1</Pnumber><P1para><Text>This Act may be cited as the Test Act 2020.</Text></P1para></P1>";
        assert_eq!(
            infer(xml, "P1", "1", Some(80)),
            Some((
                TitleRule::LeadText,
                "This Act may be cited as the Test Act 2020.".to_string()
            ))
        );
    }

    #[test]
    fn test_lead_text_skips_placeholder() {
        let xml = "<P1><Pnumber>3</Pnumber><P1para><Text>. . .</Text><Text>Amendments to the Act—</Text></P1para></P1>";
        assert_eq!(
            infer(xml, "P1", "3", None),
            Some((TitleRule::LeadText, "Amendments to the Act".to_string()))
        );
    }

    #[test]
    fn test_lead_text_truncated_with_width() {
        let long = "word ".repeat(30);
        let xml = format!("<P1><Pnumber>2</Pnumber><Text>{long}</Text></P1>");
        let (rule, title) = infer(&xml, "P1", "2", Some(20)).unwrap();
        assert_eq!(rule, TitleRule::LeadText);
        assert_eq!(title, "word word word word...");
    }

    #[test]
    fn test_lead_text_ignores_nested_provision_text() {
        let xml = "<P1><Pnumber>4</Pnumber><P1para><P2><Pnumber>1</Pnumber><P2para><Text>Nested text.</Text></P2para></P2><P2><Pnumber>2</Pnumber></P2></P1para></P1>";
        assert_eq!(
            infer(xml, "P1", "4", None),
            Some((TitleRule::SubProvisionSummary, "[2 sub-provisions: P2]".to_string()))
        );
    }

    #[test]
    fn test_descendant_scan_skips_number_and_short_text() {
        let xml = "<Section id=\"s-9\"><Pnumber>9</Pnumber><Note>Short</Note><Note>Inserted by the Finance Act 2019</Note></Section>";
        assert_eq!(
            infer(xml, "Section", "9", None),
            Some((
                TitleRule::DescendantScan,
                "Inserted by the Finance Act 2019".to_string()
            ))
        );
    }

    #[test]
    fn test_placeholder_only_yields_nothing() {
        let xml = "<P2><Pnumber>2</Pnumber><P2para><Text>. . .</Text></P2para></P2>";
        assert_eq!(infer(xml, "P2", "2", None), None);
    }
}
