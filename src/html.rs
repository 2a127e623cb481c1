// HTML node types and serialization.
//
// The rendered document is a tree of `HtmlNode`s: leaves hold a value and
// render to a single tag (or raw text when untagged), parents render their
// children concatenated inside their own tag. Attributes keep insertion
// order so serialization is deterministic.
//
// Note: values and attributes are emitted verbatim — no HTML escaping.
// This matches the observed behavior of the converter this crate replaces;
// angle brackets or quotes in source text pass through to the output.

use crate::span::{SpanKind, TextSpan};

/// Elements serialized without a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img"];

/// An HTML element with no children.
///
/// When `tag` is `None` the leaf renders as its raw `value` — used for
/// plain text runs between styled elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    pub tag: Option<String>,
    pub value: String,
    pub attrs: Vec<(String, String)>,
}

/// An HTML element whose content is the concatenation of its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parent {
    pub tag: String,
    pub children: Vec<HtmlNode>,
    pub attrs: Vec<(String, String)>,
}

/// A node in the rendered HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(Leaf),
    Parent(Parent),
}

impl HtmlNode {
    /// Create an untagged leaf that renders as raw text.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Leaf(Leaf {
            tag: None,
            value: value.into(),
            attrs: Vec::new(),
        })
    }

    /// Create a tagged leaf with no attributes.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Leaf(Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attrs: Vec::new(),
        })
    }

    /// Create a tagged leaf with attributes (in the order given).
    pub fn leaf_with_attrs(
        tag: impl Into<String>,
        value: impl Into<String>,
        attrs: Vec<(String, String)>,
    ) -> Self {
        Self::Leaf(Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attrs,
        })
    }

    /// Create a parent element owning `children`.
    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self::Parent(Parent {
            tag: tag.into(),
            children,
            attrs: Vec::new(),
        })
    }

    /// Returns this node's children, if it has any.
    pub fn children(&self) -> Option<&[HtmlNode]> {
        match self {
            Self::Parent(p) => Some(&p.children),
            Self::Leaf(_) => None,
        }
    }

    /// Serialize this node and everything below it to an HTML string.
    ///
    /// Children are concatenated with no separators; attributes render as
    /// ` key="value"` pairs in insertion order.
    pub fn to_html(&self) -> String {
        match self {
            Self::Leaf(leaf) => match &leaf.tag {
                None => leaf.value.clone(),
                Some(tag) if VOID_TAGS.contains(&tag.as_str()) => {
                    format!("<{}{}>", tag, attrs_to_html(&leaf.attrs))
                }
                Some(tag) => {
                    format!("<{}{}>{}</{}>", tag, attrs_to_html(&leaf.attrs), leaf.value, tag)
                }
            },
            Self::Parent(parent) => {
                let mut out = format!("<{}{}>", parent.tag, attrs_to_html(&parent.attrs));
                for child in &parent.children {
                    out.push_str(&child.to_html());
                }
                out.push_str("</");
                out.push_str(&parent.tag);
                out.push('>');
                out
            }
        }
    }
}

fn attrs_to_html(attrs: &[(String, String)]) -> String {
    let mut out = String::new();
    for (key, value) in attrs {
        out.push_str(&format!(" {key}=\"{value}\""));
    }
    out
}

/// Render a single text span to its leaf HTML node.
///
/// Total over all span kinds; never fails.
pub fn span_to_node(span: &TextSpan) -> HtmlNode {
    match span.kind {
        SpanKind::Plain => HtmlNode::text(&*span.content),
        SpanKind::Bold => HtmlNode::leaf("b", &*span.content),
        SpanKind::Italic => HtmlNode::leaf("i", &*span.content),
        SpanKind::Code => HtmlNode::leaf("code", &*span.content),
        SpanKind::Link => HtmlNode::leaf_with_attrs(
            "a",
            &*span.content,
            vec![("href".into(), span.target.clone().unwrap_or_default())],
        ),
        SpanKind::Image => HtmlNode::leaf_with_attrs(
            "img",
            "",
            vec![
                ("src".into(), span.target.clone().unwrap_or_default()),
                ("alt".into(), span.content.clone()),
            ],
        ),
    }
}
