// markdown2html — Markdown to HTML converter.
//
// Architecture:
//   markdown string → block split & classify → per-block extraction
//     → inline tokenize → span-to-node render → HTML tree → HTML string
//
// Everything is a pure function over the input string; the whole document
// is held in memory and converted in one pass.

mod block;
mod error;
mod html;
mod inline;
mod span;

pub use block::{classify, split_blocks, BlockType};
pub use error::ConvertError;
pub use html::{span_to_node, HtmlNode, Leaf, Parent};
pub use inline::tokenize;
pub use span::{SpanKind, TextSpan};

/// Result of converting a full document: the serialized HTML plus the
/// title pulled from the first `# ` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub html: String,
    pub title: String,
}

/// Convert a markdown document to HTML and extract its title.
///
/// Any parse error is fatal to the whole conversion; no partial HTML is
/// returned.
///
/// # Examples
///
/// ```
/// let out = markdown2html::convert("# Hello\n\nWorld").unwrap();
/// assert_eq!(out.title, "Hello");
/// assert_eq!(out.html, "<div><h1>Hello</h1><p>World</p></div>");
/// ```
pub fn convert(markdown: &str) -> Result<Conversion, ConvertError> {
    let html = markdown_to_html(markdown)?;
    let title = extract_title(markdown)?;
    Ok(Conversion { html, title })
}

/// Convert a markdown document to a serialized HTML string.
///
/// Unlike [`convert`] this does not require the document to carry a title.
///
/// # Examples
///
/// ```
/// let html = markdown2html::markdown_to_html("Just a paragraph").unwrap();
/// assert_eq!(html, "<div><p>Just a paragraph</p></div>");
/// ```
pub fn markdown_to_html(markdown: &str) -> Result<String, ConvertError> {
    Ok(markdown_to_node(markdown)?.to_html())
}

/// Convert a markdown document into its HTML node tree, rooted at a
/// `<div>` element holding one child per block.
pub fn markdown_to_node(markdown: &str) -> Result<HtmlNode, ConvertError> {
    block::render::markdown_to_node(markdown)
}

/// Extract the document title: the first line starting with `# `, marker
/// stripped and whitespace trimmed.
///
/// Independent of rendering — a document that fails to render can still
/// yield a title, and vice versa.
pub fn extract_title(markdown: &str) -> Result<String, ConvertError> {
    for line in markdown.split('\n') {
        if line.starts_with("# ") {
            return Ok(line[1..].trim().to_string());
        }
    }
    Err(ConvertError::NoTitleFound)
}
