// Block rendering.
//
// Extracts each block's inner text per its type, runs it through the
// inline tokenizer, and wraps the resulting leaf nodes in the matching
// parent element. The whole document becomes one `<div>` root.

use crate::block::{classify, split_blocks, BlockType};
use crate::error::ConvertError;
use crate::html::{span_to_node, HtmlNode};
use crate::inline::tokenize;
use crate::span::{SpanKind, TextSpan};

/// Convert a whole markdown document into an HTML node tree rooted at a
/// `<div>`.
pub(crate) fn markdown_to_node(document: &str) -> Result<HtmlNode, ConvertError> {
    let blocks = split_blocks(document);

    #[cfg(feature = "tracing")]
    tracing::trace!(blocks = blocks.len(), "split document into blocks");

    let mut children = Vec::with_capacity(blocks.len());
    for block in blocks {
        children.push(render_block(block, classify(block))?);
    }
    if children.is_empty() {
        return Err(ConvertError::MalformedBlock(document.trim().to_string()));
    }
    Ok(HtmlNode::parent("div", children))
}

/// Render one block into its parent element.
pub(crate) fn render_block(block: &str, block_type: BlockType) -> Result<HtmlNode, ConvertError> {
    match block_type {
        BlockType::Heading(level) => {
            let children = text_to_children(extract_heading_text(block))?;
            require_children(block, &children)?;
            Ok(HtmlNode::parent(format!("h{level}"), children))
        }
        BlockType::Paragraph => {
            let children = text_to_children(&extract_paragraph_text(block))?;
            require_children(block, &children)?;
            Ok(HtmlNode::parent("p", children))
        }
        BlockType::Quote => {
            let children = text_to_children(&extract_quote_text(block))?;
            require_children(block, &children)?;
            Ok(HtmlNode::parent("blockquote", children))
        }
        BlockType::Code => {
            // Fenced content is kept verbatim: one code leaf, no inline
            // tokenization.
            let content = extract_code_text(block);
            let leaf = span_to_node(&TextSpan::new(content, SpanKind::Code));
            Ok(HtmlNode::parent("pre", vec![leaf]))
        }
        BlockType::UnorderedList => render_list(block, extract_unordered_items(block), "ul"),
        BlockType::OrderedList => render_list(block, extract_ordered_items(block), "ol"),
    }
}

fn render_list(block: &str, items: Vec<String>, tag: &str) -> Result<HtmlNode, ConvertError> {
    let mut children = Vec::with_capacity(items.len());
    for item in items {
        let nodes = text_to_children(&item)?;
        require_children(block, &nodes)?;
        children.push(HtmlNode::parent("li", nodes));
    }
    require_children(block, &children)?;
    Ok(HtmlNode::parent(tag, children))
}

/// Tokenize extracted text and render each span to a leaf node.
fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, ConvertError> {
    Ok(tokenize(text)?.iter().map(span_to_node).collect())
}

/// A parent element with no children is structurally invalid.
fn require_children(block: &str, children: &[HtmlNode]) -> Result<(), ConvertError> {
    if children.is_empty() {
        return Err(ConvertError::MalformedBlock(block.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Per-type inner-text extraction
// ---------------------------------------------------------------------------

/// Number of leading `#` characters, capped at 6.
pub(crate) fn extract_heading_level(block: &str) -> u8 {
    let count = block
        .trim_start()
        .bytes()
        .take_while(|&b| b == b'#')
        .count();
    count.min(6) as u8
}

/// Heading text with the `#` marker and one following space stripped.
pub(crate) fn extract_heading_text(block: &str) -> &str {
    let stripped = block.trim_start();
    let text = &stripped[extract_heading_level(block) as usize..];
    text.strip_prefix(' ').unwrap_or(text)
}

/// Collapse soft line breaks: trim each line, join with single spaces.
fn extract_paragraph_text(block: &str) -> String {
    block
        .split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip the `>` marker and following whitespace from each line. Lines
/// without a marker are kept verbatim; empty lines are dropped.
fn extract_quote_text(block: &str) -> String {
    let mut cleaned = Vec::new();
    for line in block.split('\n') {
        let line = line.trim_start();
        if let Some(rest) = line.strip_prefix('>') {
            cleaned.push(rest.trim_start());
        } else if !line.is_empty() {
            cleaned.push(line);
        }
    }
    cleaned.join("\n")
}

/// Drop the fence lines, keep everything between them verbatim, with a
/// trailing newline.
fn extract_code_text(block: &str) -> String {
    let lines: Vec<&str> = block.split('\n').collect();
    let inner: &[&str] = if lines.len() >= 2 {
        &lines[1..lines.len() - 1]
    } else {
        &[]
    };
    let mut text = inner.join("\n");
    text.push('\n');
    text
}

/// Item text per line with the `- ` marker stripped.
fn extract_unordered_items(block: &str) -> Vec<String> {
    let mut items = Vec::new();
    for line in block.split('\n') {
        let line = line.trim_start();
        if let Some(rest) = line.strip_prefix('-') {
            items.push(rest.trim_start().to_string());
        }
    }
    items
}

/// Item text per line with the `N. ` marker stripped. Markers are three
/// characters wide, so only single-digit numbering is recognized; the
/// classifier guarantees the sequence starts at 1 and increments.
fn extract_ordered_items(block: &str) -> Vec<String> {
    let mut items = Vec::new();
    for (i, line) in block.split('\n').enumerate() {
        if line.starts_with(&format!("{}. ", i + 1)) {
            items.push(line[3..].trim_start().to_string());
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_heading_level_and_text() {
        assert_eq!(extract_heading_level("# Title"), 1);
        assert_eq!(extract_heading_level("### Deep"), 3);
        assert_eq!(extract_heading_text("# Title"), "Title");
        assert_eq!(extract_heading_text("### Deep"), "Deep");
    }

    #[test]
    fn test_extract_heading_level_caps_at_six() {
        assert_eq!(extract_heading_level("######## Way too deep"), 6);
    }

    #[test]
    fn test_heading_round_trips_through_render() {
        // Rendering then re-extracting recovers the stripped text.
        let block = "## Section title";
        let node = render_block(block, BlockType::Heading(2)).unwrap();
        assert_eq!(node.to_html(), "<h2>Section title</h2>");
        assert_eq!(extract_heading_level(block), 2);
        assert_eq!(extract_heading_text(block), "Section title");
    }

    #[test]
    fn test_extract_paragraph_collapses_soft_breaks() {
        assert_eq!(
            extract_paragraph_text("First line  \n  Second line"),
            "First line Second line"
        );
    }

    #[test]
    fn test_extract_quote_text() {
        assert_eq!(extract_quote_text("> line one\n>line two"), "line one\nline two");
    }

    #[test]
    fn test_extract_code_text_keeps_markup_verbatim() {
        assert_eq!(
            extract_code_text("```\nlet x = **not bold**;\n```"),
            "let x = **not bold**;\n"
        );
    }

    #[test]
    fn test_render_code_block() {
        let node = render_block("```\ncode\n```", BlockType::Code).unwrap();
        assert_eq!(node.to_html(), "<pre><code>code\n</code></pre>");
    }

    #[test]
    fn test_code_block_not_tokenized() {
        let node = render_block("```\na **b** `c`\n```", BlockType::Code).unwrap();
        assert_eq!(node.to_html(), "<pre><code>a **b** `c`\n</code></pre>");
    }

    #[test]
    fn test_render_unordered_list() {
        let node = render_block("- item1\n- item2", BlockType::UnorderedList).unwrap();
        assert_eq!(node.to_html(), "<ul><li>item1</li><li>item2</li></ul>");
    }

    #[test]
    fn test_render_ordered_list() {
        let node = render_block("1. one\n2. two", BlockType::OrderedList).unwrap();
        assert_eq!(node.to_html(), "<ol><li>one</li><li>two</li></ol>");
    }

    #[test]
    fn test_list_items_are_tokenized() {
        let node = render_block("- **bold** item\n- plain", BlockType::UnorderedList).unwrap();
        assert_eq!(
            node.to_html(),
            "<ul><li><b>bold</b> item</li><li>plain</li></ul>"
        );
    }

    #[test]
    fn test_render_quote() {
        let node = render_block("> quoted text", BlockType::Quote).unwrap();
        assert_eq!(node.to_html(), "<blockquote>quoted text</blockquote>");
    }

    #[test]
    fn test_empty_heading_is_malformed() {
        let err = render_block("#", BlockType::Heading(1)).unwrap_err();
        assert!(matches!(err, ConvertError::MalformedBlock(_)));
    }

    #[test]
    fn test_empty_list_item_is_malformed() {
        let err = render_block("- item\n-", BlockType::UnorderedList).unwrap_err();
        assert!(matches!(err, ConvertError::MalformedBlock(_)));
    }

    #[test]
    fn test_markdown_to_node_document() {
        let node = markdown_to_node("# Heading\n\nParagraph").unwrap();
        assert_eq!(node.to_html(), "<div><h1>Heading</h1><p>Paragraph</p></div>");
    }

    #[test]
    fn test_markdown_to_node_empty_document_is_malformed() {
        let err = markdown_to_node("   \n\n  ").unwrap_err();
        assert!(matches!(err, ConvertError::MalformedBlock(_)));
    }

    #[test]
    fn test_block_order_preserved() {
        let node = markdown_to_node("first\n\nsecond\n\nthird").unwrap();
        assert_eq!(
            node.to_html(),
            "<div><p>first</p><p>second</p><p>third</p></div>"
        );
    }
}
