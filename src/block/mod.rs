// Block splitting and classification.
//
// A document splits into blocks on blank-line boundaries; each block's type
// is decided purely from its own text, first match wins. Quote and list
// classification is all-or-nothing: a single non-conforming line demotes
// the whole block to a paragraph.

pub(crate) mod render;

/// Top-level structure of a markdown block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Paragraph,
    /// ATX heading with its level (1–6).
    Heading(u8),
    /// Fenced code block.
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// Split a document into trimmed, non-empty blocks on blank-line
/// boundaries. Block order follows document order.
pub fn split_blocks(document: &str) -> Vec<&str> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a block by its structural prefix.
pub fn classify(block: &str) -> BlockType {
    let lines: Vec<&str> = block.split('\n').collect();

    if let Some(level) = heading_prefix(block) {
        return BlockType::Heading(level);
    }

    if lines.len() > 1 && lines[0].starts_with("```") && lines[lines.len() - 1].starts_with("```") {
        return BlockType::Code;
    }

    if block.starts_with('>') {
        if lines.iter().all(|line| line.starts_with('>')) {
            return BlockType::Quote;
        }
        return BlockType::Paragraph;
    }

    if block.starts_with("- ") {
        if lines.iter().all(|line| line.starts_with("- ")) {
            return BlockType::UnorderedList;
        }
        return BlockType::Paragraph;
    }

    if block.starts_with("1. ") {
        for (i, line) in lines.iter().enumerate() {
            if !line.starts_with(&format!("{}. ", i + 1)) {
                return BlockType::Paragraph;
            }
        }
        return BlockType::OrderedList;
    }

    BlockType::Paragraph
}

/// `1..=6` leading `#` characters followed by a space.
fn heading_prefix(block: &str) -> Option<u8> {
    let level = block.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&level) && block.as_bytes().get(level) == Some(&b' ') {
        Some(level as u8)
    } else {
        None
    }
}
