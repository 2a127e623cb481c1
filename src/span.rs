// Inline text-span types.
//
// A markdown text run is tokenized into a flat sequence of spans, each a
// contiguous slice of the input tagged with a style. Spans are immutable
// and compared structurally.

/// Style of an inline text fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Unstyled text.
    Plain,
    /// `**text**`.
    Bold,
    /// `_text_`.
    Italic,
    /// `` `text` ``.
    Code,
    /// `[text](url)`.
    Link,
    /// `![alt](url)`.
    Image,
}

/// A contiguous run of inline text with a style.
///
/// `target` holds the href for `Link` spans and the src for `Image` spans;
/// it is `None` for every other kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub content: String,
    pub kind: SpanKind,
    pub target: Option<String>,
}

impl TextSpan {
    /// Create a span with no target.
    pub fn new(content: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            content: content.into(),
            kind,
            target: None,
        }
    }

    /// Create a plain (unstyled) span.
    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Plain)
    }

    /// Create a link span pointing at `href`.
    pub fn link(content: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: SpanKind::Link,
            target: Some(href.into()),
        }
    }

    /// Create an image span with alt text `content` and source `src`.
    pub fn image(content: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: SpanKind::Image,
            target: Some(src.into()),
        }
    }

    /// Whether this span is still unstyled text, eligible for further
    /// splitting by the tokenizer.
    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}
