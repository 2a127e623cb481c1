// Inline tokenizer.
//
// Turns a raw text run into an ordered sequence of typed spans by running a
// fixed series of splitting passes over a working span list:
//
//   images → links → `**` (bold) → `_` (italic) → `` ` `` (code)
//
// The order is load-bearing: image and link extraction must run before
// delimiter splitting, or a URL containing underscores or backticks would
// be torn apart; images must run before links, or the link pattern would
// match the bracketed tail of an image. Every pass only re-examines spans
// still tagged Plain.

pub(crate) mod delimiter;
pub(crate) mod reference;

use crate::error::ConvertError;
use crate::span::{SpanKind, TextSpan};

/// Tokenize a text run into an ordered sequence of styled spans.
///
/// Pure function of `text`; empty input yields an empty sequence. Fails
/// with [`ConvertError::UnclosedDelimiter`] when a styling delimiter is
/// never closed.
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>, ConvertError> {
    let spans = vec![TextSpan::plain(text)];
    let spans = reference::split_images(spans);
    let spans = reference::split_links(spans);
    let spans = delimiter::split_on_delimiter(spans, "**", SpanKind::Bold)?;
    let spans = delimiter::split_on_delimiter(spans, "_", SpanKind::Italic)?;
    let spans = delimiter::split_on_delimiter(spans, "`", SpanKind::Code)?;

    #[cfg(feature = "tracing")]
    tracing::trace!(spans = spans.len(), "tokenized inline text");

    Ok(spans)
}
