// Delimiter splitting.
//
// The shared primitive behind the bold, italic and code passes: split a
// plain span's text on a literal delimiter, then reinterleave the parts as
// alternating plain/styled spans, starting plain. Empty parts are dropped.
// An even part count means the final delimiter was never closed.

use crate::error::ConvertError;
use crate::span::{SpanKind, TextSpan};

/// Split every plain span on `delimiter`, tagging the delimited parts with
/// `kind`. Already-styled spans pass through untouched.
pub(crate) fn split_on_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &'static str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>, ConvertError> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }
        let parts: Vec<&str> = span.content.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(ConvertError::UnclosedDelimiter {
                delimiter,
                text: span.content.clone(),
            });
        }
        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(TextSpan::plain(part));
            } else {
                out.push(TextSpan::new(part, kind));
            }
        }
    }
    Ok(out)
}
