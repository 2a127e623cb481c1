// Image and link extraction.
//
// `![alt](url)` and `[text](url)` occurrences are cut out of plain spans
// with non-greedy patterns. The regex crate has no lookbehind, so instead
// of a `(?<!!)` guard the link pass skips any match directly preceded by
// `!` (an image that somehow survived the image pass).

use std::sync::LazyLock;

use regex::Regex;

use crate::span::TextSpan;

static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("image pattern"));
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("link pattern"));

/// Cut `![alt](url)` occurrences out of plain spans into Image spans.
pub(crate) fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_matches(spans, &IMAGE, false, |alt, src| TextSpan::image(alt, src))
}

/// Cut `[text](url)` occurrences out of plain spans into Link spans.
/// Must run after [`split_images`].
pub(crate) fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_matches(spans, &LINK, true, |text, href| TextSpan::link(text, href))
}

/// Shared scan loop: walk each plain span left to right, emitting a plain
/// span for the text before each match (skipped when empty), a constructed
/// span for the match itself, and a plain span for whatever trails the
/// last match.
fn split_matches<F>(
    spans: Vec<TextSpan>,
    pattern: &Regex,
    skip_bang_prefixed: bool,
    make: F,
) -> Vec<TextSpan>
where
    F: Fn(&str, &str) -> TextSpan,
{
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() || !pattern.is_match(&span.content) {
            out.push(span);
            continue;
        }
        let text = span.content.as_str();
        let mut cursor = 0;
        for caps in pattern.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            if skip_bang_prefixed
                && whole.start() > 0
                && text.as_bytes()[whole.start() - 1] == b'!'
            {
                continue;
            }
            if whole.start() > cursor {
                out.push(TextSpan::plain(&text[cursor..whole.start()]));
            }
            let content = caps.get(1).map_or("", |m| m.as_str());
            let target = caps.get(2).map_or("", |m| m.as_str());
            out.push(make(content, target));
            cursor = whole.end();
        }
        if cursor < text.len() {
            out.push(TextSpan::plain(&text[cursor..]));
        }
    }
    out
}
