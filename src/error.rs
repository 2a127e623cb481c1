/// Errors that can occur during Markdown-to-HTML conversion.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// An inline styling delimiter appears an odd number of times in a text
    /// run, so the formatted section is never closed.
    #[error("unclosed {delimiter:?} delimiter in {text:?}")]
    UnclosedDelimiter {
        delimiter: &'static str,
        text: String,
    },

    /// A block rendered to a parent element with no children.
    #[error("block produced no content: {0:?}")]
    MalformedBlock(String),

    /// The document contains no `# ` title line.
    #[error("no title found in markdown")]
    NoTitleFound,
}
