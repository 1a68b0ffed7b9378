//! Literal syntax errors.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// An error found while reading a literal. Spans are byte ranges into the source text.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum LiteralError {
    #[error("unexpected end of input, expected {expected}")]
    #[diagnostic(code(truthy::literal::unexpected_end))]
    UnexpectedEnd {
        expected: &'static str,
        #[label("input ends here")]
        span: SourceSpan,
    },

    #[error("expected {expected}, found `{found}`")]
    #[diagnostic(code(truthy::literal::unexpected_char))]
    UnexpectedChar {
        found: char,
        expected: &'static str,
        #[label("unexpected character")]
        span: SourceSpan,
    },

    #[error("unknown identifier `{name}`")]
    #[diagnostic(
        code(truthy::literal::unknown_identifier),
        help("known identifiers are undefined, null, true, false, NaN, Infinity and `new Map(...)`")
    )]
    UnknownIdentifier {
        name: String,
        #[label("not a literal")]
        span: SourceSpan,
    },

    #[error("invalid number literal `{text}`")]
    #[diagnostic(code(truthy::literal::invalid_number))]
    InvalidNumber {
        text: String,
        #[label("cannot be read as a number")]
        span: SourceSpan,
    },

    #[error("unterminated string literal")]
    #[diagnostic(code(truthy::literal::unterminated_string), help("close the string with a matching quote"))]
    UnterminatedString {
        #[label("string starts here")]
        span: SourceSpan,
    },

    #[error("invalid escape sequence")]
    #[diagnostic(code(truthy::literal::invalid_escape))]
    InvalidEscape {
        #[label("unknown or malformed escape")]
        span: SourceSpan,
    },

    #[error("map entries must be [key, value] pairs")]
    #[diagnostic(code(truthy::literal::invalid_map_entry), help("write maps as `new Map([[key, value], ...])`"))]
    InvalidMapEntry {
        #[label("not a list of pairs")]
        span: SourceSpan,
    },

    #[error("value is nested more than {} levels deep", super::MAX_DEPTH)]
    #[diagnostic(
        code(truthy::literal::too_deep),
        help("flatten the value; arrays, objects and maps cannot nest any deeper")
    )]
    TooDeep {
        #[label("one level too many")]
        span: SourceSpan,
    },

    #[error("unexpected input after the value")]
    #[diagnostic(code(truthy::literal::trailing_input))]
    TrailingInput {
        #[label("remove this")]
        span: SourceSpan,
    },
}

impl LiteralError {
    /// The byte range the error points at.
    pub fn span(&self) -> SourceSpan {
        match self {
            LiteralError::UnexpectedEnd { span, .. }
            | LiteralError::UnexpectedChar { span, .. }
            | LiteralError::UnknownIdentifier { span, .. }
            | LiteralError::InvalidNumber { span, .. }
            | LiteralError::UnterminatedString { span }
            | LiteralError::InvalidEscape { span }
            | LiteralError::InvalidMapEntry { span }
            | LiteralError::TooDeep { span }
            | LiteralError::TrailingInput { span } => *span,
        }
    }
}

/// Renders `error` against `source` with a labelled excerpt.
pub fn render_error(source: &str, error: LiteralError) -> String {
    let report = miette::Report::new(error).with_source_code(source.to_string());
    format!("{report:?}")
}
