//! Scan errors.
//!
//! Every malformed construct is reported as a [`ScanError`] from the call
//! that hit it; nothing is logged and skipped, and no partial token is
//! produced. Each variant carries the text consumed for the failed token so
//! the failure can be located in the source.

use std::fmt;
use std::io;

use equilex_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Span};
use thiserror::Error;

/// Delimiter of an unterminated string literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuoteKind {
    /// `"…"`, single line only
    Double,
    /// `$…$`, may span lines
    Dollar,
}

impl QuoteKind {
    /// The delimiter character.
    pub fn delimiter(self) -> char {
        match self {
            QuoteKind::Double => '"',
            QuoteKind::Dollar => '$',
        }
    }
}

impl fmt::Display for QuoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteKind::Double => f.write_str("double quote"),
            QuoteKind::Dollar => f.write_str("dollar quote"),
        }
    }
}

/// Error type for a failed scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A `|*` block comment was still open at end of input
    #[error("truncated comment: {buffer:?}")]
    UnterminatedBlockComment {
        /// Comment text consumed so far
        buffer: String,
        /// From the opening `|` to the end of input
        span: Span,
    },

    /// Block comments nested deeper than the configured limit
    #[error("comment nested more than {limit} levels deep: {buffer:?}")]
    CommentNestingTooDeep {
        /// Configured maximum depth
        limit: u32,
        /// Comment text up to and including the opener over the limit
        buffer: String,
        /// From the outermost opener to the failing one
        span: Span,
    },

    /// A string literal reached a line break (`"` only) or end of input
    #[error("unclosed {quote}: {buffer:?}")]
    UnterminatedString {
        /// Which delimiter was left open
        quote: QuoteKind,
        /// Literal text consumed so far, opening delimiter included
        buffer: String,
        /// From the opening delimiter to the point of failure
        span: Span,
    },

    /// A quoted literal used both `-` (date) and `:` (time) separators
    #[error("malformed date or time {buffer:?}, next char is {next:?}")]
    MalformedDateOrTime {
        /// Literal text before the offending separator
        buffer: String,
        /// The separator that completed the mix, left unconsumed
        next: char,
        /// From the opening `'` to the offending separator
        span: Span,
    },

    /// A `'` literal reached a line break or end of input
    #[error("unclosed single quote: {buffer:?}")]
    UnterminatedDateOrTime {
        /// Literal text consumed so far
        buffer: String,
        /// From the opening `'` to the point of failure
        span: Span,
    },

    /// A number with a second decimal point
    #[error("malformed number: {buffer:?}")]
    MalformedNumber {
        /// Digits consumed, ending with the second `.`
        buffer: String,
        /// From the first digit through the second `.`
        span: Span,
    },

    /// The source could not be read or is not valid UTF-8
    #[error("failed to read source: {0}")]
    Io(#[from] io::Error),
}

impl ScanError {
    /// Location of the failed token, from its first character to the point
    /// of failure. `None` for read errors.
    pub fn span(&self) -> Option<Span> {
        match self {
            ScanError::UnterminatedBlockComment { span, .. }
            | ScanError::CommentNestingTooDeep { span, .. }
            | ScanError::UnterminatedString { span, .. }
            | ScanError::MalformedDateOrTime { span, .. }
            | ScanError::UnterminatedDateOrTime { span, .. }
            | ScanError::MalformedNumber { span, .. } => Some(*span),
            ScanError::Io(_) => None,
        }
    }

    /// Text consumed for the failed token.
    pub fn buffer(&self) -> Option<&str> {
        match self {
            ScanError::UnterminatedBlockComment { buffer, .. }
            | ScanError::CommentNestingTooDeep { buffer, .. }
            | ScanError::UnterminatedString { buffer, .. }
            | ScanError::MalformedDateOrTime { buffer, .. }
            | ScanError::UnterminatedDateOrTime { buffer, .. }
            | ScanError::MalformedNumber { buffer, .. } => Some(buffer),
            ScanError::Io(_) => None,
        }
    }

    /// Diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            ScanError::UnterminatedBlockComment { .. } => DiagnosticCode::E_UNTERMINATED_COMMENT,
            ScanError::CommentNestingTooDeep { .. } => DiagnosticCode::E_COMMENT_TOO_DEEP,
            ScanError::UnterminatedString { .. } => DiagnosticCode::E_UNTERMINATED_STRING,
            ScanError::MalformedDateOrTime { .. } => DiagnosticCode::E_MALFORMED_DATE_OR_TIME,
            ScanError::UnterminatedDateOrTime { .. } => {
                DiagnosticCode::E_UNTERMINATED_DATE_OR_TIME
            }
            ScanError::MalformedNumber { .. } => DiagnosticCode::E_MALFORMED_NUMBER,
            ScanError::Io(_) => DiagnosticCode::E_SOURCE_READ,
        }
    }

    /// Converts the error into a renderable diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// use equilex_lex::tokenize;
    ///
    /// let err = tokenize("x = 1.2.3").unwrap_err();
    /// let diag = err.to_diagnostic();
    /// assert_eq!(diag.code.unwrap().as_str(), "E1003");
    /// assert_eq!(diag.span.column, 5);
    /// ```
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut builder = DiagnosticBuilder::error(self.to_string())
            .code(self.code())
            .span(self.span().unwrap_or_default());

        builder = match self {
            ScanError::UnterminatedBlockComment { .. } => {
                builder.help("close every `|*` with a matching `*|`")
            }
            ScanError::CommentNestingTooDeep { limit, .. } => {
                builder.note(format!("the scanner is configured for at most {limit} levels"))
            }
            ScanError::UnterminatedString { quote, .. } => {
                let help = format!("close the string with `{}`", quote.delimiter());
                let builder = builder.help(help);
                match quote {
                    QuoteKind::Double => {
                        builder.note("use `$…$` for strings spanning several lines")
                    }
                    QuoteKind::Dollar => builder,
                }
            }
            ScanError::MalformedDateOrTime { .. } => {
                builder.note("a quoted literal is either a date (`-`) or a time (`:`), not both")
            }
            ScanError::UnterminatedDateOrTime { .. } => {
                builder.help("close the date or time with `'` before the end of the line")
            }
            ScanError::MalformedNumber { .. } => {
                builder.note("a number may contain at most one decimal point")
            }
            ScanError::Io(_) => builder,
        };

        builder.build()
    }
}

/// Result type alias for scan operations
pub type ScanResult<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_include_buffer() {
        let err = ScanError::UnterminatedString {
            quote: QuoteKind::Double,
            buffer: "\"abc".to_string(),
            span: Span::DUMMY,
        };
        assert_eq!(err.to_string(), "unclosed double quote: \"\\\"abc\"");

        let err = ScanError::MalformedDateOrTime {
            buffer: "'2024-01".to_string(),
            next: ':',
            span: Span::DUMMY,
        };
        assert!(err.to_string().contains("'2024-01"));
        assert!(err.to_string().contains("':'"));
    }

    #[test]
    fn test_io_error_has_no_span() {
        let err = ScanError::from(io::Error::new(io::ErrorKind::InvalidData, "bad"));
        assert_eq!(err.span(), None);
        assert_eq!(err.buffer(), None);
        assert_eq!(err.code(), DiagnosticCode::E_SOURCE_READ);
    }

    #[test]
    fn test_to_diagnostic() {
        let span = Span::new(4, 8, 2, 3);
        let err = ScanError::MalformedNumber {
            buffer: "1.2.".to_string(),
            span,
        };
        let diag = err.to_diagnostic();
        assert_eq!(diag.span, span);
        assert_eq!(diag.code, Some(DiagnosticCode::E_MALFORMED_NUMBER));
        assert_eq!(diag.notes.len(), 1);
        assert!(diag.message.contains("1.2."));
    }

    #[test]
    fn test_unclosed_string_help_names_delimiter() {
        let err = ScanError::UnterminatedString {
            quote: QuoteKind::Dollar,
            buffer: "$abc".to_string(),
            span: Span::new(0, 4, 1, 1),
        };
        let diag = err.to_diagnostic();
        assert_eq!(diag.helps, vec!["close the string with `$`"]);
        assert!(diag.notes.is_empty());

        let err = ScanError::UnterminatedString {
            quote: QuoteKind::Double,
            buffer: "\"abc".to_string(),
            span: Span::new(0, 4, 1, 1),
        };
        let diag = err.to_diagnostic();
        assert_eq!(diag.helps, vec!["close the string with `\"`"]);
        assert_eq!(diag.notes.len(), 1);
    }

    #[test]
    fn test_quote_kind() {
        assert_eq!(QuoteKind::Double.delimiter(), '"');
        assert_eq!(QuoteKind::Dollar.delimiter(), '$');
        assert_eq!(QuoteKind::Dollar.to_string(), "dollar quote");
    }
}
