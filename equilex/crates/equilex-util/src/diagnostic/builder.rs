//! Diagnostic builder for fluent diagnostic construction.

use super::{Diagnostic, DiagnosticCode};
use crate::Span;

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use equilex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
/// use equilex_util::Span;
///
/// let diag = DiagnosticBuilder::error("malformed number")
///     .code(DiagnosticCode::E_MALFORMED_NUMBER)
///     .span(Span::new(0, 7, 1, 1))
///     .help("a number may contain at most one decimal point")
///     .build();
/// assert_eq!(diag.code, Some(DiagnosticCode::E_MALFORMED_NUMBER));
/// ```
#[derive(Debug)]
pub struct DiagnosticBuilder {
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Start an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source location
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Finish building
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let diag = DiagnosticBuilder::error("odd").build();
        assert_eq!(diag.message, "odd");
        assert_eq!(diag.span, Span::DUMMY);
        assert!(diag.code.is_none());
        assert!(diag.notes.is_empty());
        assert!(diag.helps.is_empty());
    }

    #[test]
    fn test_builder_collects_everything() {
        let diag = DiagnosticBuilder::error("odd")
            .code(DiagnosticCode::new("E", 9999))
            .span(Span::new(1, 2, 1, 2))
            .note("n")
            .help("h")
            .build();

        assert_eq!(diag.code.map(|c| c.as_str()), Some("E9999".to_string()));
        assert_eq!(diag.span, Span::new(1, 2, 1, 2));
        assert_eq!(diag.notes, vec!["n"]);
        assert_eq!(diag.helps, vec!["h"]);
    }
}
