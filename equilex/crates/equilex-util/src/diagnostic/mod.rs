//! Diagnostic module - Error reporting infrastructure.
//!
//! Scanning stops at the first malformed literal; the caller receives a typed
//! error and can turn it into a [`Diagnostic`] for display in an editor,
//! linter or terminal.
//!
//! # Examples
//!
//! ```
//! use equilex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
//! use equilex_util::Span;
//!
//! let diag = DiagnosticBuilder::error("truncated comment")
//!     .code(DiagnosticCode::E_UNTERMINATED_COMMENT)
//!     .span(Span::new(0, 5, 1, 1))
//!     .help("close the comment with `*|`")
//!     .build();
//!
//! let rendered = diag.to_string();
//! assert!(rendered.contains("--> 1:1"));
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;

use crate::Span;
use std::fmt;

/// An error report with location, code and fix-it hints
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => writeln!(f, "error[{}]: {}", code, self.message)?,
            None => writeln!(f, "error: {}", self.message)?,
        }
        write!(f, "  --> {}", self.span)?;
        for note in &self.notes {
            write!(f, "\n  = note: {}", note)?;
        }
        for help in &self.helps {
            write!(f, "\n  = help: {}", help)?;
        }
        Ok(())
    }
}
