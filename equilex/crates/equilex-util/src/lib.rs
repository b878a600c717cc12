//! equilex-util - Shared foundation types for the equilex scanner.
//!
//! This crate holds the pieces that are not specific to scanning itself:
//!
//! - [`span`] - byte ranges and line/column positions inside a source stream
//! - [`diagnostic`] - structured, renderable error reports
//!
//! # Example
//!
//! ```
//! use equilex_util::{DiagnosticBuilder, DiagnosticCode, Span};
//!
//! let diag = DiagnosticBuilder::error("unterminated string literal")
//!     .code(DiagnosticCode::E_UNTERMINATED_STRING)
//!     .span(Span::new(4, 9, 1, 5))
//!     .build();
//!
//! assert!(diag.to_string().starts_with("error[E1002]"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode};
pub use span::Span;
