//! equilex-lex - Lexical Scanner for the Equinox 4GL
//!
//! This crate turns Equinox source text into a stream of classified tokens.
//! Every character of the input lands in exactly one token, so joining the
//! literals of a successful scan reproduces the source byte for byte.
//! Whitespace, line breaks and comments are tokens too; it is up to the
//! consumer to skip them.
//!
//! # Example Usage
//!
//! ```
//! use equilex_lex::{Scanner, TokenKind};
//!
//! let source = "IF total > 100.50 THEN\n  alert \"big\"\nENDIF";
//! let mut scanner = Scanner::new(source.as_bytes());
//!
//! let first = scanner.next_token().unwrap();
//! assert_eq!(first.kind, TokenKind::If);
//! assert_eq!(first.literal, "IF");
//!
//! // The scanner is also an iterator that stops before end of input.
//! let significant: Vec<TokenKind> = scanner
//!     .map(|t| t.unwrap().kind)
//!     .filter(|k| !k.is_trivia())
//!     .collect();
//! assert_eq!(significant[0], TokenKind::Identifier);
//! assert_eq!(significant[2], TokenKind::DecimalConstant);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, the token record and the keyword table
//! - [`scanner`] - The scanner and its per-construct sub-scanners
//! - [`cursor`] - Buffered character cursor over a reader
//! - [`error`] - Scan errors and their diagnostics
//! - [`config`] - Scanner options
//!
//! # Token Categories
//!
//! ## Trivia
//!
//! Runs of spaces and tabs, runs of `\n`/`\r`, and comments: `|` to end of
//! line or a nested `|* … *|` block.
//!
//! ## Literals
//!
//! - **String**: `"single line"`, `$may span lines$`
//! - **Number**: `42`, `3.14`, `12.`
//! - **Date or time**: `'2024-01-31'`, `'10:30'`, `''`
//!
//! ## Keywords
//!
//! Matched case-insensitively: type names (`string`, `logical`, `number`,
//! `date`), control flow (`if`, `while`, `repeat`, `for`, `switch`, ...),
//! database statements (`findrecord`, `setindex`, `lookup`, ...) and
//! operators (`and`, `or`, `not`, `xor`).
//!
//! ## Special
//!
//! - **Eof**: End of input, with an empty literal
//! - **Illegal**: Any character with no meaning in the language

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod cursor;
pub mod error;
pub mod scanner;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use config::ScanConfig;
pub use cursor::Cursor;
pub use error::{QuoteKind, ScanError, ScanResult};
pub use scanner::Scanner;
pub use token::{keyword_from_ident, punctuation, Token, TokenKind};

/// Scans a complete in-memory source, stopping at the first error.
///
/// The returned tokens do not include the end-of-input token.
///
/// ```
/// use equilex_lex::tokenize;
///
/// let tokens = tokenize("a = 1").unwrap();
/// let text: String = tokens.iter().map(|t| t.literal.as_str()).collect();
/// assert_eq!(text, "a = 1");
/// ```
pub fn tokenize(source: &str) -> ScanResult<Vec<Token>> {
    Scanner::from_source(source).collect()
}
