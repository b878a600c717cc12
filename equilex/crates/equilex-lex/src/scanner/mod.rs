//! Scanner module.
//!
//! This module organizes the scanner implementation into smaller, focused components:
//! - `core` - Scanner struct and dispatch
//! - `trivia` - Whitespace and newline runs
//! - `comment` - Line and nested block comments
//! - `quoted` - `"…"`, `$…$` and `'…'` literals
//! - `number` - Integer and decimal constants
//! - `identifier` - Identifier and keyword scanning

mod comment;
mod core;
mod identifier;
mod number;
mod quoted;
mod trivia;

pub use core::Scanner;
