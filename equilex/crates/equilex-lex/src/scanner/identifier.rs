//! Identifier and keyword scanning.

use std::io::Read;

use crate::error::ScanResult;
use crate::token::{keyword_from_ident, TokenKind};
use crate::Scanner;

impl<R: Read> Scanner<R> {
    /// Scans an identifier or keyword starting at a letter or `_`.
    ///
    /// Keywords match case-insensitively; the literal keeps the source
    /// spelling.
    pub(crate) fn scan_identifier(&mut self) -> ScanResult<TokenKind> {
        self.bump()?;
        self.bump_while(|c| c.is_ascii_alphanumeric() || c == '_')?;
        Ok(keyword_from_ident(&self.buffer).unwrap_or(TokenKind::Identifier))
    }
}
