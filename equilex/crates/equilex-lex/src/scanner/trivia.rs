//! Whitespace and newline runs.

use std::io::Read;

use crate::error::ScanResult;
use crate::token::TokenKind;
use crate::Scanner;

impl<R: Read> Scanner<R> {
    /// Scans a run of spaces and tabs.
    pub(crate) fn scan_whitespace(&mut self) -> ScanResult<TokenKind> {
        self.bump()?;
        self.bump_while(|c| c == ' ' || c == '\t')?;
        Ok(TokenKind::Whitespace)
    }

    /// Scans a run of `\n` and `\r` in any mix, so `\r\n` is one token.
    pub(crate) fn scan_newline(&mut self) -> ScanResult<TokenKind> {
        self.bump()?;
        self.bump_while(|c| c == '\n' || c == '\r')?;
        Ok(TokenKind::NewLine)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Scanner, Token, TokenKind};

    fn scan_all(source: &str) -> Vec<Token> {
        Scanner::from_source(source).map(Result::unwrap).collect()
    }

    #[test]
    fn test_whitespace_run() {
        let tokens = scan_all(" \t \tx");
        assert_eq!(tokens[0].kind, TokenKind::Whitespace);
        assert_eq!(tokens[0].literal, " \t \t");
        assert_eq!(tokens[1].literal, "x");
    }

    #[test]
    fn test_newlines_coalesce() {
        let tokens = scan_all("a\r\n\n\r\rb");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].kind, TokenKind::NewLine);
        assert_eq!(tokens[1].literal, "\r\n\n\r\r");
    }

    #[test]
    fn test_whitespace_does_not_swallow_newline() {
        let tokens = scan_all("  \n  ");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Whitespace, TokenKind::NewLine, TokenKind::Whitespace]
        );
    }
}
