//! Core scanner implementation.
//!
//! This module contains the Scanner struct, the dispatch on the first
//! lookahead character, and the helpers every sub-scanner shares.

use std::io::Read;
use std::iter::FusedIterator;

use equilex_util::Span;
use log::{debug, trace};

use crate::config::ScanConfig;
use crate::cursor::{Cursor, Mark};
use crate::error::ScanResult;
use crate::token::{punctuation, Token, TokenKind};

/// Scanner for Equinox source.
///
/// The scanner pulls characters from its reader only as far as the current
/// token needs, so tokens are produced lazily, one per
/// [`next_token`](Self::next_token) call. A scanner owns its reader and is
/// meant to be used for exactly one input.
///
/// # Example
///
/// ```
/// use equilex_lex::{Scanner, TokenKind};
///
/// let mut scanner = Scanner::new("if x".as_bytes());
/// assert_eq!(scanner.next_token().unwrap().kind, TokenKind::If);
/// assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Whitespace);
/// assert_eq!(scanner.next_token().unwrap().literal, "x");
/// assert!(scanner.next_token().unwrap().is_eof());
/// ```
pub struct Scanner<R> {
    /// Character cursor over the input.
    pub(crate) cursor: Cursor<R>,

    /// Scanner options.
    pub(crate) config: ScanConfig,

    /// Text of the token being scanned.
    pub(crate) buffer: String,

    /// Where the token being scanned started.
    token_start: Mark,

    /// Set once the iterator has yielded end of input or an error.
    finished: bool,
}

impl<R: Read> Scanner<R> {
    /// Creates a scanner with the default configuration.
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, ScanConfig::default())
    }

    /// Creates a scanner with the given configuration.
    pub fn with_config(reader: R, config: ScanConfig) -> Self {
        let cursor = Cursor::with_capacity(config.read_buffer_capacity, reader);
        let token_start = cursor.mark();
        Self {
            cursor,
            config,
            buffer: String::new(),
            token_start,
            finished: false,
        }
    }

    /// Returns the next token.
    ///
    /// Consumes exactly the characters of the returned token. At end of
    /// input returns a [`TokenKind::Eof`] token with an empty literal, on
    /// every call. An error is terminal: tokens scanned after it are not
    /// meaningful.
    pub fn next_token(&mut self) -> ScanResult<Token> {
        self.buffer.clear();
        self.token_start = self.cursor.mark();

        match self.dispatch() {
            Ok(kind) => {
                let span = self.token_span();
                let token = Token::new(kind, std::mem::take(&mut self.buffer), span);
                trace!("scanned {} {:?} at {}", token.kind, token.literal, span);
                Ok(token)
            }
            Err(err) => {
                debug!("scan failed at {}: {}", self.token_start_span(), err);
                Err(err)
            }
        }
    }

    /// Picks the sub-scanner from the first lookahead character.
    fn dispatch(&mut self) -> ScanResult<TokenKind> {
        let Some(c) = self.peek(0)? else {
            return Ok(TokenKind::Eof);
        };

        match c {
            ' ' | '\t' => self.scan_whitespace(),
            '|' => self.scan_comment(),
            '"' => self.scan_double_quoted(),
            '$' => self.scan_dollar_quoted(),
            '\'' => self.scan_date_or_time(),
            '\n' | '\r' => self.scan_newline(),
            c if c.is_ascii_digit() => self.scan_number(),
            c if c.is_ascii_alphabetic() || c == '_' => self.scan_identifier(),
            c => {
                self.bump()?;
                Ok(punctuation(c).unwrap_or(TokenKind::Illegal))
            }
        }
    }

    /// Peeks `offset` characters ahead without consuming.
    #[inline]
    pub(crate) fn peek(&mut self, offset: usize) -> ScanResult<Option<char>> {
        Ok(self.cursor.peek_char(offset)?)
    }

    /// Consumes one character into the token buffer.
    #[inline]
    pub(crate) fn bump(&mut self) -> ScanResult<Option<char>> {
        let c = self.cursor.advance()?;
        if let Some(c) = c {
            self.buffer.push(c);
        }
        Ok(c)
    }

    /// Consumes characters while `pred` holds.
    pub(crate) fn bump_while(&mut self, pred: impl Fn(char) -> bool) -> ScanResult<()> {
        while let Some(c) = self.peek(0)? {
            if !pred(c) {
                break;
            }
            self.bump()?;
        }
        Ok(())
    }

    /// Span from the start of the current token to the cursor.
    pub(crate) fn token_span(&self) -> Span {
        self.cursor.span_from(self.token_start)
    }

    /// Hands the partial token text over to an error.
    pub(crate) fn take_buffer(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    fn token_start_span(&self) -> Span {
        let start = self.token_start;
        Span::point(start.position, start.line, start.column)
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the byte offset of the next character to be scanned.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Releases the reader.
    pub fn into_inner(self) -> R {
        self.cursor.into_inner()
    }
}

impl<'a> Scanner<&'a [u8]> {
    /// Creates a scanner over in-memory source text.
    pub fn from_source(source: &'a str) -> Self {
        Self::new(source.as_bytes())
    }
}

/// Yields tokens up to, not including, end of input. An error is yielded
/// once and ends the iteration.
impl<R: Read> Iterator for Scanner<R> {
    type Item = ScanResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_eof() => {
                self.finished = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

impl<R: Read> FusedIterator for Scanner<R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScanError;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Scanner::from_source(source)
            .map(|t| t.unwrap().kind)
            .collect()
    }

    #[test]
    fn test_eof_has_empty_literal_and_repeats() {
        let mut scanner = Scanner::from_source("");
        for _ in 0..3 {
            let token = scanner.next_token().unwrap();
            assert_eq!(token.kind, TokenKind::Eof);
            assert_eq!(token.literal, "");
            assert!(token.span.is_empty());
        }
    }

    #[test]
    fn test_next_token_and_iterator_share_state() {
        let mut scanner = Scanner::from_source("a b");
        assert_eq!(scanner.next_token().unwrap().literal, "a");
        let rest: Vec<String> = scanner.by_ref().map(|t| t.unwrap().literal).collect();
        assert_eq!(rest, vec![" ", "b"]);
        assert!(scanner.next_token().unwrap().is_eof());
    }

    #[test]
    fn test_punctuation_dispatch() {
        assert_eq!(
            kinds(",=()[]<>+-*/^&\\.;"),
            vec![
                TokenKind::Comma,
                TokenKind::Equals,
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftSquare,
                TokenKind::RightSquare,
                TokenKind::LeftAngle,
                TokenKind::RightAngle,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Multiply,
                TokenKind::Divide,
                TokenKind::Power,
                TokenKind::Ampersand,
                TokenKind::Backslash,
                TokenKind::Dot,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_illegal_characters_carry_one_char() {
        let tokens: Vec<Token> = Scanner::from_source("#é")
            .map(Result::unwrap)
            .collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Illegal);
        assert_eq!(tokens[0].literal, "#");
        assert_eq!(tokens[1].kind, TokenKind::Illegal);
        assert_eq!(tokens[1].literal, "é");
        assert_eq!(tokens[1].span, Span::new(1, 3, 1, 2));
    }

    #[test]
    fn test_nul_is_illegal_not_end_of_input() {
        assert_eq!(
            kinds("a\0b"),
            vec![TokenKind::Identifier, TokenKind::Illegal, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_only_token_characters_are_consumed() {
        let mut scanner = Scanner::from_source("abc(");
        let token = scanner.next_token().unwrap();
        assert_eq!(token.literal, "abc");
        assert_eq!(scanner.position(), 3);
        assert_eq!(scanner.next_token().unwrap().kind, TokenKind::LeftParen);
    }

    #[test]
    fn test_spans_track_lines() {
        let tokens: Vec<Token> = Scanner::from_source("a\r\n  b")
            .map(Result::unwrap)
            .collect();
        assert_eq!(tokens[0].span, Span::new(0, 1, 1, 1));
        assert_eq!(tokens[1].span, Span::new(1, 3, 1, 2));
        assert_eq!(tokens[2].span, Span::new(3, 5, 2, 1));
        assert_eq!(tokens[3].span, Span::new(5, 6, 2, 3));
    }

    #[test]
    fn test_iterator_fuses_after_error() {
        let mut scanner = Scanner::from_source("x \"open\ny");
        assert!(matches!(scanner.next(), Some(Ok(_))));
        assert!(matches!(scanner.next(), Some(Ok(_))));
        assert!(matches!(
            scanner.next(),
            Some(Err(ScanError::UnterminatedString { .. }))
        ));
        assert!(scanner.next().is_none());
        assert!(scanner.next().is_none());
    }

    #[test]
    fn test_read_error_is_reported() {
        let mut scanner = Scanner::new(&[b'a', b'(', 0xC0, b'b'][..]);
        assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Identifier);
        assert_eq!(scanner.next_token().unwrap().kind, TokenKind::LeftParen);
        assert!(matches!(scanner.next_token(), Err(ScanError::Io(_))));
    }

    #[test]
    fn test_small_read_buffer() {
        let config = ScanConfig::new().read_buffer_capacity(1);
        let scanner = Scanner::with_config("|* a |* b *| *| end".as_bytes(), config);
        let tokens: Vec<Token> = scanner.map(Result::unwrap).collect();
        assert_eq!(tokens[0].literal, "|* a |* b *| *|");
        assert_eq!(tokens[2].kind, TokenKind::End);
    }

    #[test]
    fn test_into_inner() {
        let scanner = Scanner::from_source("abc");
        assert_eq!(scanner.into_inner(), b"abc");
    }
}
