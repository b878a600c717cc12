//! Quote-delimited literals.
//!
//! Three forms, all kept verbatim with their delimiters:
//! - `"…"` string constant, must close on the same line
//! - `$…$` string constant, may span lines
//! - `'…'` date or time constant, classified by its separators

use std::io::Read;

use crate::error::{QuoteKind, ScanError, ScanResult};
use crate::token::TokenKind;
use crate::Scanner;

impl<R: Read> Scanner<R> {
    /// Scans a `"`-delimited string constant.
    pub(crate) fn scan_double_quoted(&mut self) -> ScanResult<TokenKind> {
        self.bump()?;
        loop {
            match self.peek(0)? {
                Some('"') => {
                    self.bump()?;
                    return Ok(TokenKind::StringConstant);
                }
                None | Some('\n' | '\r') => {
                    return Err(self.unterminated_string(QuoteKind::Double));
                }
                Some(_) => {
                    self.bump()?;
                }
            }
        }
    }

    /// Scans a `$`-delimited string constant; line breaks are content.
    pub(crate) fn scan_dollar_quoted(&mut self) -> ScanResult<TokenKind> {
        self.bump()?;
        loop {
            match self.peek(0)? {
                Some('$') => {
                    self.bump()?;
                    return Ok(TokenKind::StringMultilineConstant);
                }
                None => return Err(self.unterminated_string(QuoteKind::Dollar)),
                Some(_) => {
                    self.bump()?;
                }
            }
        }
    }

    /// Scans a `'`-delimited date or time constant.
    ///
    /// A `-` makes the content date-like and a `:` time-like. Seeing both
    /// fails at the character that completes the pair, which is left
    /// unconsumed and reported as `next`.
    pub(crate) fn scan_date_or_time(&mut self) -> ScanResult<TokenKind> {
        self.bump()?;

        let mut is_date = false;
        let mut is_time = false;

        loop {
            let Some(c) = self.peek(0)? else {
                return Err(self.unterminated_date_or_time());
            };

            match c {
                '-' => is_date = true,
                ':' => is_time = true,
                _ => {}
            }
            if is_date && is_time {
                return Err(ScanError::MalformedDateOrTime {
                    buffer: self.take_buffer(),
                    next: c,
                    span: self.token_span(),
                });
            }

            match c {
                '\'' => {
                    self.bump()?;
                    return Ok(TokenKind::DateOrTimeConstant);
                }
                '\n' | '\r' => return Err(self.unterminated_date_or_time()),
                _ => {
                    self.bump()?;
                }
            }
        }
    }

    fn unterminated_string(&mut self, quote: QuoteKind) -> ScanError {
        ScanError::UnterminatedString {
            quote,
            buffer: self.take_buffer(),
            span: self.token_span(),
        }
    }

    fn unterminated_date_or_time(&mut self) -> ScanError {
        ScanError::UnterminatedDateOrTime {
            buffer: self.take_buffer(),
            span: self.token_span(),
        }
    }
}
