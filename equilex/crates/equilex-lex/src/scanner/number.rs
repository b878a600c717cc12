//! Numeric constants.
//!
//! A number is a run of ASCII digits with at most one `.`. There is no
//! sign, exponent or digit separator; `-` is always punctuation.

use std::io::Read;

use crate::error::{ScanError, ScanResult};
use crate::token::TokenKind;
use crate::Scanner;

impl<R: Read> Scanner<R> {
    /// Scans an integer or decimal constant starting at a digit.
    ///
    /// A trailing `.` still makes a decimal (`12.`). A second `.` is
    /// consumed into the error buffer and fails the token.
    pub(crate) fn scan_number(&mut self) -> ScanResult<TokenKind> {
        self.bump()?;

        let mut kind = TokenKind::IntegerConstant;
        while let Some(c) = self.peek(0)? {
            match c {
                '0'..='9' => {
                    self.bump()?;
                }
                '.' if kind == TokenKind::IntegerConstant => {
                    self.bump()?;
                    kind = TokenKind::DecimalConstant;
                }
                '.' => {
                    self.bump()?;
                    return Err(ScanError::MalformedNumber {
                        buffer: self.take_buffer(),
                        span: self.token_span(),
                    });
                }
                _ => break,
            }
        }

        Ok(kind)
    }
}
