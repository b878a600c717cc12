//! Comment scanning.
//!
//! `|` starts a comment running to the end of the line. `|*` starts a block
//! comment closed by `*|`; block comments nest, and the token only ends at
//! the `*|` matching the outermost opener.

use std::io::Read;

use log::trace;

use crate::error::{ScanError, ScanResult};
use crate::token::TokenKind;
use crate::Scanner;

impl<R: Read> Scanner<R> {
    /// Scans a comment starting at `|`.
    pub(crate) fn scan_comment(&mut self) -> ScanResult<TokenKind> {
        if self.peek(1)? == Some('*') {
            self.scan_block_comment()
        } else {
            self.scan_line_comment()
        }
    }

    /// Scans up to, not including, the line terminator or end of input.
    fn scan_line_comment(&mut self) -> ScanResult<TokenKind> {
        self.bump()?;
        self.bump_while(|c| c != '\n' && c != '\r')?;
        Ok(TokenKind::Comment)
    }

    /// Scans a nested block comment.
    ///
    /// The outer `|*` is consumed as a pair, so its `*` never starts a
    /// closer. Inside, each character is looked at once: a `|` before `*`
    /// opens a level and a `*` before `|` closes one, so an inner `|*|`
    /// opens and closes straight away. The closer of the outermost level is
    /// consumed whole.
    fn scan_block_comment(&mut self) -> ScanResult<TokenKind> {
        self.bump()?;
        self.bump()?;

        let mut depth: u64 = 1;
        if let Some(limit) = self.exceeded_limit(depth) {
            return Err(self.nesting_too_deep(limit));
        }

        loop {
            let Some(c) = self.bump()? else {
                return Err(ScanError::UnterminatedBlockComment {
                    buffer: self.take_buffer(),
                    span: self.token_span(),
                });
            };

            match (c, self.peek(0)?) {
                ('|', Some('*')) => {
                    depth += 1;
                    trace!("block comment nesting depth {}", depth);
                    if let Some(limit) = self.exceeded_limit(depth) {
                        self.bump()?;
                        return Err(self.nesting_too_deep(limit));
                    }
                }
                ('*', Some('|')) => {
                    depth -= 1;
                    if depth == 0 {
                        self.bump()?;
                        return Ok(TokenKind::Comment);
                    }
                }
                _ => {}
            }
        }
    }

    /// The configured nesting limit, if `depth` is past it.
    fn exceeded_limit(&self, depth: u64) -> Option<u32> {
        self.config
            .max_comment_depth
            .filter(|&limit| depth > u64::from(limit))
    }

    fn nesting_too_deep(&mut self, limit: u32) -> ScanError {
        ScanError::CommentNestingTooDeep {
            limit,
            buffer: self.take_buffer(),
            span: self.token_span(),
        }
    }
}
