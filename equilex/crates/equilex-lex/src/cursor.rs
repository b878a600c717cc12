//! Character cursor over a byte stream.
//!
//! This module provides the [`Cursor`] struct which decodes UTF-8 characters
//! from any [`Read`] source on demand and keeps a small queue of decoded
//! lookahead characters. Sub-scanners peek at that queue to decide whether a
//! character belongs to the current token and only consume it when it does,
//! so characters that end a token stay unread for the next scan.
//!
//! The cursor also tracks byte offset, line and column for spans.

use std::collections::VecDeque;
use std::io::{self, BufRead, BufReader, ErrorKind, Read};

use equilex_util::Span;

/// Default capacity of the read buffer in front of the source.
pub const DEFAULT_READ_CAPACITY: usize = 8 * 1024;

/// A cursor for traversing a source stream character by character.
///
/// # Example
///
/// ```
/// use equilex_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("if x".as_bytes());
///
/// assert_eq!(cursor.peek_char(0).unwrap(), Some('i'));
/// assert_eq!(cursor.peek_char(1).unwrap(), Some('f'));
/// cursor.advance().unwrap();
/// assert_eq!(cursor.peek_char(0).unwrap(), Some('f'));
/// ```
pub struct Cursor<R> {
    /// Buffered byte source.
    reader: BufReader<R>,

    /// Characters decoded from `reader` but not consumed yet.
    lookahead: VecDeque<char>,

    /// Set once `reader` has returned end of input.
    exhausted: bool,

    /// Byte offset of the next unconsumed character.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

/// A saved cursor location, used to build the span of a token once its
/// last character has been consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mark {
    /// Byte offset
    pub position: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl<R: Read> Cursor<R> {
    /// Creates a cursor with the default read buffer capacity.
    pub fn new(reader: R) -> Self {
        Self::with_capacity(DEFAULT_READ_CAPACITY, reader)
    }

    /// Creates a cursor whose read buffer holds `capacity` bytes.
    pub fn with_capacity(capacity: usize, reader: R) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity.max(1), reader),
            lookahead: VecDeque::with_capacity(4),
            exhausted: false,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character `offset` characters ahead of the cursor
    /// (0 = current) without consuming anything.
    ///
    /// # Example
    ///
    /// ```
    /// use equilex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("ab".as_bytes());
    /// assert_eq!(cursor.peek_char(0).unwrap(), Some('a'));
    /// assert_eq!(cursor.peek_char(1).unwrap(), Some('b'));
    /// assert_eq!(cursor.peek_char(2).unwrap(), None);
    /// ```
    pub fn peek_char(&mut self, offset: usize) -> io::Result<Option<char>> {
        while self.lookahead.len() <= offset {
            match self.decode_char()? {
                Some(c) => self.lookahead.push_back(c),
                None => return Ok(None),
            }
        }
        Ok(self.lookahead.get(offset).copied())
    }

    /// Consumes the current character and returns it.
    ///
    /// Updates line and column tracking. Returns `Ok(None)` and does nothing
    /// if already at end of input.
    pub fn advance(&mut self) -> io::Result<Option<char>> {
        if self.lookahead.is_empty() && self.peek_char(0)?.is_none() {
            return Ok(None);
        }
        let Some(c) = self.lookahead.pop_front() else {
            return Ok(None);
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Ok(Some(c))
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the byte offset of the next unconsumed character.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Saves the current location.
    pub fn mark(&self) -> Mark {
        Mark {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Span from `mark` up to the current location.
    pub fn span_from(&self, mark: Mark) -> Span {
        Span::new(mark.position, self.position, mark.line, mark.column)
    }

    /// Returns the underlying reader.
    ///
    /// Bytes already pulled into the read buffer or the lookahead queue are
    /// dropped.
    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }

    /// Decodes the next UTF-8 character from the reader.
    fn decode_char(&mut self) -> io::Result<Option<char>> {
        let Some(first) = self.next_byte()? else {
            return Ok(None);
        };
        if first.is_ascii() {
            return Ok(Some(first as char));
        }

        let width = utf8_width(first).ok_or_else(invalid_utf8)?;
        let mut bytes = [first, 0, 0, 0];
        for slot in bytes.iter_mut().take(width).skip(1) {
            *slot = self.next_byte()?.ok_or_else(invalid_utf8)?;
        }

        std::str::from_utf8(&bytes[..width])
            .map_err(|_| invalid_utf8())
            .map(|s| s.chars().next())
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        if self.exhausted {
            return Ok(None);
        }
        loop {
            let byte = match self.reader.fill_buf() {
                Ok([]) => None,
                Ok(buf) => Some(buf[0]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            match byte {
                Some(b) => {
                    self.reader.consume(1);
                    return Ok(Some(b));
                }
                None => {
                    self.exhausted = true;
                    return Ok(None);
                }
            }
        }
    }
}

/// Encoded length of a UTF-8 sequence given its leading byte.
fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

fn invalid_utf8() -> io::Error {
    io::Error::new(ErrorKind::InvalidData, "source is not valid UTF-8")
}
