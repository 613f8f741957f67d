//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code one Unicode scalar value at a time.
//! Line and column are derived state: they only change through
//! [`Cursor::advance`], which is the single place newline handling lives.
//!
//! A line terminator is `\n`, `\r\n` or a lone `\r`. A `\r\n` pair is one
//! logical newline and is consumed by a single `advance`.

use nuc_util::Position;

/// A cursor for traversing source code character by character.
///
/// # Example
///
/// ```
/// use nuc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("ab\r\nc");
/// assert_eq!(cursor.current_char(), 'a');
/// cursor.advance_n(2);
/// assert!(cursor.is_at_newline());
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'c');
/// assert_eq!((cursor.line(), cursor.column()), (2, 1));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in scalar values).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current character at the cursor position.
    ///
    /// Returns '\0' if at the end of the source. Use
    /// [`is_at_end`](Self::is_at_end) to tell the end apart from an interior
    /// null character.
    #[inline]
    pub fn current_char(&self) -> char {
        self.remaining().chars().next().unwrap_or('\0')
    }

    /// Returns the character `offset` scalar values ahead (0 = current).
    ///
    /// Returns '\0' past the end of the source.
    ///
    /// ```
    /// use nuc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("aé/");
    /// assert_eq!(cursor.peek_char(1), 'é');
    /// assert_eq!(cursor.peek_char(2), '/');
    /// assert_eq!(cursor.peek_char(3), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        self.remaining().chars().nth(offset).unwrap_or('\0')
    }

    /// Advances past the current character.
    ///
    /// A line terminator bumps the line and resets the column; `\r\n` is
    /// consumed as a unit. Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.remaining().chars().next() else {
            return;
        };

        self.position += c.len_utf8();
        match c {
            '\r' => {
                if self.remaining().starts_with('\n') {
                    self.position += 1;
                }
                self.new_line();
            },
            '\n' => self.new_line(),
            _ => self.column += 1,
        }
    }

    /// Advances the cursor by the given number of characters.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Advances while `predicate` holds for the current character.
    ///
    /// Returns the number of characters consumed.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
            count += 1;
        }
        count
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns true if the current character starts a line terminator.
    #[inline]
    pub fn is_at_newline(&self) -> bool {
        matches!(self.remaining().as_bytes().first(), Some(b'\n' | b'\r'))
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current line and column.
    #[inline]
    pub fn pos(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Returns the current byte position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the unconsumed part of the source.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the source text from byte `start` up to the cursor.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    #[inline]
    fn new_line(&mut self) {
        self.line += 1;
        self.column = 1;
    }
}
