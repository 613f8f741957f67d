//! Comment skipping.
//!
//! This module handles skipping line and block comments. Comments never
//! produce tokens.

use nuc_util::Span;

use crate::error::LexErrorKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips a line comment (from `//` up to, not including, the newline).
    pub(crate) fn skip_line_comment(&mut self) {
        self.cursor.advance_n(2);
        while !self.cursor.is_at_end() && !self.cursor.is_at_newline() {
            self.cursor.advance();
        }
    }

    /// Skips a block comment.
    ///
    /// Block comments nest: every `/*` must be matched by a `*/`. Depth is
    /// only bounded by the counter's width. A comment still open at end of
    /// file is reported as [`LexErrorKind::CommentUnclosed`], spanning from
    /// the opening `/*` to the end of its first line.
    pub(crate) fn skip_block_comment(&mut self) {
        let open = self.cursor.pos();
        let mut first_line_end = None;
        let mut depth: u64 = 1;

        self.cursor.advance_n(2);

        while depth > 0 && !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            let next = self.cursor.peek_char(1);

            if c == '/' && next == '*' {
                self.cursor.advance_n(2);
                depth += 1;
            } else if c == '*' && next == '/' {
                self.cursor.advance_n(2);
                depth -= 1;
            } else {
                if first_line_end.is_none() && self.cursor.is_at_newline() {
                    first_line_end = Some(self.cursor.column());
                }
                self.cursor.advance();
            }
        }

        if depth > 0 {
            let end = first_line_end.unwrap_or_else(|| self.cursor.column());
            self.report(
                LexErrorKind::CommentUnclosed,
                Span::new(open.line, open.column, end),
            );
        }
    }
}
