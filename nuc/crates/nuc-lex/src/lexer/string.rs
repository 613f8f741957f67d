//! String and character literal lexing.
//!
//! Both literal forms share one scanner; the opening quote decides which
//! closing quote ends the literal, which unclosed-error kind applies and
//! which token is emitted. A token is emitted for every literal, however
//! malformed.

use nuc_util::Span;

use crate::error::LexErrorKind;
use crate::token::TokenKind;
use crate::Lexer;

/// Which literal form is being scanned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LiteralKind {
    String,
    Char,
}

impl LiteralKind {
    fn from_quote(quote: char) -> Self {
        if quote == '\'' {
            LiteralKind::Char
        } else {
            LiteralKind::String
        }
    }

    fn unclosed(self) -> LexErrorKind {
        match self {
            LiteralKind::String => LexErrorKind::StringUnclosed,
            LiteralKind::Char => LexErrorKind::CharUnclosed,
        }
    }
}

/// Decodes the character after a backslash.
///
/// Handles: `\t`, `\n`, `\\`, `\'`, `\"`
fn decode_escape(c: char) -> Option<char> {
    match c {
        't' => Some('\t'),
        'n' => Some('\n'),
        '\\' => Some('\\'),
        '\'' => Some('\''),
        '"' => Some('"'),
        _ => None,
    }
}

impl<'a> Lexer<'a> {
    /// Lexes a string (`"…"`) or character (`'…'`) literal.
    ///
    /// The scan ends at the matching quote, at a raw line terminator (left
    /// unconsumed), or at end of file. An unknown escape is reported and its
    /// character dropped; a backslash with nothing after it on the line
    /// leaves the literal unclosed.
    pub(crate) fn lex_literal(&mut self) {
        let quote = self.cursor.current_char();
        let kind = LiteralKind::from_quote(quote);
        self.cursor.advance();

        let mut decoded = String::new();
        let mut closed = false;

        while !self.cursor.is_at_end() && !self.cursor.is_at_newline() {
            let c = self.cursor.current_char();

            if c == quote {
                self.cursor.advance();
                closed = true;
                break;
            }

            if c != '\\' {
                decoded.push(c);
                self.cursor.advance();
                continue;
            }

            let escape_start = self.cursor.pos();
            self.cursor.advance();
            if self.cursor.is_at_end() || self.cursor.is_at_newline() {
                break;
            }

            let escaped = self.cursor.current_char();
            self.cursor.advance();
            match decode_escape(escaped) {
                Some(value) => decoded.push(value),
                None => self.report(LexErrorKind::InvalidEscape, Span::at(escape_start, 2)),
            }
        }

        let span = self.token_span();
        if !closed {
            self.report(kind.unclosed(), span);
        }

        match kind {
            LiteralKind::String => self.push_token(TokenKind::String(decoded)),
            LiteralKind::Char => {
                let mut chars = decoded.chars();
                let value = match (chars.next(), chars.next()) {
                    (None, _) => {
                        self.report(LexErrorKind::CharEmpty, span);
                        '\0'
                    },
                    (Some(first), Some(_)) => {
                        self.report(LexErrorKind::CharLength, span);
                        first
                    },
                    (Some(only), None) => only,
                };
                self.push_token(TokenKind::Char(value));
            },
        }
    }
}
