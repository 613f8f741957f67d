//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the dispatch loop and the
//! helpers sub-scanners use to emit tokens and record errors.

use nuc_util::{Position, Span};
use tracing::{debug, debug_span, trace};

use crate::char_class::CharClass;
use crate::config::LexConfig;
use crate::cursor::Cursor;
use crate::error::{LexError, LexErrorKind};
use crate::output::LexOutput;
use crate::token::{Token, TokenKind};

/// Lexer for the nuc programming language.
///
/// A `Lexer` makes one pass over one buffer. Each iteration classifies the
/// current character once and hands off to a sub-scanner, which advances
/// past its construct and emits at most one token plus any errors.
///
/// # Example
///
/// ```
/// use nuc_lex::{LexConfig, Lexer, TokenKind};
///
/// let output = Lexer::new("f(x)", LexConfig::default()).tokenize();
/// assert_eq!(output.tokens.len(), 4);
/// assert_eq!(output.tokens[0].kind, TokenKind::Identifier("f".into()));
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Grammar switches.
    pub(crate) config: LexConfig,

    /// Tokens emitted so far.
    pub(crate) tokens: Vec<Token>,

    /// Errors recorded so far.
    pub(crate) errors: Vec<LexError>,

    /// Byte offset where the current construct starts.
    pub(crate) token_start: usize,

    /// Line/column where the current construct starts.
    pub(crate) token_start_pos: Position,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str, config: LexConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            config,
            tokens: Vec::new(),
            errors: Vec::new(),
            token_start: 0,
            token_start_pos: Position::START,
        }
    }

    /// Runs the pass to the end of the buffer.
    ///
    /// Never fails: malformed input shows up in [`LexOutput::errors`].
    pub fn tokenize(mut self) -> LexOutput {
        let span = debug_span!("lex", bytes = self.cursor.remaining().len());
        let _enter = span.enter();

        while !self.cursor.is_at_end() {
            self.scan_next();
        }

        debug!(
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            "lexing finished"
        );
        LexOutput::new(self.tokens, self.errors)
    }

    /// Lexes whatever starts at the cursor. Always advances.
    fn scan_next(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_pos = self.cursor.pos();

        let c = self.cursor.current_char();
        match CharClass::of(c) {
            CharClass::Newline | CharClass::Whitespace => self.cursor.advance(),
            CharClass::Slash => match self.cursor.peek_char(1) {
                '/' => self.skip_line_comment(),
                '*' => self.skip_block_comment(),
                _ => self.lex_symbol(),
            },
            CharClass::Letter => self.lex_identifier(),
            CharClass::Digit => self.lex_number(),
            CharClass::Quote => self.lex_literal(),
            CharClass::Symbol => self.lex_symbol(),
            CharClass::Other => self.lex_unknown(),
        }
    }

    /// Span from the start of the current construct to the cursor.
    ///
    /// Only valid while the construct has not crossed a newline.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(
            self.token_start_pos.line,
            self.token_start_pos.column,
            self.cursor.column(),
        )
    }

    /// Emits a token spanning the current construct.
    pub(crate) fn push_token(&mut self, kind: TokenKind) {
        let span = self.token_span();
        self.tokens.push(Token::new(kind, span));
    }

    /// Records a lexical error.
    pub(crate) fn report(&mut self, kind: LexErrorKind, span: Span) {
        trace!(
            kind = ?kind,
            line = span.line,
            start = span.start_column,
            end = span.end_column,
            "lexical error"
        );
        self.errors.push(LexError::new(kind, span));
    }

    /// Current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }
}
