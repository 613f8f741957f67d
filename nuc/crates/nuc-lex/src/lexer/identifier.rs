//! Identifier lexing.
//!
//! Keywords are not distinguished here; `let` is an identifier like any
//! other and the parser decides what it means.

use crate::char_class::is_ident_continue;
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier.
    ///
    /// Identifiers start with an ASCII letter, followed by ASCII letters,
    /// digits or underscores. Matching is greedy.
    pub(crate) fn lex_identifier(&mut self) {
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);

        let text = self.cursor.slice_from(self.token_start);
        self.push_token(TokenKind::Identifier(text.to_string()));
    }
}
