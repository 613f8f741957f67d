//! Symbol lexing.
//!
//! Every symbol is a single character; compound operators such as `==` or
//! `->` are left for the parser to assemble.

use nuc_util::Span;

use crate::error::LexErrorKind;
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Emits the current character as a `Symbol` token.
    pub(crate) fn lex_symbol(&mut self) {
        let c = self.cursor.current_char();
        self.cursor.advance();
        self.push_token(TokenKind::Symbol(c));
    }

    /// Reports a character that starts no construct and skips it.
    pub(crate) fn lex_unknown(&mut self) {
        self.cursor.advance();
        self.report(LexErrorKind::UnknownToken, Span::at(self.token_start_pos, 1));
    }
}

#[cfg(test)]
mod tests {
    use crate::char_class::SYMBOLS;
    use crate::error::LexErrorKind;
    use crate::lex;
    use nuc_util::Span;

    #[test]
    fn test_every_symbol_lexes_alone() {
        for &c in SYMBOLS {
            let output = lex(&c.to_string());
            assert_eq!(output.tokens.len(), 1, "{:?}", c);
            assert!(output.tokens[0].kind.is_symbol(c));
            assert_eq!(output.tokens[0].span, Span::new(1, 1, 2));
            assert!(output.errors.is_empty());
        }
    }

    #[test]
    fn test_compound_operators_split() {
        let output = lex("==-|");
        let symbols: Vec<_> = output.tokens.iter().map(|t| t.to_string()).collect();
        assert_eq!(symbols, vec!["= at 1:1-2", "= at 1:2-3", "- at 1:3-4", "| at 1:4-5"]);
        assert!(output.errors.is_empty());
    }

    #[test]
    fn test_arrow_head_is_not_a_symbol() {
        let output = lex("->");
        assert_eq!(output.tokens.len(), 1);
        assert!(output.tokens[0].kind.is_symbol('-'));
        assert_eq!(output.errors.len(), 1);
        assert_eq!(output.errors[0].kind, LexErrorKind::UnknownToken);
        assert_eq!(output.errors[0].span, Span::new(1, 2, 3));
    }

    #[test]
    fn test_unknown_characters() {
        let output = lex("a # b");
        assert_eq!(output.tokens.len(), 2);
        assert_eq!(output.errors.len(), 1);
        assert_eq!(output.errors[0].kind, LexErrorKind::UnknownToken);
        assert_eq!(output.errors[0].span, Span::new(1, 3, 4));
    }

    #[test]
    fn test_unknown_runs_report_each_character() {
        let output = lex("@$`");
        assert!(output.tokens.is_empty());
        let columns: Vec<_> = output.errors.iter().map(|e| e.span.start_column).collect();
        assert_eq!(columns, vec![1, 2, 3]);
    }

    #[test]
    fn test_non_ascii_is_unknown() {
        let output = lex("λ");
        assert_eq!(output.errors.len(), 1);
        assert_eq!(output.errors[0].span, Span::new(1, 1, 2));
    }
}
