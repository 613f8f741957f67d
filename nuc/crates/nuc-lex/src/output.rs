//! The result of one lexing pass.

use nuc_util::{FxHashMap, Handler};

use crate::error::{LexError, LexErrorKind};
use crate::token::Token;

/// Tokens and lexical errors from one buffer, both in source order.
///
/// The token stream is complete even when `errors` is non-empty: malformed
/// constructs still produce a best-effort token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    /// Tokens in source order
    pub tokens: Vec<Token>,
    /// Lexical errors in the order detected
    pub errors: Vec<LexError>,
}

impl LexOutput {
    /// Bundles the two streams.
    pub fn new(tokens: Vec<Token>, errors: Vec<LexError>) -> Self {
        Self { tokens, errors }
    }

    /// Returns true if any lexical error was recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of errors per kind, for callers that group diagnostics.
    ///
    /// ```
    /// use nuc_lex::{lex, LexErrorKind};
    ///
    /// let counts = lex("# @ 'ab'").error_counts();
    /// assert_eq!(counts[&LexErrorKind::UnknownToken], 2);
    /// assert_eq!(counts[&LexErrorKind::CharLength], 1);
    /// ```
    pub fn error_counts(&self) -> FxHashMap<LexErrorKind, usize> {
        let mut counts = FxHashMap::default();
        for err in &self.errors {
            *counts.entry(err.kind).or_insert(0) += 1;
        }
        counts
    }

    /// Forwards every error to `handler` as a diagnostic, in order.
    pub fn emit_into(&self, handler: &Handler) {
        for err in &self.errors {
            handler.emit(err.to_diagnostic());
        }
    }

    /// Splits into `(tokens, errors)`.
    pub fn into_parts(self) -> (Vec<Token>, Vec<LexError>) {
        (self.tokens, self.errors)
    }
}
