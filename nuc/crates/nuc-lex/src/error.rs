//! Lexical error records.
//!
//! Lexical errors are diagnostics, not failures: the lexer records them next
//! to the token stream and keeps going. Each [`LexErrorKind`] has a stable
//! [`DiagnosticCode`] so a driver can group and render them.

use nuc_util::{Diagnostic, DiagnosticCode, Span};
use thiserror::Error;

/// The kinds of lexical error.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LexErrorKind {
    /// A numeric component overflowed its fixed-width field
    #[error("number too large")]
    NumberTooLarge,

    /// A character outside every token class
    #[error("unknown token")]
    UnknownToken,

    /// String literal not closed before end of line or file
    #[error("unclosed string literal")]
    StringUnclosed,

    /// Character literal not closed before end of line or file
    #[error("unclosed character literal")]
    CharUnclosed,

    /// Character literal holding more than one character
    #[error("character literal contains more than one character")]
    CharLength,

    /// Character literal holding nothing
    #[error("empty character literal")]
    CharEmpty,

    /// Numeric literal containing characters that are not digits
    #[error("invalid numeric literal")]
    InvalidLiteral,

    /// Unknown escape sequence
    #[error("invalid escape sequence")]
    InvalidEscape,

    /// Block comment still open at end of file
    #[error("unclosed block comment")]
    CommentUnclosed,
}

impl LexErrorKind {
    /// All kinds, in declaration order.
    pub const ALL: [LexErrorKind; 9] = [
        LexErrorKind::NumberTooLarge,
        LexErrorKind::UnknownToken,
        LexErrorKind::StringUnclosed,
        LexErrorKind::CharUnclosed,
        LexErrorKind::CharLength,
        LexErrorKind::CharEmpty,
        LexErrorKind::InvalidLiteral,
        LexErrorKind::InvalidEscape,
        LexErrorKind::CommentUnclosed,
    ];

    /// The stable diagnostic code for this kind.
    pub const fn code(self) -> DiagnosticCode {
        match self {
            LexErrorKind::NumberTooLarge => DiagnosticCode::E_LEX_NUMBER_TOO_LARGE,
            LexErrorKind::UnknownToken => DiagnosticCode::E_LEX_UNKNOWN_TOKEN,
            LexErrorKind::StringUnclosed => DiagnosticCode::E_LEX_STRING_UNCLOSED,
            LexErrorKind::CharUnclosed => DiagnosticCode::E_LEX_CHAR_UNCLOSED,
            LexErrorKind::CharLength => DiagnosticCode::E_LEX_CHAR_LENGTH,
            LexErrorKind::CharEmpty => DiagnosticCode::E_LEX_CHAR_EMPTY,
            LexErrorKind::InvalidLiteral => DiagnosticCode::E_LEX_INVALID_LITERAL,
            LexErrorKind::InvalidEscape => DiagnosticCode::E_LEX_INVALID_ESCAPE,
            LexErrorKind::CommentUnclosed => DiagnosticCode::E_LEX_COMMENT_UNCLOSED,
        }
    }
}

/// One lexical error: what went wrong and where.
///
/// # Example
///
/// ```
/// use nuc_lex::{LexError, LexErrorKind};
/// use nuc_util::Span;
///
/// let err = LexError::new(LexErrorKind::UnknownToken, Span::new(1, 3, 4));
/// assert_eq!(err.to_string(), "unknown token at 1:3-4");
/// assert_eq!(err.code().as_str(), "E1002");
/// ```
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
#[error("{kind} at {span}")]
pub struct LexError {
    /// What went wrong
    pub kind: LexErrorKind,
    /// Where it went wrong
    pub span: Span,
}

impl LexError {
    /// Creates a new error record.
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// The stable diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        self.kind.code()
    }

    /// Converts into an error-level diagnostic carrying the kind's code.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.kind.to_string(), self.span).with_code(self.code())
    }
}

impl From<LexError> for Diagnostic {
    fn from(err: LexError) -> Self {
        err.to_diagnostic()
    }
}
