//! Token definitions for the nuc lexer.
//!
//! A [`Token`] is a [`TokenKind`] plus the [`Span`] it was lexed from. The
//! lexer makes no keyword distinction and recognizes no multi-character
//! operators; both are left to the parser.

use std::fmt;

use nuc_util::Span;

/// A decomposed numeric literal.
///
/// The lexer does not interpret the value; it splits it into fixed-width
/// components for a later phase to combine:
///
/// `(-1)^negative × (mantissa + fraction × 10^-fraction_digits) × 10^exponent`
///
/// `fraction_digits` records how many fraction digits were written, which
/// keeps `1.5` and `1.05` apart even though both have `fraction == 5`.
///
/// # Example
///
/// ```
/// use nuc_lex::{lex, Number, TokenKind};
///
/// let output = lex("1.05e-3");
/// assert_eq!(
///     output.tokens[0].kind,
///     TokenKind::Number(Number {
///         negative: false,
///         mantissa: 1,
///         fraction: 5,
///         fraction_digits: 2,
///         exponent: -3,
///     })
/// );
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Number {
    /// Set when a prefix-position `-` was folded into the literal
    pub negative: bool,
    /// Integer part, in the literal's radix
    pub mantissa: u64,
    /// Digits after the decimal point, as a decimal integer
    pub fraction: u64,
    /// Number of fraction digits written (leading zeros included)
    pub fraction_digits: u32,
    /// Decimal exponent
    pub exponent: i32,
}

impl Number {
    /// A non-negative integer with no fraction or exponent.
    pub const fn integer(mantissa: u64) -> Self {
        Self {
            negative: false,
            mantissa,
            fraction: 0,
            fraction_digits: 0,
            exponent: 0,
        }
    }

    /// Returns true if the literal had a fraction or an exponent.
    pub const fn is_fractional(&self) -> bool {
        self.fraction_digits > 0 || self.exponent != 0
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "{}", self.mantissa)?;
        if self.fraction_digits > 0 {
            write!(
                f,
                ".{:0width$}",
                self.fraction,
                width = self.fraction_digits as usize
            )?;
        }
        if self.exponent != 0 {
            write!(f, "e{}", self.exponent)?;
        }
        Ok(())
    }
}

/// The kind-specific payload of a token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Letter-led run of letters, digits and underscores
    Identifier(String),
    /// Numeric literal
    Number(Number),
    /// Character literal; `'\0'` when the literal was empty
    Char(char),
    /// String literal with escapes resolved
    String(String),
    /// One character from the fixed symbol set
    Symbol(char),
}

impl TokenKind {
    /// Returns true if the token ends an operand.
    ///
    /// A `-` directly after such a token is a binary operator, so it is never
    /// folded into a following number.
    pub fn is_value(&self) -> bool {
        match self {
            TokenKind::Identifier(_)
            | TokenKind::Number(_)
            | TokenKind::Char(_)
            | TokenKind::String(_) => true,
            TokenKind::Symbol(c) => matches!(c, ')' | ']' | '}'),
        }
    }

    /// Returns true if this is the given symbol.
    pub fn is_symbol(&self, symbol: char) -> bool {
        matches!(self, TokenKind::Symbol(c) if *c == symbol)
    }

    /// Returns the text of an identifier, if this is one.
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            TokenKind::Identifier(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier(name) => write!(f, "{}", name),
            TokenKind::Number(n) => write!(f, "{}", n),
            TokenKind::Char(c) => write!(f, "{:?}", c),
            TokenKind::String(s) => write!(f, "{:?}", s),
            TokenKind::Symbol(c) => write!(f, "{}", c),
        }
    }
}

/// A classified, located fragment of source text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// What was lexed
    pub kind: TokenKind,
    /// Where it was lexed from
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.span)
    }
}
