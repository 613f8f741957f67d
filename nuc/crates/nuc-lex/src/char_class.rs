//! Character classification for the nuc lexer.
//!
//! Every cursor position is classified exactly once into a [`CharClass`];
//! the main loop dispatches on the class and sub-scanners use the
//! predicate helpers below for their continuation rules. Identifiers are
//! ASCII-only; any other letter is an unknown character.

/// The fixed set of single-character symbols, `/` included.
pub const SYMBOLS: &[char] = &[
    '(', ')', '[', ']', '{', '}', '~', '!', '%', '^', '&', '*', '-', '+', '=', '/', ',', '.',
    '?', ';', ':', '|',
];

/// Closed classification of a single source character.
///
/// # Example
///
/// ```
/// use nuc_lex::CharClass;
///
/// assert_eq!(CharClass::of('a'), CharClass::Letter);
/// assert_eq!(CharClass::of('7'), CharClass::Digit);
/// assert_eq!(CharClass::of('\''), CharClass::Quote);
/// assert_eq!(CharClass::of('/'), CharClass::Slash);
/// assert_eq!(CharClass::of(';'), CharClass::Symbol);
/// assert_eq!(CharClass::of('#'), CharClass::Other);
/// assert_eq!(CharClass::of('é'), CharClass::Other);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `\n` or `\r` (a `\r\n` pair is one newline)
    Newline,
    /// Space or horizontal tab
    Whitespace,
    /// `/`: a symbol unless it opens a comment
    Slash,
    /// ASCII letter
    Letter,
    /// ASCII digit
    Digit,
    /// `"` or `'`
    Quote,
    /// Any other member of [`SYMBOLS`]
    Symbol,
    /// Anything else
    Other,
}

impl CharClass {
    /// Classifies `c`.
    #[inline]
    pub fn of(c: char) -> Self {
        match c {
            '\n' | '\r' => CharClass::Newline,
            ' ' | '\t' => CharClass::Whitespace,
            '/' => CharClass::Slash,
            'a'..='z' | 'A'..='Z' => CharClass::Letter,
            '0'..='9' => CharClass::Digit,
            '"' | '\'' => CharClass::Quote,
            c if is_symbol(c) => CharClass::Symbol,
            _ => CharClass::Other,
        }
    }
}

/// Checks if a character belongs to the single-character symbol set.
#[inline]
pub fn is_symbol(c: char) -> bool {
    SYMBOLS.contains(&c)
}

/// Checks if a character can start an identifier (ASCII letter).
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Checks if a character can continue an identifier.
///
/// ```
/// use nuc_lex::char_class::is_ident_continue;
///
/// assert!(is_ident_continue('_'));
/// assert!(is_ident_continue('9'));
/// assert!(!is_ident_continue('-'));
/// assert!(!is_ident_continue('ß'));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character belongs to a numeric literal's raw run.
///
/// Letters are part of the run so that radix prefixes and exponent markers
/// are consumed; letters that mean nothing in context make the literal
/// invalid rather than ending it.
#[inline]
pub fn is_number_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
