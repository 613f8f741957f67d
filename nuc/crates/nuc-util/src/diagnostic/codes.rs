//! Diagnostic codes for categorizing compiler errors.
//!
//! This module provides the [`DiagnosticCode`] type for uniquely identifying
//! diagnostic messages, so tooling can group, look up and deduplicate them.
//!
//! # Examples
//!
//! ```
//! use nuc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEX_UNKNOWN_TOKEN;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1002);
//! assert_eq!(code.as_str(), "E1002");
//! ```

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where:
/// - `prefix` is "E" for errors
/// - `number` is a 4-digit number (padded with zeros)
///
/// Lexer codes live in the `1000` range.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use nuc_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("E", 1001);
    /// assert_eq!(code.prefix(), "E");
    /// assert_eq!(code.number(), 1001);
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER ERROR CODES (E1001-E1099)
    // =========================================================================

    /// E1001: Numeric literal does not fit its fixed-width field
    pub const E_LEX_NUMBER_TOO_LARGE: Self = Self::new("E", 1001);
    /// E1002: Character outside every token class
    pub const E_LEX_UNKNOWN_TOKEN: Self = Self::new("E", 1002);
    /// E1003: String literal not closed before end of line or file
    pub const E_LEX_STRING_UNCLOSED: Self = Self::new("E", 1003);
    /// E1004: Character literal not closed before end of line or file
    pub const E_LEX_CHAR_UNCLOSED: Self = Self::new("E", 1004);
    /// E1005: Character literal holds more than one character
    pub const E_LEX_CHAR_LENGTH: Self = Self::new("E", 1005);
    /// E1006: Character literal is empty
    pub const E_LEX_CHAR_EMPTY: Self = Self::new("E", 1006);
    /// E1007: Numeric literal contains invalid characters
    pub const E_LEX_INVALID_LITERAL: Self = Self::new("E", 1007);
    /// E1008: Unknown escape sequence in a string or character literal
    pub const E_LEX_INVALID_ESCAPE: Self = Self::new("E", 1008);
    /// E1009: Block comment not closed before end of file
    pub const E_LEX_COMMENT_UNCLOSED: Self = Self::new("E", 1009);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
