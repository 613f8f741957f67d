//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides the record type phases use to report problems to a
//! driver ([`Diagnostic`]), the stable codes attached to them
//! ([`DiagnosticCode`]), and a collecting sink ([`Handler`]).
//!
//! Rendering diagnostics for humans is the driver's job; nothing here prints.
//!
//! # Examples
//!
//! ```
//! use nuc_util::diagnostic::{Diagnostic, DiagnosticCode, Handler};
//! use nuc_util::Span;
//!
//! let handler = Handler::new();
//! handler.emit(
//!     Diagnostic::error("unknown token", Span::new(1, 4, 5))
//!         .with_code(DiagnosticCode::E_LEX_UNKNOWN_TOKEN),
//! );
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.error_count(), 1);
//! ```

mod codes;

pub use codes::DiagnosticCode;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use nuc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Note), "note");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    /// An error; the caller decides whether it stops compilation
    Error,
    /// A warning that doesn't prevent compilation
    Warning,
    /// Additional information about a diagnostic
    Note,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
        }
    }

    /// Create an error diagnostic
    ///
    /// # Examples
    ///
    /// ```
    /// use nuc_util::diagnostic::{Diagnostic, Level};
    /// use nuc_util::Span;
    ///
    /// let diag = Diagnostic::error("something went wrong", Span::DUMMY);
    /// assert_eq!(diag.level, Level::Error);
    /// ```
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Attach a diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {} at {}", self.level, code, self.message, self.span),
            None => write!(f, "{}: {} at {}", self.level, self.message, self.span),
        }
    }
}

/// Collecting sink for diagnostics
///
/// Diagnostics are kept in emission order.
#[derive(Debug, Default)]
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic
    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Returns true if any error-level diagnostic was emitted
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Number of error-level diagnostics
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Snapshot of all collected diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Drain all collected diagnostics, leaving the handler empty
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_starts_empty() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
        assert!(handler.diagnostics().is_empty());
    }

    #[test]
    fn test_handler_counts_only_errors() {
        let handler = Handler::new();
        handler.emit(Diagnostic::warning("odd", Span::DUMMY));
        assert!(!handler.has_errors());

        handler.emit(Diagnostic::error("bad", Span::DUMMY));
        handler.emit(Diagnostic::error("worse", Span::DUMMY));
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 2);
        assert_eq!(handler.diagnostics().len(), 3);
    }

    #[test]
    fn test_handler_preserves_order() {
        let handler = Handler::new();
        handler.emit(Diagnostic::error("first", Span::new(1, 1, 2)));
        handler.emit(Diagnostic::error("second", Span::new(2, 1, 2)));
        let messages: Vec<_> = handler
            .diagnostics()
            .into_iter()
            .map(|d| d.message)
            .collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_take_diagnostics_drains() {
        let handler = Handler::new();
        handler.emit(Diagnostic::error("bad", Span::DUMMY));
        assert_eq!(handler.take_diagnostics().len(), 1);
        assert!(handler.diagnostics().is_empty());
    }

    #[test]
    fn test_diagnostic_display_with_code() {
        let diag = Diagnostic::error("unknown token", Span::new(2, 3, 4))
            .with_code(DiagnosticCode::E_LEX_UNKNOWN_TOKEN);
        assert_eq!(diag.to_string(), "error[E1002]: unknown token at 2:3-4");
    }

    #[test]
    fn test_diagnostic_display_without_code() {
        let diag = Diagnostic::warning("odd", Span::new(1, 1, 2));
        assert_eq!(diag.to_string(), "warning: odd at 1:1-2");
    }
}
