//! nuc-lex - Lexical Analyzer for the nuc Programming Language
//!
//! This crate turns one in-memory source buffer into a flat stream of
//! located tokens plus a list of lexical errors. Lexing never fails: every
//! malformed construct is recorded and skipped, and scanning resumes right
//! after it.
//!
//! # Example Usage
//!
//! ```
//! use nuc_lex::{lex, TokenKind};
//!
//! let output = lex("let x = -42; // answer");
//! assert!(!output.has_errors());
//! assert_eq!(output.tokens.len(), 5);
//! assert_eq!(output.tokens[0].kind, TokenKind::Identifier("let".into()));
//!
//! match output.tokens[3].kind {
//!     TokenKind::Number(n) => {
//!         assert!(n.negative);
//!         assert_eq!(n.mantissa, 42);
//!     },
//!     _ => unreachable!(),
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`char_class`] - Character classification
//! - [`error`] - Lexical error kinds and diagnostic codes
//! - [`config`] - Grammar switches loaded from TOML
//! - [`output`] - The result of one pass
//!
//! # Token Categories
//!
//! ## Identifiers
//!
//! An ASCII letter followed by ASCII letters, digits and underscores.
//! Keywords are not recognized here.
//!
//! ## Literals
//!
//! - **Number**: `42`, `-7`, `1_000`, `0xFF`, `0b1010`, `0o777`, `3.14`, `.5`,
//!   `2.5e-3`, decomposed into sign, mantissa, fraction and exponent
//! - **String**: `"hello\n"`
//! - **Character**: `'a'`, `'\''`
//!
//! Supported escapes are `\t`, `\n`, `\\`, `\'` and `\"`.
//!
//! ## Symbols
//!
//! `( ) [ ] { } ~ ! % ^ & * - + = / , . ? ; : |`, one token per character.
//!
//! ## Comments
//!
//! `// ...` to end of line and nestable `/* ... */`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod char_class;
pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod output;
pub mod token;

#[cfg(test)]
mod edge_cases;

use rayon::prelude::*;
use tracing::debug;

// Re-export main types for convenience
pub use char_class::CharClass;
pub use config::{ConfigError, ConfigResult, LexConfig};
pub use cursor::Cursor;
pub use error::{LexError, LexErrorKind};
pub use lexer::Lexer;
pub use output::LexOutput;
pub use token::{Number, Token, TokenKind};

/// Lexes `source` with the default configuration.
pub fn lex(source: &str) -> LexOutput {
    lex_with_config(source, &LexConfig::default())
}

/// Lexes `source` with an explicit configuration.
pub fn lex_with_config(source: &str, config: &LexConfig) -> LexOutput {
    Lexer::new(source, *config).tokenize()
}

/// Lexes independent buffers in parallel.
///
/// Each buffer gets its own pass; outputs are returned in input order.
///
/// ```
/// use nuc_lex::{lex_batch, LexConfig};
///
/// let outputs = lex_batch(&["a b", "#", ""], &LexConfig::default());
/// assert_eq!(outputs.len(), 3);
/// assert_eq!(outputs[0].tokens.len(), 2);
/// assert!(outputs[1].has_errors());
/// ```
pub fn lex_batch<S>(sources: &[S], config: &LexConfig) -> Vec<LexOutput>
where
    S: AsRef<str> + Sync,
{
    debug!(buffers = sources.len(), "lexing batch");
    sources
        .par_iter()
        .map(|source| lex_with_config(source.as_ref(), config))
        .collect()
}
