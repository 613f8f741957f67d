//! Lexer module.
//!
//! The lexer is split into one file per sub-scanner:
//! - `core` - Lexer struct, dispatch loop, token/error recording
//! - `comment` - Line and nested block comment skipping
//! - `identifier` - Identifier lexing
//! - `number` - Number literal lexing and sign folding
//! - `string` - String and character literal lexing
//! - `symbol` - Single-character symbols and unknown characters

mod comment;
mod core;
mod identifier;
mod number;
mod string;
mod symbol;

pub use self::core::Lexer;
