//! Core error types for nuc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for span construction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpanError {
    /// Line or column was zero; both are 1-based
    #[error("Invalid position {line}:{column}: lines and columns start at 1")]
    ZeroBased {
        /// Offending line number
        line: u32,
        /// Offending column number
        column: u32,
    },

    /// Start column is after end column
    #[error("Invalid span: start column {start} > end column {end}")]
    Inverted {
        /// First covered column
        start: u32,
        /// Column just past the span
        end: u32,
    },
}

/// Result type alias for span operations
pub type SpanResult<T> = std::result::Result<T, SpanError>;
