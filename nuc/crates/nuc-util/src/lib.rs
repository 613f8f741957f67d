//! nuc-util - Core Utilities and Foundation Types
//!
//! Foundation types shared by every phase of the nuc toolchain:
//!
//! - [`span`] - line/column locations ([`Position`], [`Span`])
//! - [`diagnostic`] - diagnostic records, stable codes and a collecting [`Handler`]
//! - [`error`] - error types for the foundation operations
//!
//! Hash maps keyed by small `Copy` values use the Fx hasher; it is re-exported
//! here so every crate agrees on one map type.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticCode, Handler, Level};
pub use error::{SpanError, SpanResult};
pub use span::{Position, Span};

pub use rustc_hash::FxHashMap;
