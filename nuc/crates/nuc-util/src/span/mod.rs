//! Span module - Source location tracking.
//!
//! This module provides the two location types shared by every phase:
//! [`Position`] (a single line/column point) and [`Span`] (a half-open,
//! single-line column range).
//!
//! Columns count Unicode scalar values, not bytes, and both lines and columns
//! are 1-based.
//!
//! # Examples
//!
//! ```
//! use nuc_util::span::{Position, Span};
//!
//! // `foo` at the start of line 3
//! let span = Span::new(3, 1, 4);
//! assert_eq!(span.width(), 3);
//! assert_eq!(span.start(), Position::new(3, 1));
//! assert_eq!(span.end(), Position::new(3, 4));
//! ```

use std::fmt;

use crate::error::{SpanError, SpanResult};

/// A single point in the source: line and column, both 1-based.
///
/// # Examples
///
/// ```
/// use nuc_util::span::Position;
///
/// let pos = Position::new(2, 7);
/// assert_eq!(format!("{}", pos), "2:7");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in scalar values)
    pub column: u32,
}

impl Position {
    /// The first position of any buffer.
    pub const START: Position = Position { line: 1, column: 1 };

    /// Create a new position
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    #[inline]
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Source location span
///
/// A `Span` is the triple `(line, start_column, end_column)`. It is half-open:
/// `end_column` is the column immediately after the construct's last
/// character, so `end_column - start_column` is the construct's width.
///
/// Spans never cross a line boundary.
///
/// # Examples
///
/// ```
/// use nuc_util::span::Span;
///
/// let span = Span::new(1, 5, 9);
/// assert_eq!(span.width(), 4);
/// assert!(span.contains(5));
/// assert!(!span.contains(9));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    /// Line number (1-based)
    pub line: u32,
    /// First column covered (1-based)
    pub start_column: u32,
    /// Column one past the last covered column
    pub end_column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use nuc_util::span::Span;
    ///
    /// assert!(Span::DUMMY.is_empty());
    /// ```
    pub const DUMMY: Span = Span {
        line: 1,
        start_column: 1,
        end_column: 1,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `line` - Line number (1-based)
    /// * `start_column` - First covered column (1-based)
    /// * `end_column` - Column one past the last covered column
    #[inline]
    pub const fn new(line: u32, start_column: u32, end_column: u32) -> Self {
        Self {
            line,
            start_column,
            end_column,
        }
    }

    /// Create a span, validating that it describes a real source range.
    ///
    /// # Examples
    ///
    /// ```
    /// use nuc_util::span::Span;
    ///
    /// assert!(Span::try_new(1, 3, 5).is_ok());
    /// assert!(Span::try_new(1, 5, 3).is_err());
    /// assert!(Span::try_new(0, 1, 2).is_err());
    /// ```
    pub fn try_new(line: u32, start_column: u32, end_column: u32) -> SpanResult<Self> {
        if line == 0 || start_column == 0 {
            return Err(SpanError::ZeroBased {
                line,
                column: start_column,
            });
        }
        if start_column > end_column {
            return Err(SpanError::Inverted {
                start: start_column,
                end: end_column,
            });
        }
        Ok(Self::new(line, start_column, end_column))
    }

    /// Create a span covering `width` columns starting at `start`.
    #[inline]
    pub const fn at(start: Position, width: u32) -> Self {
        Self::new(start.line, start.column, start.column + width)
    }

    /// Create an empty span at a single position
    #[inline]
    pub const fn point(pos: Position) -> Self {
        Self::new(pos.line, pos.column, pos.column)
    }

    /// Number of columns covered
    #[inline]
    pub const fn width(&self) -> u32 {
        self.end_column - self.start_column
    }

    /// Returns true if the span covers no columns
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start_column == self.end_column
    }

    /// The first covered position
    #[inline]
    pub const fn start(&self) -> Position {
        Position::new(self.line, self.start_column)
    }

    /// The position just past the span
    #[inline]
    pub const fn end(&self) -> Position {
        Position::new(self.line, self.end_column)
    }

    /// Returns true if `column` on this span's line is covered
    #[inline]
    pub const fn contains(&self, column: u32) -> bool {
        self.start_column <= column && column < self.end_column
    }

    /// Returns true if the two spans share at least one column
    #[inline]
    pub const fn overlaps(&self, other: Span) -> bool {
        self.line == other.line
            && self.start_column < other.end_column
            && other.start_column < self.end_column
    }

    /// Join with a span that starts exactly where this one ends.
    ///
    /// Returns `None` when the spans are on different lines or not adjacent.
    ///
    /// # Examples
    ///
    /// ```
    /// use nuc_util::span::Span;
    ///
    /// let minus = Span::new(1, 4, 5);
    /// let digits = Span::new(1, 5, 7);
    /// assert_eq!(minus.to(digits), Some(Span::new(1, 4, 7)));
    /// assert_eq!(minus.to(Span::new(1, 6, 7)), None);
    /// ```
    #[inline]
    pub fn to(self, other: Span) -> Option<Span> {
        if self.line == other.line && self.end_column == other.start_column {
            Some(Span::new(self.line, self.start_column, other.end_column))
        } else {
            None
        }
    }
}

impl Default for Span {
    #[inline]
    fn default() -> Self {
        Self::DUMMY
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.line, self.start_column, self.end_column)
    }
}
