//! Source positions.

use std::fmt;

/// A point in the source text.
///
/// `line` and `column` are 1-based; `column` counts characters, not bytes.
/// `offset` is the 0-based byte offset from the start of the text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub offset: u32,
}

impl Position {
    /// The position of the first character of any text.
    pub const START: Position = Position {
        line: 1,
        column: 1,
        offset: 0,
    };

    #[inline]
    pub const fn new(line: u32, column: u32, offset: u32) -> Self {
        Position {
            line,
            column,
            offset,
        }
    }

    /// Translate a position measured inside an extracted substring into the
    /// coordinate space of the text the substring was cut from.
    ///
    /// `origin` is the absolute position of the substring's first character.
    /// Lines after the first keep their own column; the first line is shifted
    /// right by the origin's column.
    #[inline]
    #[must_use]
    pub const fn rebase(self, origin: Position) -> Position {
        let column = if self.line == 1 {
            origin.column + self.column - 1
        } else {
            self.column
        };
        Position {
            line: origin.line + self.line - 1,
            column,
            offset: origin.offset + self.offset,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
