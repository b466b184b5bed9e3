//! Errors raised while loading a maze.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::geom::Point;

/// Reasons a maze could not be loaded. A failed load never produces a
/// partially filled grid.
#[derive(Debug)]
pub enum LoadError {
    /// The header line is missing, has fewer than four integers, or holds a
    /// non-numeric token.
    MalformedHeader(String),
    /// Row or column count is not a positive 32-bit value, or the grid
    /// would exceed [`MAX_CELLS`](crate::grid::MAX_CELLS) cells.
    InvalidDimensions { rows: i64, cols: i64 },
    /// The start coordinate lies outside the grid.
    StartOutOfBounds { row: i64, col: i64, rows: i64, cols: i64 },
    /// No cell carries the exit glyph.
    NoExit,
    /// More than one cell carries the exit glyph.
    MultipleExits { first: Point, second: Point },
    /// A character that is not a maze glyph.
    InvalidGlyph { ch: char, pos: Point },
    /// The source file could not be opened or read.
    UnreadableSource { path: PathBuf, source: io::Error },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedHeader(line) => {
                write!(f, "malformed header `{line}`: expected `rows cols startRow startCol`")
            }
            Self::InvalidDimensions { rows, cols } => {
                write!(
                    f,
                    "invalid maze size {rows}x{cols}: rows and columns must be at least 1, \
                     with at most {} cells",
                    crate::grid::MAX_CELLS
                )
            }
            Self::StartOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "start coordinate ({row}, {col}) is out of bounds for a {rows}x{cols} maze"
            ),
            Self::NoExit => write!(f, "no exit"),
            Self::MultipleExits { first, second } => {
                write!(f, "more than one exit: {first} and {second}")
            }
            Self::InvalidGlyph { ch, pos } => {
                write!(f, "invalid glyph `{ch}` at {pos}")
            }
            Self::UnreadableSource { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnreadableSource { source, .. } => Some(source),
            _ => None,
        }
    }
}
