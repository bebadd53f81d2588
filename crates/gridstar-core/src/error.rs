use std::fmt;

use crate::geom::Point;

/// Errors produced when building or editing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is not positive.
    InvalidSize { width: i32, height: i32 },
    /// A coordinate falls outside the grid.
    OutOfBounds(Point),
    /// Layout lines have inconsistent widths.
    InconsistentSize(String),
    /// A layout character outside the `.#SE` alphabet.
    InvalidRune { ch: char, pos: Point },
    /// A layout contains a second start or end marker.
    DuplicateMarker { ch: char, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "grid: invalid size {width}x{height}")
            }
            Self::OutOfBounds(p) => write!(f, "grid: position {p} out of bounds"),
            Self::InconsistentSize(s) => write!(f, "layout: inconsistent size:\n{s}"),
            Self::InvalidRune { ch, pos } => {
                write!(f, "layout contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::DuplicateMarker { ch, pos } => {
                write!(f, "layout: duplicate \u{201c}{ch}\u{201d} marker at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}
