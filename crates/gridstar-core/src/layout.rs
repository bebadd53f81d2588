//! Grids built from ASCII art.
//!
//! ```text
//! S..#
//! .#.#
//! ...E
//! ```
//!
//! `.` is a free cell, `#` an obstacle, `S` the start and `E` the end.

use crate::error::GridError;
use crate::geom::Point;
use crate::grid::Grid;

/// Characters accepted by [`Grid::parse`].
pub const LAYOUT_RUNES: &str = ".#SE";

impl Grid {
    /// Build a grid from a text layout.
    ///
    /// Each line must have the same width. Leading/trailing whitespace is
    /// trimmed from the whole string but not from individual lines.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        let mut cells: Vec<(Point, char)> = Vec::new();
        let mut x: i32 = 0;
        let mut y: i32 = 0;
        let mut w: i32 = -1;

        let mut chars = s.chars().peekable();
        while let Some(ch) = chars.next() {
            if ch == '\r' && chars.peek() == Some(&'\n') {
                continue;
            }
            if ch == '\n' {
                if w >= 0 && x != w {
                    return Err(GridError::InconsistentSize(s.to_string()));
                }
                w = x;
                x = 0;
                y += 1;
                continue;
            }
            if !LAYOUT_RUNES.contains(ch) {
                return Err(GridError::InvalidRune {
                    ch,
                    pos: Point::new(x, y),
                });
            }
            cells.push((Point::new(x, y), ch));
            x += 1;
        }
        if w >= 0 && x != w {
            return Err(GridError::InconsistentSize(s.to_string()));
        }

        let mut g = Grid::new(x, y + 1)?;
        let (mut start, mut end) = (None, None);
        for (p, ch) in cells {
            match ch {
                '#' => g.set_obstacle(p, true)?,
                'S' if start.is_some() => return Err(GridError::DuplicateMarker { ch, pos: p }),
                'E' if end.is_some() => return Err(GridError::DuplicateMarker { ch, pos: p }),
                'S' => start = Some(p),
                'E' => end = Some(p),
                _ => {}
            }
        }
        if let Some(p) = start {
            g.set_start(p)?;
        }
        if let Some(p) = end {
            g.set_end(p)?;
        }
        log::debug!(
            "layout: parsed {}x{} grid with {} obstacles",
            g.width(),
            g.height(),
            g.obstacles().count()
        );
        Ok(g)
    }
}
