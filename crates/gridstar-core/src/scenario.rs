//! Serialisable description of a grid setup.

use crate::error::GridError;
use crate::geom::Point;
use crate::grid::Grid;

/// Dimensions, obstacles and endpoints of a grid, without search state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Scenario {
    pub width: i32,
    pub height: i32,
    pub obstacles: Vec<Point>,
    pub start: Option<Point>,
    pub end: Option<Point>,
}

impl Default for Scenario {
    /// An empty 14×14 board with no endpoints selected.
    fn default() -> Self {
        Self {
            width: 14,
            height: 14,
            obstacles: Vec::new(),
            start: None,
            end: None,
        }
    }
}

impl Scenario {
    /// Build a fresh grid from the scenario.
    pub fn build(&self) -> Result<Grid, GridError> {
        let mut g = Grid::new(self.width, self.height)?;
        for &p in &self.obstacles {
            g.set_obstacle(p, true)?;
        }
        if let Some(p) = self.start {
            g.set_start(p)?;
        }
        if let Some(p) = self.end {
            g.set_end(p)?;
        }
        Ok(g)
    }

    /// Record the current setup of `grid`.
    pub fn capture(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            obstacles: grid.obstacles().collect(),
            start: grid.start_node().map(|n| n.pos()),
            end: grid.end_node().map(|n| n.pos()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_board() {
        let g = Scenario::default().build().unwrap();
        assert_eq!((g.width(), g.height()), (14, 14));
        assert_eq!(g.obstacles().count(), 0);
        assert!(g.start().is_none() && g.end().is_none());
    }

    #[test]
    fn build_then_capture() {
        let sc = Scenario {
            width: 5,
            height: 3,
            obstacles: vec![Point::new(2, 0), Point::new(2, 1)],
            start: Some(Point::new(0, 0)),
            end: Some(Point::new(4, 0)),
        };
        let g = sc.build().unwrap();
        assert_eq!(g.to_string(), "S.#.E\n..#..\n.....");
        assert_eq!(Scenario::capture(&g), sc);
    }

    #[test]
    fn out_of_bounds_obstacle_rejected() {
        let sc = Scenario {
            width: 2,
            height: 2,
            obstacles: vec![Point::new(2, 2)],
            ..Scenario::default()
        };
        assert_eq!(sc.build().unwrap_err(), GridError::OutOfBounds(Point::new(2, 2)));
    }
}
