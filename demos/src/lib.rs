//! Shared model for the gridstar terminal demo.
//!
//! A [`Board`] plays the front-end role around a [`Grid`]: it edits
//! obstacles and endpoints, re-solves only when something changed and both
//! endpoints are set, and renders the explored area and path overlay.

use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use gridstar_core::{Grid, GridError, Point, Scenario};
use gridstar_paths::{SearchConfig, shortest_path, solve_with};
use rand::{Rng, RngExt};

/// Layout used when no file is given.
pub const DEMO_LAYOUT: &str = "\
S.............
..........#...
..######..#...
.......#..#...
.......#..#...
..###..#..#...
....#..#......
....#..####...
....#.........
....#####.....
..........##..
...........#..
...........#..
...........#.E";

const COL_FREE: Color = Color::DarkGrey;
const COL_VISITED: Color = Color::Grey;
const COL_OBSTACLE: Color = Color::Blue;
const COL_START: Color = Color::Green;
const COL_END: Color = Color::Red;
const COL_PATH: Color = Color::Yellow;

/// Load a grid from a JSON [`Scenario`] (`.json`) or a text layout.
pub fn load(path: &Path) -> Result<Grid, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let grid = if path.extension().is_some_and(|e| e == "json") {
        let sc: Scenario = serde_json::from_str(&text)?;
        sc.build()?
    } else {
        Grid::parse(&text)?
    };
    log::info!(
        "loaded {}x{} grid from {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(grid)
}

/// A scenario with obstacles scattered at `density` percent, start in the
/// top-left corner and end in the bottom-right corner.
pub fn random_scenario(rng: &mut impl Rng, width: i32, height: i32, density: u32) -> Scenario {
    let start = Point::new(0, 0);
    let end = Point::new(width - 1, height - 1);
    let mut obstacles = Vec::new();
    for x in 0..width {
        for y in 0..height {
            let p = Point::new(x, y);
            if p != start && p != end && rng.random_range(0..100) < density {
                obstacles.push(p);
            }
        }
    }
    Scenario {
        width,
        height,
        obstacles,
        start: Some(start),
        end: Some(end),
    }
}

/// A grid plus the "solved" indicator that gates path rendering.
pub struct Board {
    grid: Grid,
    config: SearchConfig,
    solved: bool,
}

impl Board {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            config: SearchConfig::default(),
            solved: false,
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self.solved = false;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Whether the node scores reflect the current setup.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn toggle_obstacle(&mut self, p: Point) -> Result<bool, GridError> {
        let on = self.grid.toggle_obstacle(p)?;
        self.solved = false;
        Ok(on)
    }

    pub fn set_start(&mut self, p: Option<Point>) -> Result<(), GridError> {
        match p {
            Some(p) => self.grid.set_start(p)?,
            None => self.grid.clear_start(),
        }
        self.solved = false;
        Ok(())
    }

    pub fn set_end(&mut self, p: Option<Point>) -> Result<(), GridError> {
        match p {
            Some(p) => self.grid.set_end(p)?,
            None => self.grid.clear_end(),
        }
        self.solved = false;
        Ok(())
    }

    /// Re-solve if the setup changed since the last search. Returns the
    /// solved indicator.
    pub fn ensure_solved(&mut self) -> bool {
        if !self.solved && self.grid.start().is_some() && self.grid.end().is_some() {
            self.solved = solve_with(&mut self.grid, &self.config);
        }
        self.solved
    }

    /// The current path, if solved and reachable.
    pub fn path(&self) -> Option<Vec<Point>> {
        if !self.solved {
            return None;
        }
        shortest_path(&self.grid)
    }

    /// Glyph and colour for the cell at `p`.
    pub fn glyph(&self, p: Point, path: &[Point]) -> (char, Color) {
        let id = self.grid.id(p);
        if id.is_some() && id == self.grid.start() {
            return ('S', COL_START);
        }
        if id.is_some() && id == self.grid.end() {
            return ('E', COL_END);
        }
        let Some(node) = self.grid.at(p) else {
            return (' ', COL_FREE);
        };
        if node.is_obstacle() {
            ('#', COL_OBSTACLE)
        } else if path.contains(&p) {
            ('*', COL_PATH)
        } else if self.solved && node.visited {
            ('o', COL_VISITED)
        } else {
            ('.', COL_FREE)
        }
    }

    /// Draw the board row by row.
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        let path = self.path().unwrap_or_default();
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                let (ch, col) = self.glyph(Point::new(x, y), &path);
                queue!(out, SetForegroundColor(col), Print(ch), Print(' '))?;
            }
            queue!(out, ResetColor, Print("\r\n"))?;
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_layout_is_solvable() {
        let mut board = Board::new(Grid::parse(DEMO_LAYOUT).unwrap());
        assert!(!board.is_solved());
        assert!(board.ensure_solved());
        let path = board.path().unwrap();
        assert_eq!(path.first(), Some(&Point::new(0, 0)));
        assert_eq!(path.last(), Some(&Point::new(13, 13)));
    }

    #[test]
    fn edits_reset_solved_indicator() {
        let mut board = Board::new(Grid::parse("S..\n...\n..E").unwrap());
        assert!(board.ensure_solved());
        board.toggle_obstacle(Point::new(1, 1)).unwrap();
        assert!(!board.is_solved());
        assert!(board.path().is_none());
        assert!(board.ensure_solved());
        let path = board.path().unwrap();
        assert!(!path.contains(&Point::new(1, 1)));
    }

    #[test]
    fn no_solve_without_both_endpoints() {
        let mut board = Board::new(Grid::parse("S..\n...\n..E").unwrap());
        board.set_end(None).unwrap();
        assert!(!board.ensure_solved());
        assert!(board.grid().nodes().iter().all(|n| !n.visited));
        board.set_end(Some(Point::new(2, 0))).unwrap();
        assert!(board.ensure_solved());
        assert_eq!(board.path().map(|p| p.len()), Some(3));
    }

    #[test]
    fn glyphs() {
        let mut board = Board::new(Grid::parse("S#.\n...\n..E").unwrap());
        board.ensure_solved();
        let path = board.path().unwrap();
        assert_eq!(board.glyph(Point::new(0, 0), &path), ('S', COL_START));
        assert_eq!(board.glyph(Point::new(2, 2), &path), ('E', COL_END));
        assert_eq!(board.glyph(Point::new(1, 0), &path), ('#', COL_OBSTACLE));
        assert_eq!(board.glyph(Point::new(1, 1), &path), ('*', COL_PATH));
        assert_eq!(board.glyph(Point::new(5, 5), &path).0, ' ');
    }

    #[test]
    fn render_writes_every_row() {
        let mut board = Board::new(Grid::parse("S.\n.E").unwrap());
        board.ensure_solved();
        let mut buf = Vec::new();
        board.render(&mut buf).unwrap();
        let text = String::from_utf8_lossy(&buf);
        assert_eq!(text.matches("\r\n").count(), 2);
        assert!(text.contains('S') && text.contains('E'));
    }

    #[test]
    fn random_scenario_keeps_endpoints_clear() {
        let mut rng = rand::rng();
        let sc = random_scenario(&mut rng, 10, 8, 40);
        assert_eq!(sc.start, Some(Point::new(0, 0)));
        assert_eq!(sc.end, Some(Point::new(9, 7)));
        assert!(!sc.obstacles.contains(&Point::new(0, 0)));
        assert!(!sc.obstacles.contains(&Point::new(9, 7)));
        let g = sc.build().unwrap();
        assert_eq!(g.obstacles().count(), sc.obstacles.len());
    }

    #[test]
    fn load_text_and_json() {
        let dir = std::env::temp_dir();
        let txt = dir.join(format!("gridstar-{}.txt", std::process::id()));
        fs::write(&txt, "S.#\n..E").unwrap();
        let g = load(&txt).unwrap();
        assert_eq!(g.to_string(), "S.#\n..E");

        let json = dir.join(format!("gridstar-{}.json", std::process::id()));
        fs::write(
            &json,
            r#"{"width":2,"height":1,"start":{"x":0,"y":0},"end":{"x":1,"y":0}}"#,
        )
        .unwrap();
        let g = load(&json).unwrap();
        assert_eq!(g.to_string(), "SE");

        fs::remove_file(txt).ok();
        fs::remove_file(json).ok();
    }
}
