//! A* shortest-path search over [`gridstar_core::Grid`].
//!
//! [`solve`] runs a best-first search from the grid's start node to its end
//! node, using Euclidean distance as both the step cost and the heuristic.
//! Results are written into the grid's nodes; read them back with
//! [`shortest_path`] or walk `parent` links yourself with [`parent_chain`].
//!
//! ```
//! use gridstar_core::{Grid, Point};
//! use gridstar_paths::{path_length, shortest_path, solve};
//!
//! let mut grid = Grid::parse("S.#\n..#\n..E").unwrap();
//! solve(&mut grid);
//! let path = shortest_path(&grid).unwrap();
//! assert_eq!(path.first(), Some(&Point::new(0, 0)));
//! assert_eq!(path.last(), Some(&Point::new(2, 2)));
//! assert!(path_length(&path) > 2.8);
//! ```

mod distance;
mod path;
mod search;

pub use distance::{euclidean, heuristic};
pub use path::{parent_chain, path_length, shortest_path};
pub use search::{Frontier, SearchConfig, solve, solve_with};
