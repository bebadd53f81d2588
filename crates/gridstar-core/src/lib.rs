//! **gridstar-core** — grid graph model for shortest-path search.
//!
//! A [`Grid`] owns a fixed lattice of [`Node`]s with static 8-way adjacency,
//! an obstacle flag per node, and optional start/end selections. Search
//! engines (see `gridstar-paths`) annotate nodes in place with scores and
//! parent links.

pub mod error;
pub mod geom;
pub mod grid;
pub mod layout;
pub mod node;
pub mod scenario;

pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::Grid;
pub use layout::LAYOUT_RUNES;
pub use node::{Node, NodeId};
pub use scenario::Scenario;
