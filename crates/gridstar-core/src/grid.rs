//! The [`Grid`] type — a fixed lattice of [`Node`]s with 8-way adjacency.
//!
//! Nodes live in one flat store indexed by `x * height + y`. Neighbour and
//! parent links are [`NodeId`]s into that store, so the graph carries no
//! ownership cycles.

use std::fmt;

use crate::error::GridError;
use crate::geom::{Point, Range};
use crate::node::{Node, NodeId};

/// A `width × height` lattice of nodes with designated start and end cells.
#[derive(Debug, Clone)]
pub struct Grid {
    nodes: Vec<Node>,
    width: i32,
    height: i32,
    start: Option<NodeId>,
    end: Option<NodeId>,
}

impl Grid {
    /// Create a grid and build its static adjacency.
    ///
    /// Every node links to each of its up-to-8 neighbours that lie inside
    /// the grid. Obstacles are not considered here.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidSize { width, height });
        }
        let mut g = Self {
            nodes: Vec::with_capacity((width as usize) * (height as usize)),
            width,
            height,
            start: None,
            end: None,
        };

        for x in 0..width {
            for y in 0..height {
                g.nodes.push(Node::new(Point::new(x, y)));
            }
        }

        for i in 0..g.nodes.len() {
            let pos = g.nodes[i].pos();
            for n in pos.neighbors_8() {
                if let Some(id) = g.id(n) {
                    g.nodes[i].push_neighbor(id);
                }
            }
        }

        log::debug!("grid: built {width}x{height} lattice");
        Ok(g)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The grid rectangle, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Node id for `p`, or `None` if out of bounds.
    #[inline]
    pub fn id(&self, p: Point) -> Option<NodeId> {
        if !self.bounds().contains(p) {
            return None;
        }
        Some(NodeId((p.x as usize) * (self.height as usize) + p.y as usize))
    }

    /// Node at `(x, y)`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<&Node> {
        self.at(Point::new(x, y))
    }

    /// Node at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&Node> {
        self.id(p).map(|id| &self.nodes[id.0])
    }

    /// Node behind an id handed out by this grid.
    ///
    /// Panics if `id` belongs to a larger grid.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// All nodes in construction order (x-major).
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Mutable access for search engines writing per-node scores.
    #[inline]
    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    // -----------------------------------------------------------------------
    // Designated cells
    // -----------------------------------------------------------------------

    pub fn set_obstacle(&mut self, p: Point, obstacle: bool) -> Result<(), GridError> {
        let id = self.id(p).ok_or(GridError::OutOfBounds(p))?;
        self.nodes[id.0].set_obstacle(obstacle);
        Ok(())
    }

    /// Flip the obstacle flag at `p` and return the new value.
    pub fn toggle_obstacle(&mut self, p: Point) -> Result<bool, GridError> {
        let id = self.id(p).ok_or(GridError::OutOfBounds(p))?;
        let node = &mut self.nodes[id.0];
        let obstacle = !node.is_obstacle();
        node.set_obstacle(obstacle);
        Ok(obstacle)
    }

    /// Positions of all obstacle nodes, in construction order.
    pub fn obstacles(&self) -> impl Iterator<Item = Point> + '_ {
        self.nodes
            .iter()
            .filter(|n| n.is_obstacle())
            .map(|n| n.pos())
    }

    pub fn set_start(&mut self, p: Point) -> Result<(), GridError> {
        self.start = Some(self.id(p).ok_or(GridError::OutOfBounds(p))?);
        Ok(())
    }

    pub fn set_end(&mut self, p: Point) -> Result<(), GridError> {
        self.end = Some(self.id(p).ok_or(GridError::OutOfBounds(p))?);
        Ok(())
    }

    pub fn clear_start(&mut self) {
        self.start = None;
    }

    pub fn clear_end(&mut self) {
        self.end = None;
    }

    #[inline]
    pub fn start(&self) -> Option<NodeId> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<NodeId> {
        self.end
    }

    #[inline]
    pub fn start_node(&self) -> Option<&Node> {
        self.start.map(|id| self.node(id))
    }

    #[inline]
    pub fn end_node(&self) -> Option<&Node> {
        self.end.map(|id| self.node(id))
    }

    /// Reset every node's search state.
    pub fn reset_search(&mut self) {
        for n in self.nodes.iter_mut() {
            n.reset_search();
        }
    }
}

/// Renders the grid in the layout alphabet accepted by
/// [`Grid::parse`]: `.` free, `#` obstacle, `S` start, `E` end.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width {
                let p = Point::new(x, y);
                let id = self.id(p);
                let ch = if id.is_some() && id == self.start {
                    'S'
                } else if id.is_some() && id == self.end {
                    'E'
                } else if self.at(p).is_some_and(Node::is_obstacle) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
