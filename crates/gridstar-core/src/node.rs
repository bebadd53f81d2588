//! The [`Node`] type — one cell of a [`Grid`](crate::Grid) lattice.

use crate::geom::Point;

/// Handle to a node inside its grid's flat node store.
///
/// Only meaningful for the grid that produced it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in [`Grid::nodes`](crate::Grid::nodes).
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A lattice cell: fixed position and topology, an obstacle flag, and the
/// scoring state written by a search.
///
/// The search fields are public so a search engine can annotate nodes in
/// place; [`Grid::reset_search`](crate::Grid::reset_search) clears them.
#[derive(Debug, Clone)]
pub struct Node {
    pos: Point,
    neighbors: Vec<NodeId>,
    obstacle: bool,
    /// Whether the node has been expanded by the last search.
    pub visited: bool,
    /// Best known path cost from the start node.
    pub local_goal: f32,
    /// `local_goal` plus the heuristic estimate to the end node.
    pub global_goal: f32,
    /// Preceding node on the best known path.
    pub parent: Option<NodeId>,
}

impl Node {
    pub(crate) fn new(pos: Point) -> Self {
        Self {
            pos,
            neighbors: Vec::with_capacity(8),
            obstacle: false,
            visited: false,
            local_goal: f32::INFINITY,
            global_goal: f32::INFINITY,
            parent: None,
        }
    }

    /// Grid coordinates of the node.
    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.pos.y
    }

    /// Adjacent nodes in N, NE, E, SE, S, SW, W, NW order, skipping
    /// directions that leave the grid.
    #[inline]
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    #[inline]
    pub fn is_obstacle(&self) -> bool {
        self.obstacle
    }

    pub(crate) fn set_obstacle(&mut self, obstacle: bool) {
        self.obstacle = obstacle;
    }

    pub(crate) fn push_neighbor(&mut self, id: NodeId) {
        self.neighbors.push(id);
    }

    /// Clear all search state back to "never reached".
    pub fn reset_search(&mut self) {
        self.visited = false;
        self.local_goal = f32::INFINITY;
        self.global_goal = f32::INFINITY;
        self.parent = None;
    }
}

/// Nodes are identified by their coordinates alone.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Node {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_node_is_unreached() {
        let n = Node::new(Point::new(2, 3));
        assert_eq!(n.pos(), Point::new(2, 3));
        assert!(!n.visited);
        assert!(n.local_goal.is_infinite());
        assert!(n.global_goal.is_infinite());
        assert_eq!(n.parent, None);
        assert!(n.neighbors().is_empty());
    }

    #[test]
    fn equality_ignores_search_state() {
        let mut a = Node::new(Point::new(1, 1));
        let b = Node::new(Point::new(1, 1));
        a.visited = true;
        a.local_goal = 4.0;
        a.set_obstacle(true);
        assert_eq!(a, b);
        assert_ne!(a, Node::new(Point::new(1, 0)));
    }

    #[test]
    fn reset_search_keeps_obstacle_and_topology() {
        let mut n = Node::new(Point::ZERO);
        n.push_neighbor(NodeId(1));
        n.set_obstacle(true);
        n.visited = true;
        n.local_goal = 1.5;
        n.global_goal = 3.0;
        n.parent = Some(NodeId(1));
        n.reset_search();
        assert!(!n.visited);
        assert!(n.local_goal.is_infinite());
        assert!(n.global_goal.is_infinite());
        assert_eq!(n.parent, None);
        assert!(n.is_obstacle());
        assert_eq!(n.neighbors(), &[NodeId(1)]);
    }
}
