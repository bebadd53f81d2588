//! Path recovery from the parent links left behind by a search.

use gridstar_core::{Grid, NodeId, Point};

use crate::distance::euclidean;

/// Follow `parent` links back from `to` until a node without a parent.
///
/// The result is head-first: it starts at the root of the chain (the start
/// node when `to` was reached) and ends at `to`.
pub fn parent_chain(grid: &Grid, to: NodeId) -> Vec<Point> {
    let mut chain = Vec::new();
    let mut cur = Some(to);
    while let Some(id) = cur {
        // Guard against a corrupted (cyclic) parent graph.
        if chain.len() == grid.len() {
            break;
        }
        let node = grid.node(id);
        chain.push(node.pos());
        cur = node.parent;
    }
    chain.reverse();
    chain
}

/// The start-to-end path found by the last search, or `None` if the end
/// node was not reached.
///
/// Reachability is decided by whether the end node was expanded: an
/// obstacle end node can pick up a parent during relaxation without ever
/// being on a valid path.
pub fn shortest_path(grid: &Grid) -> Option<Vec<Point>> {
    let start = grid.start()?;
    let end = grid.end()?;
    if start == end {
        return Some(vec![grid.node(start).pos()]);
    }
    if !grid.node(end).visited {
        return None;
    }
    let chain = parent_chain(grid, end);
    (chain.first() == Some(&grid.node(start).pos())).then_some(chain)
}

/// Total Euclidean length of a path.
pub fn path_length(path: &[Point]) -> f32 {
    path.windows(2)
        .fold(0.0, |acc, w| acc + euclidean(w[0], w[1]))
}
