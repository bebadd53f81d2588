//! Best-first (A*) search over a [`Grid`].
//!
//! The search writes its results into the grid's nodes: `visited` marks
//! expanded nodes, `local_goal`/`global_goal` hold the scores and `parent`
//! links form the shortest-known path tree rooted at the start node.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridstar_core::{Grid, NodeId};

use crate::distance::{euclidean, heuristic};

/// Open-set strategy used by [`solve_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Frontier {
    /// A list re-sorted by `global_goal` (stable) before every expansion,
    /// with visited entries dropped lazily from the front.
    #[default]
    Sorted,
    /// A binary heap keyed on `global_goal`, ties broken by insertion
    /// order. Reaches the same path cost as [`Frontier::Sorted`] but may
    /// expand tied nodes in a different order.
    Heap,
}

/// Search options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub frontier: Frontier,
}

/// Run A* from the grid's start node to its end node with the default
/// [`SearchConfig`].
///
/// Returns `false` only when the start or end node is unset, in which case
/// the grid is left untouched. Otherwise the search runs to completion and
/// returns `true` whether or not a path exists; inspect the end node (or
/// use [`shortest_path`](crate::shortest_path)) to find out.
pub fn solve(grid: &mut Grid) -> bool {
    solve_with(grid, &SearchConfig::default())
}

/// Run A* with explicit options. See [`solve`].
pub fn solve_with(grid: &mut Grid, config: &SearchConfig) -> bool {
    search(grid, config).is_some()
}

fn search(grid: &mut Grid, config: &SearchConfig) -> Option<Stats> {
    let (Some(start), Some(end)) = (grid.start(), grid.end()) else {
        log::warn!("solve: start or end node not set");
        return None;
    };

    grid.reset_search();
    {
        let goal = grid.node(end).pos();
        let s = grid.node_mut(start);
        s.local_goal = 0.0;
        s.global_goal = heuristic(s.pos(), goal);
    }

    let stats = match config.frontier {
        Frontier::Sorted => run_sorted(grid, start, end),
        Frontier::Heap => run_heap(grid, start, end),
    };

    let e = grid.node(end);
    log::debug!(
        "solve: {:?} frontier expanded {} nodes ({} queued), end {} {}",
        config.frontier,
        stats.expanded.len(),
        stats.queued,
        e.pos(),
        if e.visited { "reached" } else { "unreachable" },
    );
    Some(stats)
}

/// Expansion record of one search run.
#[derive(Default)]
struct Stats {
    expanded: Vec<NodeId>,
    queued: usize,
}

fn run_sorted(grid: &mut Grid, start: NodeId, end: NodeId) -> Stats {
    let mut stats = Stats::default();
    let mut open: Vec<NodeId> = vec![start];
    let mut nbuf: Vec<NodeId> = Vec::with_capacity(8);
    let mut current = start;

    while !open.is_empty() && current != end {
        open.sort_by(|&a, &b| {
            grid.node(a)
                .global_goal
                .total_cmp(&grid.node(b).global_goal)
        });

        let stale = open.iter().take_while(|&&id| grid.node(id).visited).count();
        open.drain(..stale);

        let Some(&front) = open.first() else {
            break;
        };
        current = front;
        grid.node_mut(current).visited = true;
        stats.expanded.push(current);
        log::trace!("expand {}", grid.node(current).pos());

        nbuf.clear();
        nbuf.extend_from_slice(grid.node(current).neighbors());
        for &n in nbuf.iter() {
            let nb = grid.node(n);
            if !nb.visited && !nb.is_obstacle() {
                open.push(n);
                stats.queued += 1;
            }
            relax(grid, current, n, end);
        }
    }
    stats
}

/// Heap entry: a node id with the `global_goal` it was queued at.
#[derive(Clone, Copy)]
struct OpenRef {
    id: NodeId,
    f: f32,
    seq: usize,
}

impl Ord for OpenRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f, then oldest, first.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenRef {}

fn run_heap(grid: &mut Grid, start: NodeId, end: NodeId) -> Stats {
    let mut stats = Stats::default();
    let mut open: BinaryHeap<OpenRef> = BinaryHeap::new();
    let mut seq = 0;
    let mut nbuf: Vec<NodeId> = Vec::with_capacity(8);
    let mut current = start;

    open.push(OpenRef {
        id: start,
        f: grid.node(start).global_goal,
        seq,
    });

    while current != end {
        let Some(entry) = open.pop() else {
            break;
        };
        // Skip stale entries.
        if grid.node(entry.id).visited {
            continue;
        }
        current = entry.id;
        grid.node_mut(current).visited = true;
        stats.expanded.push(current);
        log::trace!("expand {}", grid.node(current).pos());

        nbuf.clear();
        nbuf.extend_from_slice(grid.node(current).neighbors());
        for &n in nbuf.iter() {
            if !relax(grid, current, n, end) {
                continue;
            }
            let nb = grid.node(n);
            if !nb.visited && !nb.is_obstacle() {
                seq += 1;
                open.push(OpenRef {
                    id: n,
                    f: nb.global_goal,
                    seq,
                });
                stats.queued += 1;
            }
        }
    }
    stats
}

/// Try to improve `n` by routing through `current`. Returns whether `n`'s
/// scores changed.
///
/// Obstacles are relaxed too: they can receive a parent and scores even
/// though they are never queued or expanded.
fn relax(grid: &mut Grid, current: NodeId, n: NodeId, end: NodeId) -> bool {
    let goal = grid.node(end).pos();
    let cur = grid.node(current);
    let (cur_pos, cur_g) = (cur.pos(), cur.local_goal);

    let nb = grid.node_mut(n);
    let candidate = cur_g + euclidean(cur_pos, nb.pos());
    if candidate >= nb.local_goal {
        return false;
    }
    nb.parent = Some(current);
    nb.local_goal = candidate;
    nb.global_goal = candidate + heuristic(nb.pos(), goal);
    true
}
