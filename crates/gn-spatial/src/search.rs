//! A* search over a [`Grid`] and the [`Router`] seam used by consumers.
//!
//! # Search state
//!
//! The grid holds topology only.  Everything a search writes (`g`, `h`,
//! `parent`, open/closed status) lives in a scratch table owned by the
//! [`AStar`] engine, one slot per grid index.  The engine records every slot
//! it touches and restores exactly those slots when the search ends, found
//! or not, so the cost of cleanup is proportional to the explored region and
//! the next query starts from a clean table.
//!
//! Because `find_path` takes `&mut self` and the grid by shared reference,
//! one engine can never run two searches at once, while separate engines
//! (one per thread) may search the same grid concurrently.
//!
//! # Cost model
//!
//! Edge cost and heuristic are both the Euclidean distance between integer
//! grid coordinates: `1.0` for cardinal steps, `√2` for diagonal steps.  The
//! heuristic is therefore consistent and closed nodes are never reopened.
//!
//! # Tie-break
//!
//! Among open nodes with equal `f`, the one opened earliest wins.  Each node
//! keeps the sequence number of its first insertion; relaxing an open node
//! pushes a fresh heap entry under that same number.  Together with the
//! fixed neighbour order of [`Grid::neighbors`] this makes the choice among
//! several equal-cost routes fully deterministic.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gn_core::NodeId;

use crate::grid::{Grid, Node};
use crate::{SpatialError, SpatialResult};

// ── NodeState ─────────────────────────────────────────────────────────────────

/// Search-scoped annotations of one node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NodeState {
    /// Cost of the best known path from the start.  `+∞` when unvisited.
    pub g: f32,
    /// Heuristic estimate to the target.  `0` when unvisited.
    pub h: f32,
    /// Predecessor on the best known path.
    pub parent: Option<NodeId>,
}

impl NodeState {
    pub const UNVISITED: NodeState = NodeState { g: f32::INFINITY, h: 0.0, parent: None };

    /// Open-set priority, `g + h`.
    #[inline]
    pub fn f(&self) -> f32 {
        self.g + self.h
    }

    #[inline]
    pub fn is_unvisited(&self) -> bool {
        *self == Self::UNVISITED
    }
}

impl Default for NodeState {
    fn default() -> Self {
        Self::UNVISITED
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// Result of a successful search.
///
/// `nodes` runs from the first step after the start to the target, both
/// inclusive; the start itself is never listed.  Empty when start and target
/// are the same node.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub nodes: Vec<NodeId>,
    /// Sum of edge costs along the route.
    pub cost: f32,
}

impl Route {
    /// `true` if the start and target are the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn first(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn last(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable path search.
///
/// Consumers such as the mobility engine are generic over this trait so the
/// search can be swapped at compile time.  `Ok(None)` means no route exists;
/// `Err` is reserved for invalid input.
pub trait Router: Send {
    fn route(
        &mut self,
        grid:   &Grid,
        start:  NodeId,
        target: NodeId,
    ) -> SpatialResult<Option<Route>>;
}

// ── Distance ──────────────────────────────────────────────────────────────────

/// Euclidean distance between the grid coordinates of two nodes.
///
/// This is both the edge cost and the heuristic of [`AStar`].
#[inline]
pub fn euclidean(a: &Node, b: &Node) -> f32 {
    coord_distance(
        (a.x() as i64, a.y() as i64),
        (b.x() as i64, b.y() as i64),
    )
}

#[inline]
fn coord_distance(a: (i64, i64), b: (i64, i64)) -> f32 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    ((dx * dx + dy * dy) as f64).sqrt() as f32
}

/// Grid coordinates recovered from an arena index (`x * height + y`).
#[inline]
fn coords(height: u32, id: NodeId) -> (i64, i64) {
    let h = height as i64;
    let i = id.0 as i64;
    (i / h, i % h)
}

// ── Open set ──────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Status {
    Unseen,
    /// In the open set; payload is the first-insertion sequence number.
    Open(u32),
    Closed,
}

/// Heap entry ordered so `BinaryHeap` (max-heap) pops the smallest `f`,
/// then the smallest sequence number.
#[derive(Copy, Clone, Debug)]
struct OpenEntry {
    f:   f32,
    seq: u32,
    id:  NodeId,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

// ── AStar ─────────────────────────────────────────────────────────────────────

/// Reusable A* engine.
///
/// Keep one per worker and call [`find_path`](Self::find_path) as often as
/// needed; buffers are reused and only resized when the engine meets a grid
/// with a different node count.
#[derive(Default)]
pub struct AStar {
    states:       Vec<NodeState>,
    status:       Vec<Status>,
    /// Every node whose state was written during the current search.
    touched:      Vec<NodeId>,
    open:         BinaryHeap<OpenEntry>,
    next_seq:     u32,
    nbuf:         Vec<NodeId>,
    last_touched: usize,
}

impl AStar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with its scratch table pre-sized for `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        let mut engine = Self::new();
        engine.prepare(grid.node_count());
        engine
    }

    /// Scratch state of `id`.
    ///
    /// Outside a search this is always [`NodeState::UNVISITED`]; the engine
    /// never leaves annotations behind.
    pub fn state(&self, id: NodeId) -> NodeState {
        self.states.get(id.index()).copied().unwrap_or(NodeState::UNVISITED)
    }

    /// Number of nodes the most recent search touched (and then reset).
    pub fn last_touched(&self) -> usize {
        self.last_touched
    }

    /// Shortest route from `start` to `target`.
    ///
    /// Returns `Ok(None)` when the target is unreachable and `Ok(Some)` with
    /// an empty route when `start == target`.
    ///
    /// # Errors
    ///
    /// [`SpatialError::NodeNotFound`] if either id lies outside `grid`.
    pub fn find_path(
        &mut self,
        grid:   &Grid,
        start:  NodeId,
        target: NodeId,
    ) -> SpatialResult<Option<Route>> {
        for id in [start, target] {
            if !grid.contains(id) {
                return Err(SpatialError::NodeNotFound(id));
            }
        }

        self.prepare(grid.node_count());
        let route = self.search(grid, start, target);
        self.reset();

        log::debug!(
            "a* {start} -> {target}: {} ({} nodes touched)",
            if route.is_some() { "found" } else { "no route" },
            self.last_touched,
        );
        Ok(route)
    }

    fn prepare(&mut self, node_count: usize) {
        if self.states.len() == node_count {
            return;
        }
        if !self.states.is_empty() {
            log::debug!(
                "a* scratch resized from {} to {node_count} nodes",
                self.states.len()
            );
        }
        self.states.clear();
        self.states.resize(node_count, NodeState::UNVISITED);
        self.status.clear();
        self.status.resize(node_count, Status::Unseen);
    }

    fn search(&mut self, grid: &Grid, start: NodeId, target: NodeId) -> Option<Route> {
        self.touched.clear();
        self.open.clear();
        self.next_seq = 0;

        let height = grid.height();
        let goal = coords(height, target);

        self.states[start.index()] = NodeState {
            g:      0.0,
            h:      coord_distance(coords(height, start), goal),
            parent: None,
        };
        self.open_node(start);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = loop {
            let Some(current) = self.open.pop() else {
                break false;
            };
            let ci = current.id.index();

            // Superseded entry of a node that was relaxed and already expanded.
            if self.status[ci] == Status::Closed {
                continue;
            }
            if current.id == target {
                break true;
            }
            self.status[ci] = Status::Closed;

            let current_g = self.states[ci].g;
            let here = coords(height, current.id);
            grid.neighbors(current.id, &mut nbuf);

            for &nid in nbuf.iter() {
                let ni = nid.index();
                if self.status[ni] == Status::Closed {
                    continue;
                }
                let there = coords(height, nid);
                let tentative_g = current_g + coord_distance(here, there);
                if tentative_g >= self.states[ni].g {
                    continue;
                }

                let h = coord_distance(there, goal);
                self.states[ni] = NodeState { g: tentative_g, h, parent: Some(current.id) };
                match self.status[ni] {
                    Status::Open(seq) => self.open.push(OpenEntry { f: tentative_g + h, seq, id: nid }),
                    _ => self.open_node(nid),
                }
            }
        };

        self.nbuf = nbuf;

        found.then(|| self.reconstruct(start, target))
    }

    /// Add `id` to the open set for the first time this search.
    fn open_node(&mut self, id: NodeId) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.status[id.index()] = Status::Open(seq);
        self.touched.push(id);
        self.open.push(OpenEntry { f: self.states[id.index()].f(), seq, id });
    }

    /// Walk parent links back from `target`, stopping before `start`.
    fn reconstruct(&self, start: NodeId, target: NodeId) -> Route {
        let mut nodes = Vec::new();
        let mut cur = target;
        while cur != start {
            nodes.push(cur);
            let Some(parent) = self.states[cur.index()].parent else {
                break;
            };
            cur = parent;
        }
        nodes.reverse();
        Route {
            nodes,
            cost: self.states[target.index()].g,
        }
    }

    /// Restore every touched slot to its pre-search defaults.
    fn reset(&mut self) {
        self.last_touched = self.touched.len();
        for &id in &self.touched {
            self.states[id.index()] = NodeState::UNVISITED;
            self.status[id.index()] = Status::Unseen;
        }
        self.touched.clear();
        self.open.clear();
    }
}

impl Router for AStar {
    fn route(
        &mut self,
        grid:   &Grid,
        start:  NodeId,
        target: NodeId,
    ) -> SpatialResult<Option<Route>> {
        self.find_path(grid, start, target)
    }
}
