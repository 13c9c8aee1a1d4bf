//! Node grid and builder.
//!
//! # Data layout
//!
//! A grid is a flat arena of `width × height` nodes.  The node at `(x, y)`
//! lives at index `x * height + y`, so walking the arena in index order is
//! the same as scanning columns left to right, each bottom to top:
//!
//! ```text
//! index:  0      1      ..  h-1      h      h+1  ..
//! cell:  (0,0)  (0,1)  ..  (0,h-1)  (1,0)  (1,1) ..
//! ```
//!
//! Topology and positions never change after [`GridBuilder::build`].  All
//! per-search state lives in the search engine, not here, so a `&Grid` can
//! be shared freely between threads.
//!
//! # Nearest-node lookup
//!
//! [`Grid::closest_node`] is a plain linear scan.  It is used to snap world
//! positions (an agent's location, a clicked destination) to graph vertices
//! before a search; the search itself never calls it.

use gn_core::{GridConfig, NodeId, PlaneBounds, Vec3};

use crate::{SpatialError, SpatialResult};

// ── Node ──────────────────────────────────────────────────────────────────────

/// A grid vertex: fixed coordinates plus an opaque world-space payload.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    x:        u32,
    y:        u32,
    position: Vec3,
}

impl Node {
    #[inline]
    pub fn x(&self) -> u32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> u32 {
        self.y
    }

    /// World-space position assigned when the grid was built.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node({}, {})", self.x, self.y)
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// Rectangular, fully connected node grid.
///
/// Do not construct directly; use [`GridBuilder`].  Every cell is traversable
/// and connected to its 8 neighbours.
#[derive(Clone, Debug)]
pub struct Grid {
    width:  u32,
    height: u32,
    nodes:  Vec<Node>,
}

impl Grid {
    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// `NodeId` of the cell at `(x, y)`, or `None` outside the grid.
    #[inline]
    pub fn id_at(&self, x: u32, y: u32) -> Option<NodeId> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(NodeId(x * self.height + y))
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// `true` if `id` names a node of this grid.
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    #[inline]
    pub fn position(&self, id: NodeId) -> Option<Vec3> {
        self.node(id).map(Node::position)
    }

    /// All nodes in index order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i as u32), n))
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Fill `buf` with the Moore neighbourhood of `id`, clipped to the grid.
    ///
    /// `buf` is cleared first.  Order is fixed: `dx` from -1 to 1 in the
    /// outer loop, `dy` from -1 to 1 in the inner loop.  Searches depend on
    /// this order to break ties between equal-cost routes, so do not change
    /// it.  Ids outside the grid yield no neighbours.
    pub fn neighbors(&self, id: NodeId, buf: &mut Vec<NodeId>) {
        buf.clear();
        let Some(node) = self.node(id) else {
            return;
        };
        let (x, y) = (node.x as i64, node.y as i64);
        for dx in -1..=1_i64 {
            for dy in -1..=1_i64 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let (nx, ny) = (x + dx, y + dy);
                if nx < 0 || ny < 0 || nx >= self.width as i64 || ny >= self.height as i64 {
                    continue;
                }
                buf.push(NodeId(nx as u32 * self.height + ny as u32));
            }
        }
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Node whose position is nearest to `pos` by Euclidean distance.
    ///
    /// Scans every node in index order and keeps the first strict minimum,
    /// so equidistant candidates resolve to the lowest index.  O(N).
    pub fn closest_node(&self, pos: Vec3) -> NodeId {
        let mut best = 0;
        let mut best_dist = f32::INFINITY;
        for (i, node) in self.nodes.iter().enumerate() {
            let d = pos.distance(node.position);
            if d < best_dist {
                best_dist = d;
                best = i;
            }
        }
        NodeId(best as u32)
    }
}

// ── GridBuilder ───────────────────────────────────────────────────────────────

/// How node positions are assigned at build time.
enum Layout {
    /// Every node at the origin; the caller only cares about topology.
    Origin,
    /// Evenly spaced over a plane.
    Plane { plane: PlaneBounds, vertical_offset: f32 },
    /// Caller-supplied `(x, y) → position`.
    Custom(Box<dyn Fn(u32, u32) -> Vec3>),
}

/// Configure a [`Grid`], then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use gn_core::{PlaneBounds, Vec3};
/// use gn_spatial::GridBuilder;
///
/// let plane = PlaneBounds::new(Vec3::ZERO, 10.0, 10.0);
/// let grid = GridBuilder::new(3, 3).over_plane(plane, 0.0).build().unwrap();
/// assert_eq!(grid.node_count(), 9);
/// let corner = grid.id_at(0, 0).unwrap();
/// assert_eq!(grid.position(corner), Some(Vec3::new(-5.0, 0.0, -5.0)));
/// ```
pub struct GridBuilder {
    width:  u32,
    height: u32,
    layout: Layout,
}

impl GridBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, layout: Layout::Origin }
    }

    /// Dimensions from `config`, positions spread over `plane`.
    pub fn from_config(config: &GridConfig, plane: PlaneBounds) -> Self {
        Self::new(config.nodes_x, config.nodes_z).over_plane(plane, config.vertical_offset)
    }

    /// Spread nodes evenly over `plane`, corner to corner.
    ///
    /// Spacing along an axis with `n` nodes is `size / (n - 1)`; a single
    /// node sits at the bottom-left corner.  Grid `y` maps to world `z`, and
    /// every node is raised `vertical_offset` above the plane.
    pub fn over_plane(mut self, plane: PlaneBounds, vertical_offset: f32) -> Self {
        self.layout = Layout::Plane { plane, vertical_offset };
        self
    }

    /// Assign positions with a caller-supplied function of `(x, y)`.
    pub fn with_positions(mut self, f: impl Fn(u32, u32) -> Vec3 + 'static) -> Self {
        self.layout = Layout::Custom(Box::new(f));
        self
    }

    /// Consume the builder and produce a [`Grid`].
    ///
    /// # Errors
    ///
    /// [`SpatialError::InvalidDimensions`] if either dimension is zero or
    /// the node count does not fit a `NodeId`.
    pub fn build(self) -> SpatialResult<Grid> {
        let (width, height) = (self.width, self.height);
        let count = width as u64 * height as u64;
        if count == 0 || count >= u32::MAX as u64 {
            return Err(SpatialError::InvalidDimensions { width, height });
        }

        let position: Box<dyn Fn(u32, u32) -> Vec3> = match self.layout {
            Layout::Origin => Box::new(|_, _| Vec3::ZERO),
            Layout::Plane { plane, vertical_offset } => {
                let spacing = |n: u32, size: f32| if n > 1 { size / (n - 1) as f32 } else { size };
                let sx = spacing(width, plane.size_x);
                let sz = spacing(height, plane.size_z);
                let origin = plane.bottom_left();
                Box::new(move |x, y| {
                    origin + Vec3::new(x as f32 * sx, vertical_offset, y as f32 * sz)
                })
            }
            Layout::Custom(f) => f,
        };

        let mut nodes = Vec::with_capacity(count as usize);
        for x in 0..width {
            for y in 0..height {
                nodes.push(Node { x, y, position: position(x, y) });
            }
        }
        log::trace!("built {width}x{height} grid ({count} nodes)");

        Ok(Grid { width, height, nodes })
    }
}
