//! The projected road graph.
//!
//! Nodes carry metre coordinates in a single projection; links are directed
//! and weighted by length.  Storage is adjacency-sliced: all links sit in
//! one flat array grouped by source node, and `first_link[n]` marks where
//! node `n`'s run begins, so a relaxation pass reads one contiguous slice
//! per node.  The graph is assembled once through [`RoadGraphBuilder`] and
//! only read afterwards; every query takes `&self`, which is what lets the
//! row workers share it with no locking.
//!
//! Zone and checkpoint centroids find their representative node through an
//! `rstar` R-tree filled during `finish()`.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use aforo_core::{NodeId, PlanePoint};

// ── Link ──────────────────────────────────────────────────────────────────────

/// One directed connection out of a node.
#[derive(Copy, Clone, Debug)]
pub struct Link {
    pub target: NodeId,
    /// Strictly positive, finite metres.
    pub length_m: f64,
}

// ── Spatial index entry ───────────────────────────────────────────────────────

/// R-tree leaf: a node id at its projected position.
#[derive(Clone)]
struct SnapEntry {
    node: NodeId,
    at: [f64; 2],
}

impl RTreeObject for SnapEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.at)
    }
}

impl PointDistance for SnapEntry {
    fn distance_2(&self, query: &[f64; 2]) -> f64 {
        let dx = self.at[0] - query[0];
        let dy = self.at[1] - query[1];
        dx.mul_add(dx, dy * dy)
    }
}

// ── RoadGraph ─────────────────────────────────────────────────────────────────

/// Immutable directed road graph with a nearest-node index.
pub struct RoadGraph {
    positions: Vec<PlanePoint>,
    /// Slice boundaries into `links`, one entry per node plus a terminator.
    first_link: Vec<u32>,
    /// Every link of the graph, grouped by source node.
    links: Vec<Link>,
    snap_index: RTree<SnapEntry>,
}

impl RoadGraph {
    /// A graph with no nodes.  Routing against it finds nothing and
    /// snapping returns `None`.
    pub fn empty() -> Self {
        RoadGraphBuilder::new().finish()
    }

    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Whether `node` names a node of this graph.
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.positions.len()
    }

    /// Projected position of `node`.
    #[inline]
    pub fn position(&self, node: NodeId) -> PlanePoint {
        self.positions[node.index()]
    }

    /// The outgoing links of `node`, as one contiguous slice.
    #[inline]
    pub fn links_from(&self, node: NodeId) -> &[Link] {
        let lo = self.first_link[node.index()] as usize;
        let hi = self.first_link[node.index() + 1] as usize;
        &self.links[lo..hi]
    }

    /// Number of outgoing links of `node`.
    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.links_from(node).len()
    }

    /// The node closest to `pos` by planar distance, or `None` on an empty
    /// graph.
    pub fn nearest_node(&self, pos: PlanePoint) -> Option<NodeId> {
        self.snap_index
            .nearest_neighbor(&[pos.x, pos.y])
            .map(|entry| entry.node)
    }
}

// ── RoadGraphBuilder ──────────────────────────────────────────────────────────

/// Accumulates nodes and links in any order, then lays the graph out in one
/// pass with [`finish`](Self::finish).
pub struct RoadGraphBuilder {
    positions: Vec<PlanePoint>,
    pending: Vec<PendingLink>,
}

struct PendingLink {
    from: NodeId,
    to: NodeId,
    length_m: f64,
}

impl RoadGraphBuilder {
    pub fn new() -> Self {
        Self { positions: Vec::new(), pending: Vec::new() }
    }

    /// Register a node and get its id.  Ids are handed out in call order,
    /// starting at 0.
    pub fn push_node(&mut self, pos: PlanePoint) -> NodeId {
        let id = NodeId(self.positions.len() as u32);
        self.positions.push(pos);
        id
    }

    /// Add a link traversable only `from → to`.  `length_m` must be finite
    /// and strictly positive; the loaders screen their input before
    /// calling in.
    pub fn link_one_way(&mut self, from: NodeId, to: NodeId, length_m: f64) {
        debug_assert!(length_m.is_finite() && length_m > 0.0);
        self.pending.push(PendingLink { from, to, length_m });
    }

    /// Add a link traversable in both directions (the usual road segment).
    pub fn link_two_way(&mut self, a: NodeId, b: NodeId, length_m: f64) {
        self.link_one_way(a, b, length_m);
        self.link_one_way(b, a, length_m);
    }

    /// Position of a node registered earlier.
    pub fn position(&self, id: NodeId) -> PlanePoint {
        self.positions[id.index()]
    }

    /// All node positions registered so far, in id order.
    pub fn positions(&self) -> &[PlanePoint] {
        &self.positions
    }

    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    pub fn link_count(&self) -> usize {
        self.pending.len()
    }

    /// Lay out the adjacency runs and load the snap index.
    ///
    /// Links are placed by counting sort on their source node: one pass
    /// tallies out-degrees into `first_link`, a prefix sum turns the
    /// tallies into run boundaries, and a cursor pass drops each link into
    /// its slot.  Within a node's run, links keep their insertion order.
    pub fn finish(self) -> RoadGraph {
        let node_count = self.positions.len();

        let mut first_link = vec![0u32; node_count + 1];
        for link in &self.pending {
            first_link[link.from.index() + 1] += 1;
        }
        for i in 0..node_count {
            first_link[i + 1] += first_link[i];
        }

        let mut cursor = first_link.clone();
        let mut links = vec![Link { target: NodeId::INVALID, length_m: 0.0 }; self.pending.len()];
        for link in &self.pending {
            let slot = cursor[link.from.index()] as usize;
            links[slot] = Link { target: link.to, length_m: link.length_m };
            cursor[link.from.index()] += 1;
        }

        let leaves: Vec<SnapEntry> = self
            .positions
            .iter()
            .enumerate()
            .map(|(i, pos)| SnapEntry { node: NodeId(i as u32), at: [pos.x, pos.y] })
            .collect();

        RoadGraph {
            positions: self.positions,
            first_link,
            links,
            snap_index: RTree::bulk_load(leaves),
        }
    }
}

impl Default for RoadGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
