//! Shortest-path computation over the road graph.
//!
//! # Cost model
//!
//! The single cost is link length in metres (`f64`).  Lengths are finite and
//! strictly positive, so plain best-first Dijkstra applies.  Heap ordering
//! uses `f64::total_cmp` with the node id as secondary key: equal-length
//! paths resolve identically on every run and every thread.
//!
//! # Result shape
//!
//! [`RoutePath`] carries the full node sequence, not just the length — the
//! direction derivation needs the nodes immediately around the checkpoint on
//! the constrained path.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use aforo_core::NodeId;

use crate::network::RoadGraph;
use crate::SpatialError;

// ── RoutePath ─────────────────────────────────────────────────────────────────

/// The result of a routing query: the node sequence from source to target
/// (inclusive) and the total length.
#[derive(Debug, Clone)]
pub struct RoutePath {
    /// Nodes visited in order.  `nodes[0]` is the source, `nodes.last()` the
    /// target.  A query with source == target yields a single-node path.
    pub nodes: Vec<NodeId>,
    /// Total path length in metres.
    pub length_m: f64,
}

impl RoutePath {
    /// `true` if the source and target are the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// The nodes immediately before and after the **first** occurrence of
    /// `pivot` on the path.  Either side is `None` when the pivot sits on
    /// the corresponding boundary of the path, and both are `None` when the
    /// pivot is not on the path at all.
    pub fn neighbours_of(&self, pivot: NodeId) -> (Option<NodeId>, Option<NodeId>) {
        let Some(i) = self.nodes.iter().position(|&n| n == pivot) else {
            return (None, None);
        };
        let before = (i > 0).then(|| self.nodes[i - 1]);
        let after  = self.nodes.get(i + 1).copied();
        (before, after)
    }
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

/// Heap entry ordered as a min-heap by length, then by node id.
///
/// `BinaryHeap` is a max-heap, so `cmp` is reversed.  The node id secondary
/// key makes tie-breaking on equal-length paths deterministic.
struct HeapEntry {
    length_m: f64,
    node: NodeId,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .length_m
            .total_cmp(&self.length_m)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

/// Compute the minimum-length path from `from` to `to`.
///
/// Returns [`SpatialError::UnknownNode`] if either endpoint is outside the
/// graph and [`SpatialError::NoRoute`] if the target is unreachable.
/// `from == to` yields the trivial single-node path of length 0.
///
/// Self-loop links are ignored implicitly: relaxing a strictly positive
/// loop never improves the settled distance of its node.
pub fn shortest_path(graph: &RoadGraph, from: NodeId, to: NodeId) -> Result<RoutePath, SpatialError> {
    if !graph.contains(from) {
        return Err(SpatialError::UnknownNode(from));
    }
    if !graph.contains(to) {
        return Err(SpatialError::UnknownNode(to));
    }
    if from == to {
        return Ok(RoutePath { nodes: vec![from], length_m: 0.0 });
    }

    let n = graph.node_count();
    // dist[v] = best known length (m) to reach v.
    let mut dist = vec![f64::INFINITY; n];
    // prev[v] = node that reached v; NodeId::INVALID for unreached nodes.
    let mut prev = vec![NodeId::INVALID; n];

    dist[from.index()] = 0.0;

    let mut heap = BinaryHeap::new();
    heap.push(HeapEntry { length_m: 0.0, node: from });

    while let Some(HeapEntry { length_m, node }) = heap.pop() {
        if node == to {
            return Ok(reconstruct(prev, from, to, length_m));
        }

        // Skip stale heap entries.
        if length_m > dist[node.index()] {
            continue;
        }

        for link in graph.links_from(node) {
            let new_length = length_m + link.length_m;
            if new_length < dist[link.target.index()] {
                dist[link.target.index()] = new_length;
                prev[link.target.index()] = node;
                heap.push(HeapEntry { length_m: new_length, node: link.target });
            }
        }
    }

    Err(SpatialError::NoRoute { from, to })
}

fn reconstruct(prev: Vec<NodeId>, from: NodeId, to: NodeId, total_m: f64) -> RoutePath {
    let mut nodes = vec![to];
    let mut cur = to;
    while cur != from {
        cur = prev[cur.index()];
        nodes.push(cur);
    }
    nodes.reverse();
    RoutePath { nodes, length_m: total_m }
}
