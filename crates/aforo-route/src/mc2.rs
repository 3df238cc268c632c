//! Checkpoint-constrained shortest path.
//!
//! The constrained path is the concatenation of two unconstrained segments,
//! origin→checkpoint and checkpoint→destination, with the checkpoint node
//! appearing exactly once at the junction.  Its length is the sum of the
//! segment lengths, which makes it ≥ the free-flow length by construction.

use aforo_core::NodeId;
use aforo_spatial::{shortest_path, RoadGraph, RoutePath};

/// Shortest path origin→checkpoint→destination.
///
/// `None` (the NO_PATH sentinel) when either segment has no path.  When
/// `origin == checkpoint` or `checkpoint == destination` the corresponding
/// segment is trivial and the concatenated path simply starts or ends at
/// the checkpoint — direction derivation then fails on the missing
/// neighbour, not here.
pub fn via_checkpoint(
    graph: &RoadGraph,
    origin: NodeId,
    checkpoint: NodeId,
    destination: NodeId,
) -> Option<RoutePath> {
    let inbound  = shortest_path(graph, origin, checkpoint).ok()?;
    let outbound = shortest_path(graph, checkpoint, destination).ok()?;

    let mut nodes = inbound.nodes;
    nodes.extend_from_slice(&outbound.nodes[1..]); // checkpoint once, at the seam

    Some(RoutePath {
        nodes,
        length_m: inbound.length_m + outbound.length_m,
    })
}
