//! Free-flow (unconstrained) shortest path.

use aforo_core::NodeId;
use aforo_spatial::{shortest_path, RoadGraph, RoutePath};

/// Minimum-length path from `origin` to `destination`, ignoring the
/// checkpoint entirely.
///
/// `None` is the NO_PATH sentinel: the nodes are disconnected (or outside
/// the graph).  The caller records it on the row; it is not an error.
pub fn free_flow(graph: &RoadGraph, origin: NodeId, destination: NodeId) -> Option<RoutePath> {
    shortest_path(graph, origin, destination).ok()
}
