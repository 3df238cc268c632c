//! Direction derivation at the checkpoint node.
//!
//! The sense code comes from the constrained path's geometry and nowhere
//! else: the two edges incident to the checkpoint node give an inbound and
//! an outbound bearing, each bearing maps to a cardinal quadrant, and the
//! pair forms the candidate code.  The OD input never carries a direction
//! column that survives ingest, and no fallback reconstructs one.

use aforo_capacity::{CheckpointClass, SenseCatalogue};
use aforo_core::{Cardinal, CheckpointId, NodeId, SenseCode};
use aforo_spatial::{RoadGraph, RoutePath};

/// Derive the sense code of a constrained path at `checkpoint`.
///
/// For an [`Aggregate`](CheckpointClass::Aggregate) checkpoint the code is
/// `"0"` unconditionally; no bearings are computed.
///
/// For a directional checkpoint:
///
/// 1. Take the nodes immediately before (`u`) and after (`w`) the first
///    occurrence of the checkpoint node on the path.  A missing side (the
///    trip starts or ends at the checkpoint) makes the code invalid.
/// 2. The inbound bearing is `u → checkpoint`, the outbound
///    `checkpoint → w`; each maps to a cardinal quadrant
///    ([`Cardinal::from_bearing_deg`]).
/// 3. The candidate pair must be permitted by the operator's catalogue;
///    otherwise it is invalid.  Colinear incident edges form their code
///    mechanically (e.g. `"1-1"`) and pass iff catalogued.
pub fn derive_sense(
    graph: &RoadGraph,
    path: &RoutePath,
    checkpoint: NodeId,
    checkpoint_id: &CheckpointId,
    class: CheckpointClass,
    catalogue: &SenseCatalogue,
) -> SenseCode {
    if class == CheckpointClass::Aggregate {
        return SenseCode::Aggregate;
    }

    let (Some(u), Some(w)) = path.neighbours_of(checkpoint) else {
        return SenseCode::Invalid;
    };

    let theta_in  = graph.position(u).bearing_deg(graph.position(checkpoint));
    let theta_out = graph.position(checkpoint).bearing_deg(graph.position(w));

    let candidate = SenseCode::Directional(
        Cardinal::from_bearing_deg(theta_in),
        Cardinal::from_bearing_deg(theta_out),
    );

    if catalogue.permits(checkpoint_id, candidate) {
        candidate
    } else {
        SenseCode::Invalid
    }
}
