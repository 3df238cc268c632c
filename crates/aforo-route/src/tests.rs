//! Unit tests for aforo-route.

use aforo_capacity::{CheckpointClass, SenseCatalogue};
use aforo_core::{Cardinal, CheckpointId, NodeId, PlanePoint, SenseCode};
use aforo_spatial::{RoadGraph, RoadGraphBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

const X0: f64 = 500_000.0;
const Y0: f64 = 4_649_000.0;

fn pt(x: f64, y: f64) -> PlanePoint {
    PlanePoint::new(X0 + x, Y0 + y)
}

/// Plus-shaped junction: the checkpoint sits at the centre with one arm per
/// cardinal direction.
///
/// ```text
///          N (0,100)
///          |
/// W ------ C ------ E     C:(0,0)  W:(-100,0)  E:(100,0)
///          |
///          S (0,-100)
/// ```
///
/// Returns `(graph, [c, n, e, s, w])`.
fn plus_junction() -> (RoadGraph, [NodeId; 5]) {
    let mut b = RoadGraphBuilder::new();
    let c = b.push_node(pt(0.0, 0.0));
    let n = b.push_node(pt(0.0, 100.0));
    let e = b.push_node(pt(100.0, 0.0));
    let s = b.push_node(pt(0.0, -100.0));
    let w = b.push_node(pt(-100.0, 0.0));
    b.link_two_way(c, n, 100.0);
    b.link_two_way(c, e, 100.0);
    b.link_two_way(c, s, 100.0);
    b.link_two_way(c, w, 100.0);
    (b.finish(), [c, n, e, s, w])
}

fn cp_id() -> CheckpointId {
    CheckpointId::new("2003")
}

// ── Free-flow solver ──────────────────────────────────────────────────────────

#[cfg(test)]
mod mc {
    use super::*;
    use crate::free_flow;

    #[test]
    fn connected_pair_has_length() {
        let (graph, [_, n, e, ..]) = plus_junction();
        let path = free_flow(&graph, n, e).unwrap();
        assert_eq!(path.length_m, 200.0); // through the centre
    }

    #[test]
    fn disconnected_pair_is_no_path() {
        let mut b = RoadGraphBuilder::new();
        let a = b.push_node(pt(0.0, 0.0));
        let z = b.push_node(pt(100.0, 0.0));
        let graph = b.finish();
        assert!(free_flow(&graph, a, z).is_none());
    }
}

// ── Constrained solver ────────────────────────────────────────────────────────

#[cfg(test)]
mod mc2 {
    use super::*;
    use crate::{free_flow, via_checkpoint};

    #[test]
    fn length_is_sum_of_segments() {
        let (graph, [c, n, e, ..]) = plus_junction();
        let path = via_checkpoint(&graph, n, c, e).unwrap();
        assert_eq!(path.length_m, 200.0);
        assert_eq!(path.nodes, vec![n, c, e]);
    }

    #[test]
    fn checkpoint_appears_exactly_once_at_seam() {
        let (graph, [c, n, e, ..]) = plus_junction();
        let path = via_checkpoint(&graph, n, c, e).unwrap();
        let occurrences = path.nodes.iter().filter(|&&x| x == c).count();
        assert_eq!(occurrences, 1);
    }

    #[test]
    fn constrained_never_shorter_than_free_flow() {
        let (graph, [c, n, e, s, w]) = plus_junction();
        for &(o, d) in &[(n, e), (n, s), (w, e), (e, w)] {
            let mc  = free_flow(&graph, o, d).unwrap();
            let mc2 = via_checkpoint(&graph, o, c, d).unwrap();
            assert!(mc2.length_m >= mc.length_m - 1e-6);
        }
    }

    #[test]
    fn unreachable_checkpoint_is_no_path() {
        // Two components: o—d connected, checkpoint isolated.
        let mut b = RoadGraphBuilder::new();
        let o = b.push_node(pt(0.0, 0.0));
        let d = b.push_node(pt(100.0, 0.0));
        let c = b.push_node(pt(5_000.0, 5_000.0));
        b.link_two_way(o, d, 100.0);
        let graph = b.finish();

        assert!(crate::free_flow(&graph, o, d).is_some());
        assert!(via_checkpoint(&graph, o, c, d).is_none());
    }

    #[test]
    fn origin_at_checkpoint_starts_there() {
        let (graph, [c, _, e, ..]) = plus_junction();
        let path = via_checkpoint(&graph, c, c, e).unwrap();
        assert_eq!(path.nodes, vec![c, e]);
        assert_eq!(path.length_m, 100.0);
    }
}

// ── Sense derivation ──────────────────────────────────────────────────────────

#[cfg(test)]
mod sense {
    use super::*;
    use crate::{derive_sense, via_checkpoint};

    fn derive(
        graph: &RoadGraph,
        path: &aforo_spatial::RoutePath,
        c: NodeId,
        class: CheckpointClass,
        catalogue: &SenseCatalogue,
    ) -> SenseCode {
        derive_sense(graph, path, c, &cp_id(), class, catalogue)
    }

    #[test]
    fn north_to_east_is_4_2() {
        // Entering southbound (from the north arm) and leaving eastbound.
        let (graph, [c, n, e, ..]) = plus_junction();
        let path = via_checkpoint(&graph, n, c, e).unwrap();
        let code = derive(&graph, &path, c, CheckpointClass::Directional, &SenseCatalogue::empty());
        assert_eq!(code, SenseCode::Directional(Cardinal::South, Cardinal::East));
        assert_eq!(code.to_string(), "4-2");
    }

    #[test]
    fn all_four_approaches_map_to_their_quadrants() {
        let (graph, [c, n, e, s, w]) = plus_junction();
        let cat = SenseCatalogue::empty();
        let cases = [
            (s, n, "1-1"), // northbound through
            (w, e, "2-2"), // eastbound through
            (e, w, "3-3"), // westbound through
            (n, s, "4-4"), // southbound through
        ];
        for (o, d, expected) in cases {
            let path = via_checkpoint(&graph, o, c, d).unwrap();
            let code = derive(&graph, &path, c, CheckpointClass::Directional, &cat);
            assert_eq!(code.to_string(), expected, "{o} → {d}");
        }
    }

    #[test]
    fn aggregate_suppresses_derivation() {
        let (graph, [c, n, e, ..]) = plus_junction();
        let path = via_checkpoint(&graph, n, c, e).unwrap();
        let code = derive(&graph, &path, c, CheckpointClass::Aggregate, &SenseCatalogue::empty());
        assert_eq!(code, SenseCode::Aggregate);
    }

    #[test]
    fn origin_at_checkpoint_is_invalid() {
        let (graph, [c, _, e, ..]) = plus_junction();
        let path = via_checkpoint(&graph, c, c, e).unwrap();
        let code = derive(&graph, &path, c, CheckpointClass::Directional, &SenseCatalogue::empty());
        assert_eq!(code, SenseCode::Invalid);
    }

    #[test]
    fn destination_at_checkpoint_is_invalid() {
        let (graph, [c, n, ..]) = plus_junction();
        let path = via_checkpoint(&graph, n, c, c).unwrap();
        let code = derive(&graph, &path, c, CheckpointClass::Directional, &SenseCatalogue::empty());
        assert_eq!(code, SenseCode::Invalid);
    }

    #[test]
    fn catalogue_rejects_unlisted_code() {
        let (graph, [c, n, e, ..]) = plus_junction();
        let path = via_checkpoint(&graph, n, c, e).unwrap();

        let mut cat = SenseCatalogue::empty();
        cat.insert(cp_id(), SenseCode::parse("1-3").unwrap());

        let code = derive(&graph, &path, c, CheckpointClass::Directional, &cat);
        assert_eq!(code, SenseCode::Invalid);
    }

    #[test]
    fn catalogue_accepts_listed_code() {
        let (graph, [c, n, e, ..]) = plus_junction();
        let path = via_checkpoint(&graph, n, c, e).unwrap();

        let mut cat = SenseCatalogue::empty();
        cat.insert(cp_id(), SenseCode::parse("4-2").unwrap());

        let code = derive(&graph, &path, c, CheckpointClass::Directional, &cat);
        assert_eq!(code.to_string(), "4-2");
    }

    #[test]
    fn colinear_edges_form_code_mechanically() {
        // Straight west→east road through the checkpoint: both bearings are
        // eastbound, code "2-2", accepted only when catalogued.
        let (graph, [c, _, e, _, w]) = plus_junction();
        let path = via_checkpoint(&graph, w, c, e).unwrap();

        let mut cat = SenseCatalogue::empty();
        cat.insert(cp_id(), SenseCode::parse("2-2").unwrap());
        let code = derive(&graph, &path, c, CheckpointClass::Directional, &cat);
        assert_eq!(code.to_string(), "2-2");

        let mut other = SenseCatalogue::empty();
        other.insert(cp_id(), SenseCode::parse("1-1").unwrap());
        let rejected = derive(&graph, &path, c, CheckpointClass::Directional, &other);
        assert_eq!(rejected, SenseCode::Invalid);
    }
}
