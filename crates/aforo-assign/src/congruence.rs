//! Strict-mode congruence classification.
//!
//! A row is `Impossible` the moment any link in the evidence chain is
//! missing: no free-flow path, no constrained path, no valid direction at a
//! directional checkpoint, no capacity record, or no usable capacity total.
//! Only a fully evidenced row is graded on its detour ratio and capacity
//! score.

use aforo_capacity::{CapacityRecord, CheckpointClass};
use aforo_core::{Congruence, SenseCode};

/// Everything the classifier looks at for one row.
#[derive(Clone, Copy, Debug)]
pub struct RowEvidence<'a> {
    /// Free-flow path length, or `None` for NO_PATH.
    pub mc_length_m: Option<f64>,
    /// Constrained path length, or `None` for NO_PATH.
    pub mc2_length_m: Option<f64>,
    /// Derived sense code.
    pub sense: SenseCode,
    /// Checkpoint classification for the run.
    pub class: CheckpointClass,
    /// Capacity record matched for `(checkpoint, sense)`, if any.
    pub capacity: Option<&'a CapacityRecord>,
    /// Person trips asserted by the row (≥ 1 after ingest coercion).
    pub trips_person: u32,
}

/// Relative slack of one ULP on threshold comparisons, to keep rows whose
/// detour ratio lands exactly on a boundary from flapping between classes
/// across platforms.
const SLACK: f64 = f64::EPSILON;

#[inline]
fn within(lo: f64, x: f64, hi: f64) -> bool {
    x >= lo * (1.0 - SLACK) && x <= hi * (1.0 + SLACK)
}

/// Classify one row.
///
/// The graded classes use two scores:
///
/// - `e1 = mc2 / mc` — the detour ratio of crossing the checkpoint
///   (≥ 1 by construction, up to numeric slack);
/// - `e2 = min(1, cap_total / trips_person)` — how plausible the person
///   demand is against the direction's total capacity.
///
/// | condition                        | class                 |
/// |----------------------------------|-----------------------|
/// | 0.9 ≤ e1 ≤ 1.2 and e2 ≥ 0.8      | 1 Extremely possible  |
/// | 0.8 ≤ e1 ≤ 1.5 and e2 ≥ 0.5      | 2 Possible            |
/// | e1 < 2.0                         | 3 Unlikely            |
/// | otherwise                        | 4 Impossible          |
///
/// Conditions are evaluated top-down; the first match wins.
pub fn classify(ev: &RowEvidence) -> Congruence {
    let Some(mc) = ev.mc_length_m else {
        return Congruence::Impossible;
    };
    let Some(mc2) = ev.mc2_length_m else {
        return Congruence::Impossible;
    };
    if ev.class == CheckpointClass::Directional && ev.sense.is_invalid() {
        return Congruence::Impossible;
    }
    let Some(record) = ev.capacity else {
        return Congruence::Impossible;
    };
    let Some(cap_total) = record.cap_total() else {
        return Congruence::Impossible;
    };
    if cap_total == 0.0 {
        return Congruence::Impossible;
    }

    let e1 = mc2 / mc;
    let e2 = (cap_total / f64::from(ev.trips_person)).min(1.0);

    if within(0.9, e1, 1.2) && e2 >= 0.8 {
        Congruence::ExtremelyPossible
    } else if within(0.8, e1, 1.5) && e2 >= 0.5 {
        Congruence::Possible
    } else if e1 < 2.0 {
        Congruence::Unlikely
    } else {
        Congruence::Impossible
    }
}
