//! Capacity record types.
//!
//! Every numeric field is an `Option<f64>`: the capacity survey has holes,
//! and a hole must stay a hole — never a zero, never an estimate.  The
//! file's TOTAL column is not represented at all; `cap_total` is always
//! recomputed from the six class capacities.

use aforo_core::{CheckpointId, SenseCode, VehicleClass};

/// Aggregated capacity data for one `(checkpoint, sense)` key.
///
/// `cap` and `focup` are indexed by [`VehicleClass::index`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CapacityRecord {
    /// Hourly vehicle capacity per class.
    pub cap: [Option<f64>; VehicleClass::COUNT],
    /// Adjustment factor applied to the whole direction.
    pub fa: Option<f64>,
    /// Persons per vehicle, per class.
    pub focup: [Option<f64>; VehicleClass::COUNT],
}

impl CapacityRecord {
    #[inline]
    pub fn cap(&self, class: VehicleClass) -> Option<f64> {
        self.cap[class.index()]
    }

    #[inline]
    pub fn focup(&self, class: VehicleClass) -> Option<f64> {
        self.focup[class.index()]
    }

    /// Sum of the six class capacities, or `None` if any class is missing.
    ///
    /// A partial sum would silently understate the direction's throughput,
    /// so the total is only defined when every class is.
    pub fn cap_total(&self) -> Option<f64> {
        self.cap
            .iter()
            .copied()
            .try_fold(0.0, |acc, c| c.map(|v| acc + v))
    }
}

/// One raw row of the capacity table, before grouping.
///
/// Several raw rows may share a `(checkpoint, sense)` key (e.g. one row per
/// survey day); [`CapacityIndex::from_raw_rows`](crate::CapacityIndex::from_raw_rows)
/// aggregates them.
#[derive(Clone, Debug)]
pub struct RawCapacityRow {
    pub checkpoint: CheckpointId,
    pub sense: SenseCode,
    pub cap: [Option<f64>; VehicleClass::COUNT],
    pub fa: Option<f64>,
    pub focup: [Option<f64>; VehicleClass::COUNT],
}
