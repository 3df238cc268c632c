//! One OD survey row and its derived fields.

use aforo_assign::VehicleCounts;
use aforo_capacity::CapacityRecord;
use aforo_core::{Congruence, SenseCode, ZoneId};

/// One row of the OD person-trip table.
///
/// The input fields come from ingest; every derived field starts at its
/// failed-state default (`None` / `Invalid` / `Impossible` / zero counts)
/// and is overwritten by the driver.  A row the driver could not evidence
/// therefore reads exactly like a processed-and-rejected row, which is the
/// contract: per-row conditions are sentinels, never aborts.
#[derive(Clone, Debug)]
pub struct OdRow {
    // ── Input ─────────────────────────────────────────────────────────────
    pub origin: ZoneId,
    pub destination: ZoneId,
    /// Person trips after ingest coercion (censored `<10`, missing, and
    /// sub-10 values all arrive here as 1).
    pub trips_person: u32,

    // ── Derived ───────────────────────────────────────────────────────────
    /// `origin == destination`.  An intrazonal trip contributes no vehicles.
    pub intrazonal: bool,
    /// Free-flow path length in metres; `None` = NO_PATH.
    pub mc_length_m: Option<f64>,
    /// Constrained (via checkpoint) path length in metres; `None` = NO_PATH.
    pub mc2_length_m: Option<f64>,
    /// Direction code at the checkpoint.
    pub sense: SenseCode,
    /// Capacity record matched for `(checkpoint, sense)`.
    pub capacity: Option<CapacityRecord>,
    /// Congruence class of the trip.
    pub congruence: Congruence,
    /// Vehicle counts by class plus total.
    pub vehicles: VehicleCounts,
}

impl OdRow {
    /// Build an unprocessed row from its input fields.
    pub fn new(origin: ZoneId, destination: ZoneId, trips_person: u32) -> Self {
        let intrazonal = origin == destination;
        Self {
            origin,
            destination,
            trips_person,
            intrazonal,
            mc_length_m: None,
            mc2_length_m: None,
            sense: SenseCode::Invalid,
            capacity: None,
            congruence: Congruence::Impossible,
            vehicles: VehicleCounts::ZERO,
        }
    }
}
