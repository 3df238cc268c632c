//! Vehicle disaggregation.
//!
//! For each class `k`:
//!
//! ```text
//! veh_k = (trips_person · (1 − intrazonal) · fa · (cap_k / cap_total)) / focup_k
//! ```
//!
//! Gates, in order of evaluation:
//!
//! 1. `Impossible` congruence → every class 0, total 0.
//! 2. Intrazonal trip → every class 0, total 0.
//! 3. Missing `fa`, `cap_total`, `cap_k`, or `focup_k` → `NaN` for the
//!    affected class, propagated into the total.
//! 4. Otherwise the formula, in IEEE-754 double precision, with the shares
//!    `cap_k / cap_total` used exactly as they come out — no renormalising.

use aforo_capacity::CapacityRecord;
use aforo_core::{Congruence, VehicleClass};

/// Vehicle counts for one row, by class, plus the total.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VehicleCounts {
    /// Indexed by [`VehicleClass::index`].
    pub by_class: [f64; VehicleClass::COUNT],
    /// Sum of the six classes; `NaN` as soon as any class is `NaN`.
    pub total: f64,
}

impl VehicleCounts {
    pub const ZERO: VehicleCounts = VehicleCounts {
        by_class: [0.0; VehicleClass::COUNT],
        total: 0.0,
    };

    #[inline]
    pub fn class(&self, class: VehicleClass) -> f64 {
        self.by_class[class.index()]
    }
}

impl Default for VehicleCounts {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Disaggregate one row's person trips into vehicle counts.
///
/// Pure function: no inputs are mutated, identical inputs give bit-identical
/// outputs.  `capacity` being `None` cannot survive a non-`Impossible`
/// congruence (the classifier guards it), but the function stays total: it
/// yields all-`NaN` rather than panicking.
pub fn disaggregate(
    trips_person: u32,
    intrazonal: bool,
    congruence: Congruence,
    capacity: Option<&CapacityRecord>,
) -> VehicleCounts {
    if congruence == Congruence::Impossible {
        return VehicleCounts::ZERO;
    }
    if intrazonal {
        return VehicleCounts::ZERO;
    }

    let persons = f64::from(trips_person);
    let mut by_class = [f64::NAN; VehicleClass::COUNT];

    if let Some(record) = capacity {
        let cap_total = record.cap_total();
        for class in VehicleClass::ALL {
            let k = class.index();
            if let (Some(fa), Some(total), Some(cap), Some(focup)) =
                (record.fa, cap_total, record.cap[k], record.focup[k])
            {
                by_class[k] = persons * fa * (cap / total) / focup;
            }
        }
    }

    // A NaN class poisons the sum, which is exactly the contract.
    let total = by_class.iter().sum();

    VehicleCounts { by_class, total }
}
