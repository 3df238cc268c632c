//! Exact-match capacity index and checkpoint classification.

use rustc_hash::FxHashMap;

use aforo_core::{CheckpointId, SenseCode, VehicleClass};

use crate::record::{CapacityRecord, RawCapacityRow};

// ── CheckpointClass ───────────────────────────────────────────────────────────

/// Whether a checkpoint's capacity table distinguishes directions.
///
/// The classification is a function of the loaded capacity table and fixed
/// for the whole run: compute it once before row iteration, not per row.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CheckpointClass {
    /// At least one capacity row with a directional sense code.  Direction
    /// derivation applies; an underivable or uncatalogued code is invalid.
    Directional,
    /// Only aggregate (`"0"`) rows.  Direction derivation is suppressed and
    /// every trip is keyed to the aggregate row.
    Aggregate,
}

// ── CapacityIndex ─────────────────────────────────────────────────────────────

/// Immutable map from `(checkpoint, sense)` to the aggregated capacity
/// record.  Lookup is exact; see the crate docs for the no-fallback
/// contract.
#[derive(Debug, Default)]
pub struct CapacityIndex {
    /// Outer key: checkpoint; inner key: sense.  The nested shape lets both
    /// `lookup` and `classify` run without cloning a checkpoint id.
    map: FxHashMap<CheckpointId, FxHashMap<SenseCode, CapacityRecord>>,
}

impl CapacityIndex {
    /// Group raw table rows by `(checkpoint, sense)` and aggregate each
    /// group into one record:
    ///
    /// - class capacities are **summed** (missing when no row in the group
    ///   carries the class),
    /// - `fa` is the **arithmetic mean** of the present values,
    /// - each `focup` is the **capacity-weighted mean** of its class,
    ///   skipping rows whose weight (`cap`) is 0 or missing; a zero weight
    ///   sum leaves the occupancy missing.
    ///
    /// Applying the rule to an already-grouped table is a no-op.
    ///
    /// Rows with an invalid sense never enter the index; the loader rejects
    /// them before this point.
    pub fn from_raw_rows(rows: Vec<RawCapacityRow>) -> Self {
        let mut groups: FxHashMap<CheckpointId, FxHashMap<SenseCode, Vec<RawCapacityRow>>> =
            FxHashMap::default();
        for row in rows {
            debug_assert!(!row.sense.is_invalid());
            groups
                .entry(row.checkpoint.clone())
                .or_default()
                .entry(row.sense)
                .or_default()
                .push(row);
        }

        let map = groups
            .into_iter()
            .map(|(cp, by_sense)| {
                let records = by_sense
                    .into_iter()
                    .map(|(sense, group)| (sense, aggregate_group(&group)))
                    .collect();
                (cp, records)
            })
            .collect();

        Self { map }
    }

    /// Exact-match lookup.  `Invalid` never matches anything.
    pub fn lookup(&self, checkpoint: &CheckpointId, sense: SenseCode) -> Option<&CapacityRecord> {
        if sense.is_invalid() {
            return None;
        }
        self.map.get(checkpoint)?.get(&sense)
    }

    /// Classify a checkpoint from its loaded rows: directional if any row
    /// carries a directional sense, aggregate otherwise (including the case
    /// of a checkpoint with no rows at all).
    pub fn classify(&self, checkpoint: &CheckpointId) -> CheckpointClass {
        let directional = self
            .map
            .get(checkpoint)
            .is_some_and(|by_sense| by_sense.keys().any(|s| s.is_directional()));
        if directional {
            CheckpointClass::Directional
        } else {
            CheckpointClass::Aggregate
        }
    }

    /// Number of `(checkpoint, sense)` entries.
    pub fn len(&self) -> usize {
        self.map.values().map(|by_sense| by_sense.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

// ── Aggregation ───────────────────────────────────────────────────────────────

fn aggregate_group(group: &[RawCapacityRow]) -> CapacityRecord {
    let mut cap   = [None; VehicleClass::COUNT];
    let mut focup = [None; VehicleClass::COUNT];

    for class in VehicleClass::ALL {
        let k = class.index();

        // Sum of present capacities; missing only when no row contributes.
        let mut sum = None;
        for row in group {
            if let Some(v) = row.cap[k] {
                sum = Some(sum.unwrap_or(0.0) + v);
            }
        }
        cap[k] = sum;

        // Capacity-weighted occupancy.  A row contributes only when both
        // its weight (cap > 0) and its occupancy are present.
        let mut weighted = 0.0;
        let mut weight_sum = 0.0;
        for row in group {
            if let (Some(w), Some(f)) = (row.cap[k], row.focup[k]) {
                if w > 0.0 {
                    weighted += w * f;
                    weight_sum += w;
                }
            }
        }
        focup[k] = (weight_sum > 0.0).then(|| weighted / weight_sum);
    }

    // Arithmetic mean of the present adjustment factors.
    let fas: Vec<f64> = group.iter().filter_map(|r| r.fa).collect();
    let fa = (!fas.is_empty()).then(|| fas.iter().sum::<f64>() / fas.len() as f64);

    CapacityRecord { cap, fa, focup }
}
