//! The row-processing driver.
//!
//! For every row, in order: free-flow path, constrained path + sense,
//! capacity lookup, congruence, vehicles.  The stages form a straight
//! pipeline — the sense feeds the capacity lookup and the capacity gates the
//! vehicle computation, but nothing ever reaches back into an earlier
//! stage.
//!
//! # Determinism and parallelism
//!
//! The graph, bindings, capacity index, and catalogue are immutable; the
//! only mutable state is the row being filled in, owned by exactly one
//! worker.  With the `parallel` feature the row loop moves onto Rayon's
//! thread pool; because `process_row` is a pure function of the shared
//! state and the row's inputs, the parallel table is identical to the
//! sequential one.  Output order is input order either way — rows are
//! mutated in place, never reordered.

use aforo_assign::{classify, disaggregate, RowEvidence, VehicleCounts};
use aforo_capacity::{CapacityIndex, CheckpointClass, SenseCatalogue};
use aforo_core::SenseCode;
use aforo_route::{derive_sense, free_flow, via_checkpoint};
use aforo_spatial::RoadGraph;

use crate::bindings::{CheckpointBinding, ZoneBindings};
use crate::row::OdRow;

/// Shared, read-only state for one checkpoint's OD table.
pub struct Pipeline<'a> {
    graph: &'a RoadGraph,
    zones: &'a ZoneBindings,
    checkpoint: CheckpointBinding,
    class: CheckpointClass,
    capacity: &'a CapacityIndex,
    catalogue: &'a SenseCatalogue,
}

impl<'a> Pipeline<'a> {
    /// Assemble a pipeline for one checkpoint.
    ///
    /// The checkpoint is classified (directional vs aggregate) here, once,
    /// from the loaded capacity table; the classification is fixed for the
    /// run and passed into every row's direction derivation.
    pub fn new(
        graph: &'a RoadGraph,
        zones: &'a ZoneBindings,
        checkpoint: CheckpointBinding,
        capacity: &'a CapacityIndex,
        catalogue: &'a SenseCatalogue,
    ) -> Self {
        let class = capacity.classify(&checkpoint.id);
        log::debug!(
            "pipeline for checkpoint {}: node {}, {:?}",
            checkpoint.id,
            checkpoint.node,
            class
        );
        Self { graph, zones, checkpoint, class, capacity, catalogue }
    }

    pub fn class(&self) -> CheckpointClass {
        self.class
    }

    /// Process every row of the table in place.
    pub fn process(&self, rows: &mut [OdRow]) {
        #[cfg(not(feature = "parallel"))]
        {
            for row in rows.iter_mut() {
                self.process_row(row);
            }
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            rows.par_iter_mut().for_each(|row| self.process_row(row));
        }

        log::info!(
            "checkpoint {}: processed {} rows",
            self.checkpoint.id,
            rows.len()
        );
    }

    /// A general-type query (no checkpoint): every vehicle field is zero
    /// and no routing or capacity work is done.
    pub fn process_general(rows: &mut [OdRow]) {
        for row in rows.iter_mut() {
            row.vehicles = VehicleCounts::ZERO;
        }
    }

    // ── Per-row stages ────────────────────────────────────────────────────

    fn process_row(&self, row: &mut OdRow) {
        // Unresolvable zones leave every derived field at its sentinel;
        // the classifier then lands on Impossible through the NO_PATH gate.
        let origin = self.zones.resolve(&row.origin);
        let destination = self.zones.resolve(&row.destination);
        let (Some(origin), Some(destination)) = (origin, destination) else {
            self.finish_row(row);
            return;
        };

        // Free-flow path.
        row.mc_length_m = free_flow(self.graph, origin, destination).map(|p| p.length_m);

        // Constrained path and, from its geometry, the sense code.
        match via_checkpoint(self.graph, origin, self.checkpoint.node, destination) {
            None => {
                row.mc2_length_m = None;
                row.sense = SenseCode::Invalid;
            }
            Some(path) => {
                row.mc2_length_m = Some(path.length_m);
                row.sense = derive_sense(
                    self.graph,
                    &path,
                    self.checkpoint.node,
                    &self.checkpoint.id,
                    self.class,
                    self.catalogue,
                );
            }
        }

        self.finish_row(row);
    }

    /// Capacity lookup, congruence, vehicles — the stages that only read
    /// the row's already-derived fields.
    fn finish_row(&self, row: &mut OdRow) {
        row.capacity = self
            .capacity
            .lookup(&self.checkpoint.id, row.sense)
            .copied();

        row.congruence = classify(&RowEvidence {
            mc_length_m: row.mc_length_m,
            mc2_length_m: row.mc2_length_m,
            sense: row.sense,
            class: self.class,
            capacity: row.capacity.as_ref(),
            trips_person: row.trips_person,
        });

        row.vehicles = disaggregate(
            row.trips_person,
            row.intrazonal,
            row.congruence,
            row.capacity.as_ref(),
        );
    }
}
