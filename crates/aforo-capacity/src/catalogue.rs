//! Operator-supplied catalogue of permitted sense codes.
//!
//! The road geometry at a checkpoint admits only some direction pairs; the
//! operator's catalogue lists them.  A mechanically derived code outside the
//! catalogue is invalid — it is never remapped to a neighbouring direction.

use rustc_hash::{FxHashMap, FxHashSet};

use aforo_core::{CheckpointId, SenseCode};

/// Permitted sense codes per checkpoint.
///
/// A checkpoint with no catalogue entry permits every derivable code — the
/// catalogue is an optional restriction, not a requirement.
#[derive(Debug, Default)]
pub struct SenseCatalogue {
    map: FxHashMap<CheckpointId, FxHashSet<SenseCode>>,
}

impl SenseCatalogue {
    /// An empty catalogue: every checkpoint permits every code.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, checkpoint: CheckpointId, sense: SenseCode) {
        debug_assert!(!sense.is_invalid());
        self.map.entry(checkpoint).or_default().insert(sense);
    }

    /// Whether `sense` is permitted at `checkpoint`.
    pub fn permits(&self, checkpoint: &CheckpointId, sense: SenseCode) -> bool {
        match self.map.get(checkpoint) {
            None => true, // no catalogue for this checkpoint → unrestricted
            Some(permitted) => permitted.contains(&sense),
        }
    }

    /// Number of checkpoints with catalogue entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
