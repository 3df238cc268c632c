//! Zone and checkpoint bindings to graph nodes.
//!
//! Each survey zone and each checkpoint is represented by exactly one graph
//! node: the node nearest (by planar distance) to its boundary polygon's
//! centroid.  The bindings are built once at load time and shared read-only
//! by all row computations.

use rustc_hash::FxHashMap;

use aforo_core::{CheckpointId, NodeId, ZoneId};

/// Immutable map from zone id to its representative graph node.
#[derive(Debug, Default)]
pub struct ZoneBindings {
    map: FxHashMap<ZoneId, NodeId>,
}

impl ZoneBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, zone: ZoneId, node: NodeId) {
        self.map.insert(zone, node);
    }

    /// Representative node of `zone`, or `None` for an unknown zone
    /// (a per-row condition, not a construction error).
    pub fn resolve(&self, zone: &ZoneId) -> Option<NodeId> {
        self.map.get(zone).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl FromIterator<(ZoneId, NodeId)> for ZoneBindings {
    fn from_iter<I: IntoIterator<Item = (ZoneId, NodeId)>>(iter: I) -> Self {
        Self { map: iter.into_iter().collect() }
    }
}

/// The single checkpoint of a run, bound to its representative node.
#[derive(Clone, Debug)]
pub struct CheckpointBinding {
    pub id: CheckpointId,
    pub node: NodeId,
}
