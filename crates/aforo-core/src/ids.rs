//! Identifier types.
//!
//! Two kinds of identity live in this system and they are deliberately not
//! interchangeable.  Graph nodes are dense indices minted by the graph
//! builder, so `NodeId` is a `u32` newtype that doubles as a vector index.
//! Zones and checkpoints are named by the survey files, so their ids stay
//! strings: they are compared and hashed, never used to index anything.

use std::fmt;

// ── NodeId ────────────────────────────────────────────────────────────────────

/// Dense index of a road-graph node.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Reserved non-node value, used where an algorithm needs an
    /// "unreached" marker in a `NodeId` slot.
    pub const INVALID: NodeId = NodeId(u32::MAX);

    /// The id as a vector index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node {}", self.0)
    }
}

// ── Survey identifiers ────────────────────────────────────────────────────────

/// Generate a string-backed identifier newtype for external survey IDs.
macro_rules! string_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        $vis struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }
    };
}

string_id! {
    /// Identifier of a survey zone (origin/destination of an OD row).
    pub struct ZoneId;
}

string_id! {
    /// Identifier of a traffic checkpoint, lifted from the OD input filename.
    pub struct CheckpointId;
}
