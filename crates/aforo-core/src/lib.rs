//! `aforo-core` — foundational types for the `aforo` workspace.
//!
//! This crate is a dependency of every other `aforo-*` crate.  It intentionally
//! has no `aforo-*` dependencies and a single external one (`serde`, for the
//! external-id newtypes the loaders deserialize).  Failures are a property of
//! the subsystems, not of these types; the error enums live with the graph
//! (`aforo-spatial`) and the loaders (`aforo-io`).
//!
//! # What lives here
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`ids`]        | `NodeId`, `ZoneId`, `CheckpointId`                     |
//! | [`plane`]      | `PlanePoint`, planar distance and bearing              |
//! | [`sense`]      | `Cardinal`, `SenseCode`                                |
//! | [`category`]   | `VehicleClass` (the six counted vehicle classes)       |
//! | [`congruence`] | `Congruence` (trip plausibility class)                 |

pub mod category;
pub mod congruence;
pub mod ids;
pub mod plane;
pub mod sense;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use category::VehicleClass;
pub use congruence::Congruence;
pub use ids::{CheckpointId, NodeId, ZoneId};
pub use plane::PlanePoint;
pub use sense::{Cardinal, SenseCode};
