//! `aforo-capacity` — per-direction checkpoint capacity data.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`record`]    | `CapacityRecord`, `RawCapacityRow`                      |
//! | [`index`]     | `CapacityIndex` (exact-match lookup), `CheckpointClass` |
//! | [`catalogue`] | `SenseCatalogue` (permitted directional codes)          |
//!
//! The index and catalogue are immutable after construction and shared
//! read-only across all row computations.
//!
//! # Lookup contract
//!
//! `CapacityIndex::lookup` is an **exact key match** on
//! `(checkpoint, sense)`.  There is no fallback to the aggregate row, no
//! averaging, no symmetric-direction substitution, no nearest neighbour.
//! A trip whose direction has no capacity row gets no capacity record, full
//! stop.

pub mod catalogue;
pub mod index;
pub mod record;


pub use catalogue::SenseCatalogue;
pub use index::{CapacityIndex, CheckpointClass};
pub use record::{CapacityRecord, RawCapacityRow};
