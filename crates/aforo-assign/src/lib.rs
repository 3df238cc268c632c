//! `aforo-assign` — from routed OD rows to vehicle counts.
//!
//! # Crate layout
//!
//! | Module         | Contents                                             |
//! |----------------|------------------------------------------------------|
//! | [`congruence`] | `RowEvidence`, `classify` — the strict-mode classes  |
//! | [`vehicles`]   | `VehicleCounts`, `disaggregate` — the per-class split|
//!
//! Both entry points are pure functions: identical inputs produce
//! bit-identical outputs, with no observable side effects.  That property is
//! what lets the pipeline run rows on any number of threads without
//! synchronisation.

pub mod congruence;
pub mod vehicles;


pub use congruence::{classify, RowEvidence};
pub use vehicles::{disaggregate, VehicleCounts};
