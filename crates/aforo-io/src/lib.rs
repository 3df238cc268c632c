//! `aforo-io` — everything that crosses a file boundary.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`od`]        | OD person-trip CSV ingest, checkpoint id from filename  |
//! | [`network`]   | GeoJSON road network → `RoadGraph`                      |
//! | [`zones`]     | GeoJSON boundaries → zone/checkpoint node bindings      |
//! | [`capacity`]  | Capacity CSV → `CapacityIndex`                          |
//! | [`catalogue`] | Permitted-sense CSV → `SenseCatalogue`                  |
//! | [`output`]    | Vehicle table CSV writer                                |
//! | [`error`]     | `LoadError`, `LoadResult<T>`                            |
//!
//! Every loader has a `_reader` variant generic over `std::io::Read` so
//! tests feed `io::Cursor` instead of temp files, plus a path wrapper for
//! the binary.
//!
//! Failures here are construction errors: they abort the run.  Conditions
//! that belong to a single OD row (unknown zone, no path, …) are not this
//! crate's business — they surface later, as sentinels on the row.

pub mod capacity;
pub mod catalogue;
pub mod error;
pub mod network;
pub mod od;
pub mod output;
pub mod zones;

#[cfg(test)]
mod tests;

pub use capacity::{load_capacity_csv, load_capacity_reader};
pub use catalogue::{load_catalogue_csv, load_catalogue_reader};
pub use error::{LoadError, LoadResult};
pub use network::{load_network_geojson, load_network_reader};
pub use od::{checkpoint_id_from_path, load_od_csv, load_od_reader};
pub use output::{write_vehicle_csv, write_vehicle_table};
pub use zones::{load_checkpoint_binding, load_checkpoint_reader, load_zone_bindings, load_zone_reader};
