//! `aforo-spatial` — projected road graph, spatial indexing, and routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `RoadGraph` (adjacency runs + R-tree), `RoadGraphBuilder`   |
//! | [`router`]  | `shortest_path` (Dijkstra by length), `RoutePath`           |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                          |
//!
//! The graph is loaded once at startup and immutable thereafter; all row
//! computations query it concurrently through shared references.

pub mod error;
pub mod network;
pub mod router;


pub use error::{SpatialError, SpatialResult};
pub use network::{Link, RoadGraph, RoadGraphBuilder};
pub use router::{shortest_path, RoutePath};
