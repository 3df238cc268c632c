//! `aforo-pipeline` — the OD row table and the driver that fills it in.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`row`]      | `OdRow` — one survey row plus its derived fields       |
//! | [`bindings`] | `ZoneBindings`, `CheckpointBinding`                    |
//! | [`driver`]   | `Pipeline` — runs solver → sense → capacity → classes  |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Row loop runs on Rayon's thread pool.  Output identical. |

pub mod bindings;
pub mod driver;
pub mod row;


pub use bindings::{CheckpointBinding, ZoneBindings};
pub use driver::Pipeline;
pub use row::OdRow;
