//! `aforo-route` — the two path solvers and direction derivation.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`mc`]    | `free_flow` — unconstrained shortest path O→D              |
//! | [`mc2`]   | `via_checkpoint` — shortest path O→checkpoint→D            |
//! | [`sense`] | bearing derivation at the checkpoint node, cardinal codes  |
//!
//! # Sentinels, not errors
//!
//! The solvers return `Option`: `None` is the NO_PATH sentinel of the row
//! model, not a failure of the run.  Routing errors from the graph layer are
//! absorbed at this boundary; nothing in this crate aborts a table.

pub mod mc;
pub mod mc2;
pub mod sense;

#[cfg(test)]
mod tests;

pub use mc::free_flow;
pub use mc2::via_checkpoint;
pub use sense::derive_sense;
