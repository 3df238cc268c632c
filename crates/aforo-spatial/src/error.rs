//! Failure cases of the graph layer.
//!
//! Only queries can fail here; graph construction is infallible once the
//! loaders have screened their input.

use thiserror::Error;

use aforo_core::NodeId;

#[derive(Debug, Error)]
pub enum SpatialError {
    /// The target cannot be reached from the source over the loaded links.
    #[error("{to} is unreachable from {from}")]
    NoRoute { from: NodeId, to: NodeId },

    /// An endpoint id lies outside the graph.
    #[error("{0} is outside the graph")]
    UnknownNode(NodeId),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
