//! Loader error type.

use thiserror::Error;

use aforo_core::{CheckpointId, ZoneId};

/// Construction-time failures.  Any of these aborts the run with a non-zero
/// exit code; none of them can be raised by a single OD row.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    #[error("GeoJSON parse error: {0}")]
    GeoJsonParse(#[from] serde_json::Error),

    #[error("required column missing: no header matches {0:?}")]
    MissingColumn(&'static [&'static str]),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("capacity row for checkpoint {checkpoint}: unknown sense {sense:?}")]
    UnknownSense { checkpoint: String, sense: String },

    #[error(
        "network coordinates fit inside lon/lat ranges — reproject to a metric CRS before loading"
    )]
    GeographicCoords,

    #[error("boundary feature without a usable id")]
    MissingFeatureId,

    #[error("zone {0} appears more than once in the boundary file")]
    DuplicateZone(ZoneId),

    #[error("boundary feature {0:?} has no geometry with a centroid")]
    EmptyGeometry(String),

    #[error("checkpoint {0} not found in the boundary file")]
    CheckpointNotFound(CheckpointId),

    #[error("cannot bind boundaries: the road network has no nodes")]
    EmptyNetwork,
}

pub type LoadResult<T> = Result<T, LoadError>;
