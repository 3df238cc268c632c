//! Zone and checkpoint boundary loader.
//!
//! The boundary file is a GeoJSON `FeatureCollection` of polygons, one per
//! zone (or checkpoint).  Each feature's representative graph node is the
//! node nearest to its geometry's centroid, by planar distance.  One id
//! binds to exactly one node; a duplicated id is a construction error.
//!
//! The feature id is taken from the `id`/`zone_id`/`name` property, falling
//! back to the GeoJSON feature id.  Numbers are stringified, so `1001` and
//! `"1001"` name the same zone.

use std::io::Read;
use std::path::Path;

use geo::Centroid;
use geojson::{GeoJson, JsonValue};

use aforo_core::{CheckpointId, NodeId, PlanePoint, ZoneId};
use aforo_pipeline::{CheckpointBinding, ZoneBindings};
use aforo_spatial::RoadGraph;

use crate::error::{LoadError, LoadResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load zone bindings from a GeoJSON boundary file.
pub fn load_zone_bindings(path: &Path, graph: &RoadGraph) -> LoadResult<ZoneBindings> {
    let file = std::fs::File::open(path)?;
    load_zone_reader(file, graph)
}

/// Like [`load_zone_bindings`] but accepts any `Read` source.
pub fn load_zone_reader<R: Read>(reader: R, graph: &RoadGraph) -> LoadResult<ZoneBindings> {
    let mut bindings = ZoneBindings::new();
    for (id, node) in feature_bindings(reader, graph)? {
        let zone = ZoneId::new(id);
        if bindings.resolve(&zone).is_some() {
            return Err(LoadError::DuplicateZone(zone));
        }
        bindings.insert(zone, node);
    }
    log::info!("bound {} zones to network nodes", bindings.len());
    Ok(bindings)
}

/// Load the binding of one checkpoint from a boundary file.
pub fn load_checkpoint_binding(
    path: &Path,
    graph: &RoadGraph,
    checkpoint: &CheckpointId,
) -> LoadResult<CheckpointBinding> {
    let file = std::fs::File::open(path)?;
    load_checkpoint_reader(file, graph, checkpoint)
}

/// Like [`load_checkpoint_binding`] but accepts any `Read` source.
pub fn load_checkpoint_reader<R: Read>(
    reader: R,
    graph: &RoadGraph,
    checkpoint: &CheckpointId,
) -> LoadResult<CheckpointBinding> {
    for (id, node) in feature_bindings(reader, graph)? {
        if id == checkpoint.as_str() {
            return Ok(CheckpointBinding { id: checkpoint.clone(), node });
        }
    }
    Err(LoadError::CheckpointNotFound(checkpoint.clone()))
}

// ── Internals ─────────────────────────────────────────────────────────────────

/// Parse a boundary file into `(id, nearest node)` pairs, in file order.
fn feature_bindings<R: Read>(reader: R, graph: &RoadGraph) -> LoadResult<Vec<(String, NodeId)>> {
    if graph.is_empty() {
        return Err(LoadError::EmptyNetwork);
    }

    let geojson = GeoJson::from_reader(reader)?;
    let GeoJson::FeatureCollection(collection) = geojson else {
        return Err(LoadError::Parse(
            "boundary file must be a GeoJSON FeatureCollection".into(),
        ));
    };

    let mut bindings = Vec::with_capacity(collection.features.len());
    for feature in &collection.features {
        let id = feature_id(feature).ok_or(LoadError::MissingFeatureId)?;

        let centroid = feature
            .geometry
            .as_ref()
            .and_then(|g| geo::Geometry::<f64>::try_from(g.value.clone()).ok())
            .and_then(|g| g.centroid())
            .ok_or_else(|| LoadError::EmptyGeometry(id.clone()))?;

        // Graph non-emptiness is checked above, so the snap always hits.
        let node = graph
            .nearest_node(PlanePoint::new(centroid.x(), centroid.y()))
            .ok_or(LoadError::EmptyNetwork)?;

        bindings.push((id, node));
    }
    Ok(bindings)
}

fn feature_id(feature: &geojson::Feature) -> Option<String> {
    for key in ["id", "zone_id", "name"] {
        if let Some(value) = feature.properties.as_ref().and_then(|p| p.get(key)) {
            match value {
                JsonValue::String(s) => return Some(s.trim().to_owned()),
                JsonValue::Number(n) => return Some(n.to_string()),
                _ => {}
            }
        }
    }
    match &feature.id {
        Some(geojson::feature::Id::String(s)) => Some(s.clone()),
        Some(geojson::feature::Id::Number(n)) => Some(n.to_string()),
        None => None,
    }
}
