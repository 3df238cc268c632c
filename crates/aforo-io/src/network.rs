//! GeoJSON road network loader.
//!
//! Accepts a `FeatureCollection` whose features carry `LineString` (or
//! `MultiLineString`) geometries in an already projected metric CRS.
//! Every vertex becomes a graph node (deduplicated by exact coordinate),
//! every segment a pair of directed links — or a single link when the
//! feature carries a truthy `oneway` property.
//!
//! # CRS guard
//!
//! Geographic (lon/lat) input would make every edge a few "metres" long
//! and silently wreck lengths and bearings.  If every loaded coordinate
//! fits inside lon/lat ranges the loader refuses with
//! [`LoadError::GeographicCoords`]; reproject first.

use std::io::Read;
use std::path::Path;

use geojson::{GeoJson, Value};
use rustc_hash::FxHashMap;

use aforo_core::{NodeId, PlanePoint};
use aforo_spatial::{RoadGraph, RoadGraphBuilder};

use crate::error::{LoadError, LoadResult};

/// Load a road network from a GeoJSON file.
pub fn load_network_geojson(path: &Path) -> LoadResult<RoadGraph> {
    let file = std::fs::File::open(path)?;
    load_network_reader(file)
}

/// Like [`load_network_geojson`] but accepts any `Read` source.
pub fn load_network_reader<R: Read>(reader: R) -> LoadResult<RoadGraph> {
    let geojson = GeoJson::from_reader(reader)?;
    let GeoJson::FeatureCollection(collection) = geojson else {
        return Err(LoadError::Parse(
            "network file must be a GeoJSON FeatureCollection".into(),
        ));
    };

    let mut builder = RoadGraphBuilder::new();
    // Vertex dedup: exact coordinate bits → NodeId.
    let mut node_ids: FxHashMap<(u64, u64), NodeId> = FxHashMap::default();

    for feature in &collection.features {
        let Some(geometry) = &feature.geometry else {
            continue;
        };
        let oneway = is_oneway(feature);
        match &geometry.value {
            Value::LineString(line) => {
                add_line(&mut builder, &mut node_ids, line, oneway);
            }
            Value::MultiLineString(lines) => {
                for line in lines {
                    add_line(&mut builder, &mut node_ids, line, oneway);
                }
            }
            _ => {} // points, polygons etc. carry no roads
        }
    }

    if looks_geographic(&builder) {
        return Err(LoadError::GeographicCoords);
    }

    log::info!(
        "loaded network: {} nodes, {} directed links",
        builder.node_count(),
        builder.link_count()
    );
    Ok(builder.finish())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn add_line(
    builder: &mut RoadGraphBuilder,
    node_ids: &mut FxHashMap<(u64, u64), NodeId>,
    line: &[Vec<f64>],
    oneway: bool,
) {
    for pair in line.windows(2) {
        let (Some(a), Some(b)) = (position(&pair[0]), position(&pair[1])) else {
            continue;
        };
        let length_m = a.distance_m(b);
        if length_m <= 0.0 {
            continue; // repeated vertex
        }
        let from = intern(builder, node_ids, a);
        let to = intern(builder, node_ids, b);
        if oneway {
            builder.link_one_way(from, to, length_m);
        } else {
            builder.link_two_way(from, to, length_m);
        }
    }
}

fn position(coords: &[f64]) -> Option<PlanePoint> {
    match *coords {
        [x, y, ..] if x.is_finite() && y.is_finite() => Some(PlanePoint::new(x, y)),
        _ => None,
    }
}

fn intern(
    builder: &mut RoadGraphBuilder,
    node_ids: &mut FxHashMap<(u64, u64), NodeId>,
    pos: PlanePoint,
) -> NodeId {
    *node_ids
        .entry((pos.x.to_bits(), pos.y.to_bits()))
        .or_insert_with(|| builder.push_node(pos))
}

fn is_oneway(feature: &geojson::Feature) -> bool {
    let Some(value) = feature.properties.as_ref().and_then(|p| p.get("oneway")) else {
        return false;
    };
    match value {
        geojson::JsonValue::Bool(b) => *b,
        geojson::JsonValue::Number(n) => n.as_f64() == Some(1.0),
        geojson::JsonValue::String(s) => {
            matches!(s.trim().to_ascii_lowercase().as_str(), "yes" | "true" | "1")
        }
        _ => false,
    }
}

fn looks_geographic(builder: &RoadGraphBuilder) -> bool {
    let positions = builder.positions();
    !positions.is_empty()
        && positions
            .iter()
            .all(|pos| pos.x.abs() <= 180.0 && pos.y.abs() <= 90.0)
}
