//! Unit tests for aforo-io.
//!
//! Loader tests feed `io::Cursor` strings; only the path-based writer test
//! touches the filesystem (via `tempfile`).

use std::io::Cursor;

// ── OD ingest ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod od {
    use super::*;
    use std::path::Path;

    use aforo_core::ZoneId;

    use crate::od::{checkpoint_id_from_path, load_od_reader};
    use crate::LoadError;

    #[test]
    fn english_headers() {
        let csv = "origin_id,destination_id,total_trips\n1002,1001,250\n";
        let rows = load_od_reader(Cursor::new(csv)).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].origin, ZoneId::new("1002"));
        assert_eq!(rows[0].destination, ZoneId::new("1001"));
        assert_eq!(rows[0].trips_person, 250);
        assert!(!rows[0].intrazonal);
    }

    #[test]
    fn spanish_headers_and_dropped_direction_column() {
        // The Sentido column is present and must be ignored: the value "1-3"
        // never reaches the rows.
        let csv = "Origen,Destino,Sentido,Viajes\n1002,1001,1-3,250\n1001,1001,4-2,30\n";
        let rows = load_od_reader(Cursor::new(csv)).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].trips_person, 250);
        assert!(rows[1].intrazonal);
    }

    #[test]
    fn trip_count_coercion() {
        let csv = "origin_id,destination_id,total_trips\n\
                   1,2,<10\n\
                   1,3,9\n\
                   1,4,10\n\
                   1,5,\n\
                   1,6,249.6\n";
        let rows = load_od_reader(Cursor::new(csv)).unwrap();
        let trips: Vec<u32> = rows.iter().map(|r| r.trips_person).collect();
        assert_eq!(trips, vec![1, 1, 10, 1, 250]);
    }

    #[test]
    fn garbage_trip_count_is_an_error() {
        let csv = "origin_id,destination_id,total_trips\n1,2,many\n";
        assert!(matches!(
            load_od_reader(Cursor::new(csv)),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn missing_required_column() {
        let csv = "origin_id,total_trips\n1,5\n";
        assert!(matches!(
            load_od_reader(Cursor::new(csv)),
            Err(LoadError::MissingColumn(_))
        ));
    }

    #[test]
    fn checkpoint_id_from_filename() {
        let id = |p: &str| checkpoint_id_from_path(Path::new(p), "checkpoint");
        assert_eq!(id("data/checkpoint2003.csv").unwrap().as_str(), "2003");
        assert_eq!(id("Checkpoint2003.csv").unwrap().as_str(), "2003");
        assert_eq!(id("2002.csv").unwrap().as_str(), "2002");
        assert_eq!(id("survey_2101_final.csv").unwrap().as_str(), "2101");
        assert!(id("notes.csv").is_none());
    }
}

// ── Capacity table ────────────────────────────────────────────────────────────

#[cfg(test)]
mod capacity {
    use super::*;

    use aforo_capacity::CheckpointClass;
    use aforo_core::{CheckpointId, SenseCode, VehicleClass};

    use crate::capacity::load_capacity_reader;
    use crate::LoadError;

    const HEADER: &str = "Checkpoint,Sentido,M,A,B,CU,CAI,CAII,TOTAL,FA,\
                          Focup_M,Focup_A,Focup_B,Focup_CU,Focup_CAI,Focup_CAII";

    fn cp(id: &str) -> CheckpointId {
        CheckpointId::new(id)
    }

    #[test]
    fn reference_row_loads_and_total_is_recomputed() {
        // The file's TOTAL (999) disagrees with Σ cap = 215 — not an error,
        // and the recomputed total wins.
        let csv = format!("{HEADER}\n2003,4-2,100,50,30,20,10,5,999,1.1,1.2,1.4,1.3,1.0,1.0,1.0\n");
        let index = load_capacity_reader(Cursor::new(csv)).unwrap();
        let rec = index
            .lookup(&cp("2003"), SenseCode::parse("4-2").unwrap())
            .unwrap();
        assert_eq!(rec.cap_total(), Some(215.0));
        assert_eq!(rec.fa, Some(1.1));
    }

    #[test]
    fn blank_and_non_numeric_cells_are_missing() {
        let csv = format!("{HEADER}\n2003,4-2,100,,N/A,20,10,5,,1.1,1.2,1.4,1.3,1.0,1.0,1.0\n");
        let index = load_capacity_reader(Cursor::new(csv)).unwrap();
        let rec = index
            .lookup(&cp("2003"), SenseCode::parse("4-2").unwrap())
            .unwrap();
        assert_eq!(rec.cap(VehicleClass::A), None);
        assert_eq!(rec.cap(VehicleClass::B), None);
        assert_eq!(rec.cap_total(), None); // a hole anywhere kills the total
    }

    #[test]
    fn duplicate_keys_aggregate() {
        let csv = format!(
            "{HEADER}\n\
             2003,4-2,100,50,30,20,10,5,215,1.0,1.2,1.4,1.3,1.0,1.0,1.0\n\
             2003,4-2,100,50,30,20,10,5,215,1.2,1.2,1.4,1.3,1.0,1.0,1.0\n"
        );
        let index = load_capacity_reader(Cursor::new(csv)).unwrap();
        assert_eq!(index.len(), 1);
        let rec = index
            .lookup(&cp("2003"), SenseCode::parse("4-2").unwrap())
            .unwrap();
        assert_eq!(rec.cap(VehicleClass::M), Some(200.0));
        assert!((rec.fa.unwrap() - 1.1).abs() < 1e-12);
    }

    #[test]
    fn aggregate_and_directional_rows_classify() {
        let csv = format!(
            "{HEADER}\n\
             2002,0,400,50,30,20,10,5,,1.0,1.2,1.4,1.3,1.0,1.0,1.0\n\
             2003,4-2,100,50,30,20,10,5,,1.1,1.2,1.4,1.3,1.0,1.0,1.0\n"
        );
        let index = load_capacity_reader(Cursor::new(csv)).unwrap();
        assert_eq!(index.classify(&cp("2002")), CheckpointClass::Aggregate);
        assert_eq!(index.classify(&cp("2003")), CheckpointClass::Directional);
    }

    #[test]
    fn unknown_sense_rejected() {
        let csv = format!("{HEADER}\n2003,9-9,100,50,30,20,10,5,,1.1,1.2,1.4,1.3,1.0,1.0,1.0\n");
        assert!(matches!(
            load_capacity_reader(Cursor::new(csv)),
            Err(LoadError::UnknownSense { .. })
        ));
    }
}

// ── Catalogue ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod catalogue {
    use super::*;

    use aforo_core::{CheckpointId, SenseCode};

    use crate::catalogue::load_catalogue_reader;

    #[test]
    fn listed_codes_permit_others_reject() {
        let csv = "Checkpoint,Sentido\n2003,4-2\n2003,2-4\n";
        let cat = load_catalogue_reader(Cursor::new(csv)).unwrap();
        let cp = CheckpointId::new("2003");
        assert!(cat.permits(&cp, SenseCode::parse("4-2").unwrap()));
        assert!(!cat.permits(&cp, SenseCode::parse("1-3").unwrap()));
        // Unlisted checkpoint stays unrestricted.
        assert!(cat.permits(&CheckpointId::new("2002"), SenseCode::parse("1-3").unwrap()));
    }
}

// ── Network ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod network {
    use super::*;

    use aforo_core::PlanePoint;

    use crate::network::load_network_reader;
    use crate::LoadError;

    #[test]
    fn linestring_becomes_bidirectional_chain() {
        let gj = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{},
             "geometry":{"type":"LineString","coordinates":
               [[500000,4649000],[500100,4649000],[500200,4649000]]}}]}"#;
        let graph = load_network_reader(Cursor::new(gj)).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.link_count(), 4); // 2 segments × 2 directions
    }

    #[test]
    fn shared_vertices_deduplicate() {
        // Two lines meeting at (500100, 4649000) share that node.
        let gj = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{},
             "geometry":{"type":"LineString","coordinates":
               [[500000,4649000],[500100,4649000]]}},
            {"type":"Feature","properties":{},
             "geometry":{"type":"LineString","coordinates":
               [[500100,4649000],[500100,4649100]]}}]}"#;
        let graph = load_network_reader(Cursor::new(gj)).unwrap();
        assert_eq!(graph.node_count(), 3);
        let shared = graph.nearest_node(PlanePoint::new(500_100.0, 4_649_000.0)).unwrap();
        assert_eq!(graph.out_degree(shared), 2);
    }

    #[test]
    fn oneway_property_drops_return_edges() {
        let gj = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{"oneway":"yes"},
             "geometry":{"type":"LineString","coordinates":
               [[500000,4649000],[500100,4649000]]}}]}"#;
        let graph = load_network_reader(Cursor::new(gj)).unwrap();
        assert_eq!(graph.link_count(), 1);
    }

    #[test]
    fn geographic_coordinates_rejected() {
        let gj = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{},
             "geometry":{"type":"LineString","coordinates":
               [[-88.04,30.69],[-88.03,30.70]]}}]}"#;
        assert!(matches!(
            load_network_reader(Cursor::new(gj)),
            Err(LoadError::GeographicCoords)
        ));
    }

    #[test]
    fn repeated_vertices_skipped() {
        let gj = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{},
             "geometry":{"type":"LineString","coordinates":
               [[500000,4649000],[500000,4649000],[500100,4649000]]}}]}"#;
        let graph = load_network_reader(Cursor::new(gj)).unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.link_count(), 2);
    }
}

// ── Boundaries ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod zones {
    use super::*;

    use aforo_core::{CheckpointId, PlanePoint, ZoneId};
    use aforo_spatial::RoadGraphBuilder;

    use crate::zones::{load_checkpoint_reader, load_zone_reader};
    use crate::LoadError;

    fn three_node_graph() -> (aforo_spatial::RoadGraph, [aforo_core::NodeId; 3]) {
        let mut b = RoadGraphBuilder::new();
        let n0 = b.push_node(PlanePoint::new(500_000.0, 4_649_000.0));
        let n1 = b.push_node(PlanePoint::new(500_100.0, 4_649_000.0));
        let n2 = b.push_node(PlanePoint::new(500_200.0, 4_649_000.0));
        b.link_two_way(n0, n1, 100.0);
        b.link_two_way(n1, n2, 100.0);
        (b.finish(), [n0, n1, n2])
    }

    const ZONES: &str = r#"{"type":"FeatureCollection","features":[
        {"type":"Feature","properties":{"id":"1001"},
         "geometry":{"type":"Polygon","coordinates":
           [[[500090,4648990],[500110,4648990],[500110,4649010],[500090,4649010],[500090,4648990]]]}},
        {"type":"Feature","properties":{"id":1002},
         "geometry":{"type":"Polygon","coordinates":
           [[[500190,4648990],[500210,4648990],[500210,4649010],[500190,4649010],[500190,4648990]]]}}]}"#;

    #[test]
    fn centroids_snap_to_nearest_nodes() {
        let (graph, [_, n1, n2]) = three_node_graph();
        let bindings = load_zone_reader(Cursor::new(ZONES), &graph).unwrap();
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings.resolve(&ZoneId::new("1001")), Some(n1));
        // Numeric property ids stringify.
        assert_eq!(bindings.resolve(&ZoneId::new("1002")), Some(n2));
    }

    #[test]
    fn duplicate_zone_id_rejected() {
        let (graph, _) = three_node_graph();
        let gj = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{"id":"1001"},
             "geometry":{"type":"Polygon","coordinates":
               [[[500090,4648990],[500110,4648990],[500110,4649010],[500090,4649010],[500090,4648990]]]}},
            {"type":"Feature","properties":{"id":"1001"},
             "geometry":{"type":"Polygon","coordinates":
               [[[500190,4648990],[500210,4648990],[500210,4649010],[500190,4649010],[500190,4648990]]]}}]}"#;
        assert!(matches!(
            load_zone_reader(Cursor::new(gj), &graph),
            Err(LoadError::DuplicateZone(_))
        ));
    }

    #[test]
    fn checkpoint_binding_selected_by_id() {
        let (graph, [_, n1, _]) = three_node_graph();
        let binding =
            load_checkpoint_reader(Cursor::new(ZONES), &graph, &CheckpointId::new("1001")).unwrap();
        assert_eq!(binding.node, n1);
    }

    #[test]
    fn missing_checkpoint_is_an_error() {
        let (graph, _) = three_node_graph();
        assert!(matches!(
            load_checkpoint_reader(Cursor::new(ZONES), &graph, &CheckpointId::new("9999")),
            Err(LoadError::CheckpointNotFound(_))
        ));
    }

    #[test]
    fn empty_graph_is_an_error() {
        let graph = RoadGraphBuilder::new().finish();
        assert!(matches!(
            load_zone_reader(Cursor::new(ZONES), &graph),
            Err(LoadError::EmptyNetwork)
        ));
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod output {
    use aforo_core::ZoneId;
    use aforo_pipeline::OdRow;

    use crate::output::{write_vehicle_csv, write_vehicle_table};

    #[test]
    fn schema_and_order_are_exact() {
        let rows = vec![
            OdRow::new(ZoneId::new("1002"), ZoneId::new("1001"), 250),
            OdRow::new(ZoneId::new("1001"), ZoneId::new("1003"), 10),
        ];

        let mut buf = Vec::new();
        write_vehicle_table(&mut buf, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "Origen,Destino,veh_M,veh_A,veh_B,veh_CU,veh_CAI,veh_CAII,veh_total"
        );
        assert!(lines[1].starts_with("1002,1001,"));
        assert!(lines[2].starts_with("1001,1003,"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn unprocessed_rows_print_zeroes() {
        let rows = vec![OdRow::new(ZoneId::new("1002"), ZoneId::new("1001"), 250)];
        let mut buf = Vec::new();
        write_vehicle_table(&mut buf, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().nth(1).unwrap(), "1002,1001,0,0,0,0,0,0,0");
    }

    #[test]
    fn path_variant_writes_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("veh_2003.csv");
        let rows = vec![OdRow::new(ZoneId::new("1002"), ZoneId::new("1001"), 250)];
        write_vehicle_csv(&path, &rows).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Origen,Destino,"));
    }
}
