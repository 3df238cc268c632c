//! OD person-trip CSV ingest.
//!
//! # CSV format
//!
//! One row per origin–destination pair.  Headers are matched
//! case-insensitively against alias sets, so both the English and the
//! Spanish survey exports load unchanged:
//!
//! | Column      | Accepted headers                      |
//! |-------------|---------------------------------------|
//! | origin      | `origin_id`, `origen`, `origin`       |
//! | destination | `destination_id`, `destino`, `destination` |
//! | trips       | `total_trips`, `viajes`, `trips`      |
//!
//! Any direction-looking column (`sense`, `sentido`, `sense_code`,
//! `direction`, `direccion`) is dropped at ingest: the direction of a trip
//! comes from the constrained path's geometry, never from the input.
//!
//! # Trip-count coercion
//!
//! | `total_trips` value    | `trips_person` |
//! |------------------------|----------------|
//! | literal `<10`          | 1              |
//! | empty / missing        | 1              |
//! | numeric < 10           | 1              |
//! | numeric ≥ 10           | rounded to integer |
//!
//! The censoring literal and the sub-10 coercion share one rationale: the
//! survey suppresses small counts, so anything below the publication
//! threshold stands for "at least one person".

use std::io::Read;
use std::path::Path;

use aforo_core::{CheckpointId, ZoneId};
use aforo_pipeline::OdRow;

use crate::error::{LoadError, LoadResult};

// ── Header aliases ────────────────────────────────────────────────────────────

const ORIGIN_ALIASES: &[&str] = &["origin_id", "origen", "origin"];
const DESTINATION_ALIASES: &[&str] = &["destination_id", "destino", "destination"];
const TRIPS_ALIASES: &[&str] = &["total_trips", "viajes", "trips"];

/// Columns that are dropped at ingest even when present.
const DROPPED_COLUMNS: &[&str] = &["sense", "sentido", "sense_code", "direction", "direccion"];

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the OD rows of one checkpoint file.
pub fn load_od_csv(path: &Path) -> LoadResult<Vec<OdRow>> {
    let file = std::fs::File::open(path)?;
    load_od_reader(file)
}

/// Like [`load_od_csv`] but accepts any `Read` source.
pub fn load_od_reader<R: Read>(reader: R) -> LoadResult<Vec<OdRow>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let origin_col = find_column(&headers, ORIGIN_ALIASES)?;
    let destination_col = find_column(&headers, DESTINATION_ALIASES)?;
    let trips_col = find_column(&headers, TRIPS_ALIASES)?;

    let dropped: Vec<&str> = headers
        .iter()
        .filter(|h| DROPPED_COLUMNS.contains(&normalise(h).as_str()))
        .collect();
    if !dropped.is_empty() {
        log::info!("dropping direction column(s) from OD input: {dropped:?}");
    }

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let origin = ZoneId::new(record.get(origin_col).unwrap_or("").trim());
        let destination = ZoneId::new(record.get(destination_col).unwrap_or("").trim());
        let trips = parse_trips(record.get(trips_col).unwrap_or(""))?;
        rows.push(OdRow::new(origin, destination, trips));
    }

    log::info!("loaded {} OD rows", rows.len());
    Ok(rows)
}

/// Lift the checkpoint id out of an OD input filename.
///
/// Strips `prefix` from the file stem case-insensitively (when present) and
/// returns the first contiguous digit run of the remainder:
/// `checkpoint2003.csv` → `2003`, `2003.csv` → `2003`.
pub fn checkpoint_id_from_path(path: &Path, prefix: &str) -> Option<CheckpointId> {
    let stem = path.file_stem()?.to_str()?;
    let rest = if stem.len() >= prefix.len() && stem[..prefix.len()].eq_ignore_ascii_case(prefix) {
        &stem[prefix.len()..]
    } else {
        stem
    };

    let digits: String = rest
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();

    (!digits.is_empty()).then(|| CheckpointId::new(digits))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn normalise(header: &str) -> String {
    header.trim().to_ascii_lowercase()
}

fn find_column(headers: &csv::StringRecord, aliases: &'static [&'static str]) -> LoadResult<usize> {
    headers
        .iter()
        .position(|h| aliases.contains(&normalise(h).as_str()))
        .ok_or(LoadError::MissingColumn(aliases))
}

fn parse_trips(raw: &str) -> LoadResult<u32> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "<10" {
        return Ok(1);
    }
    let value: f64 = raw
        .parse()
        .map_err(|_| LoadError::Parse(format!("invalid trip count {raw:?}")))?;
    if !value.is_finite() || value < 10.0 {
        return Ok(1);
    }
    Ok(value.round() as u32)
}
