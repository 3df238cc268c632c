//! Capacity table CSV loader.
//!
//! # CSV format
//!
//! ```csv
//! Checkpoint,Sentido,M,A,B,CU,CAI,CAII,TOTAL,FA,Focup_M,Focup_A,Focup_B,Focup_CU,Focup_CAI,Focup_CAII
//! 2003,4-2,100,50,30,20,10,5,215,1.1,1.2,1.4,1.3,1.0,1.0,1.0
//! 2002,0,400,,30,20,10,5,,1.0,1.2,1.4,1.3,1.0,1.0,1.0
//! ```
//!
//! `Sentido` is `"0"` for an aggregate row or `"a-b"` for a directional
//! one.  Numeric cells parse leniently: blank, non-numeric, and non-finite
//! values all become *missing* — never zero.  The `TOTAL` column is read
//! and discarded; the usable total is always recomputed from the six class
//! columns, and a mismatch with the file's `TOTAL` is not an error.
//!
//! Raw rows sharing a `(Checkpoint, Sentido)` key are aggregated by
//! [`CapacityIndex::from_raw_rows`].

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use aforo_capacity::{CapacityIndex, RawCapacityRow};
use aforo_core::{CheckpointId, SenseCode};

use crate::error::{LoadError, LoadResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CapacityCsvRow {
    #[serde(rename = "Checkpoint")]
    checkpoint: String,
    #[serde(rename = "Sentido")]
    sentido: String,
    #[serde(rename = "M", deserialize_with = "lenient_f64", default)]
    m: Option<f64>,
    #[serde(rename = "A", deserialize_with = "lenient_f64", default)]
    a: Option<f64>,
    #[serde(rename = "B", deserialize_with = "lenient_f64", default)]
    b: Option<f64>,
    #[serde(rename = "CU", deserialize_with = "lenient_f64", default)]
    cu: Option<f64>,
    #[serde(rename = "CAI", deserialize_with = "lenient_f64", default)]
    cai: Option<f64>,
    #[serde(rename = "CAII", deserialize_with = "lenient_f64", default)]
    caii: Option<f64>,
    /// Present in the file, deliberately unused: the total is recomputed.
    #[serde(rename = "TOTAL", deserialize_with = "lenient_f64", default)]
    _total: Option<f64>,
    #[serde(rename = "FA", deserialize_with = "lenient_f64", default)]
    fa: Option<f64>,
    #[serde(rename = "Focup_M", deserialize_with = "lenient_f64", default)]
    focup_m: Option<f64>,
    #[serde(rename = "Focup_A", deserialize_with = "lenient_f64", default)]
    focup_a: Option<f64>,
    #[serde(rename = "Focup_B", deserialize_with = "lenient_f64", default)]
    focup_b: Option<f64>,
    #[serde(rename = "Focup_CU", deserialize_with = "lenient_f64", default)]
    focup_cu: Option<f64>,
    #[serde(rename = "Focup_CAI", deserialize_with = "lenient_f64", default)]
    focup_cai: Option<f64>,
    #[serde(rename = "Focup_CAII", deserialize_with = "lenient_f64", default)]
    focup_caii: Option<f64>,
}

/// Blank, non-numeric, and non-finite cells all parse to missing.
fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite()))
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and aggregate the capacity table.
pub fn load_capacity_csv(path: &Path) -> LoadResult<CapacityIndex> {
    let file = std::fs::File::open(path)?;
    load_capacity_reader(file)
}

/// Like [`load_capacity_csv`] but accepts any `Read` source.
pub fn load_capacity_reader<R: Read>(reader: R) -> LoadResult<CapacityIndex> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut raw_rows = Vec::new();
    for result in csv_reader.deserialize::<CapacityCsvRow>() {
        let row = result?;
        let sense = SenseCode::parse(&row.sentido).ok_or_else(|| LoadError::UnknownSense {
            checkpoint: row.checkpoint.clone(),
            sense: row.sentido.clone(),
        })?;
        raw_rows.push(RawCapacityRow {
            checkpoint: CheckpointId::new(row.checkpoint.trim()),
            sense,
            cap: [row.m, row.a, row.b, row.cu, row.cai, row.caii],
            fa: row.fa,
            focup: [
                row.focup_m,
                row.focup_a,
                row.focup_b,
                row.focup_cu,
                row.focup_cai,
                row.focup_caii,
            ],
        });
    }

    let raw_count = raw_rows.len();
    let index = CapacityIndex::from_raw_rows(raw_rows);
    log::info!(
        "loaded capacity table: {raw_count} raw rows → {} (checkpoint, sense) entries",
        index.len()
    );
    Ok(index)
}
