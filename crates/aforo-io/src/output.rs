//! Vehicle table CSV writer.
//!
//! The output schema is fixed — exactly these nine columns, nothing else:
//!
//! ```csv
//! Origen,Destino,veh_M,veh_A,veh_B,veh_CU,veh_CAI,veh_CAII,veh_total
//! ```
//!
//! Row order is input order.  Rows the pipeline rejected keep their place
//! with all-zero vehicle fields; rows with a propagated `NaN` print `NaN`.

use std::io::Write;
use std::path::Path;

use aforo_pipeline::OdRow;

use crate::error::LoadResult;

const HEADER: [&str; 9] = [
    "Origen",
    "Destino",
    "veh_M",
    "veh_A",
    "veh_B",
    "veh_CU",
    "veh_CAI",
    "veh_CAII",
    "veh_total",
];

/// Write the vehicle table for one checkpoint to `path`.
pub fn write_vehicle_csv(path: &Path, rows: &[OdRow]) -> LoadResult<()> {
    let file = std::fs::File::create(path)?;
    write_vehicle_table(file, rows)
}

/// Like [`write_vehicle_csv`] but accepts any `Write` sink.
pub fn write_vehicle_table<W: Write>(writer: W, rows: &[OdRow]) -> LoadResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;

    for row in rows {
        let v = &row.vehicles;
        csv_writer.write_record(&[
            row.origin.to_string(),
            row.destination.to_string(),
            v.by_class[0].to_string(),
            v.by_class[1].to_string(),
            v.by_class[2].to_string(),
            v.by_class[3].to_string(),
            v.by_class[4].to_string(),
            v.by_class[5].to_string(),
            v.total.to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
