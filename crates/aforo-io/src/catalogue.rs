//! Permitted-sense catalogue loader.
//!
//! Optional CSV with one permitted code per row:
//!
//! ```csv
//! Checkpoint,Sentido
//! 2003,4-2
//! 2003,2-4
//! ```
//!
//! A checkpoint that never appears in the file stays unrestricted.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use aforo_capacity::SenseCatalogue;
use aforo_core::{CheckpointId, SenseCode};

use crate::error::{LoadError, LoadResult};

#[derive(Deserialize)]
struct CatalogueCsvRow {
    #[serde(rename = "Checkpoint")]
    checkpoint: String,
    #[serde(rename = "Sentido")]
    sentido: String,
}

/// Load the catalogue of permitted sense codes.
pub fn load_catalogue_csv(path: &Path) -> LoadResult<SenseCatalogue> {
    let file = std::fs::File::open(path)?;
    load_catalogue_reader(file)
}

/// Like [`load_catalogue_csv`] but accepts any `Read` source.
pub fn load_catalogue_reader<R: Read>(reader: R) -> LoadResult<SenseCatalogue> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut catalogue = SenseCatalogue::empty();
    for result in csv_reader.deserialize::<CatalogueCsvRow>() {
        let row = result?;
        let sense = SenseCode::parse(&row.sentido).ok_or_else(|| LoadError::UnknownSense {
            checkpoint: row.checkpoint.clone(),
            sense: row.sentido.clone(),
        })?;
        catalogue.insert(CheckpointId::new(row.checkpoint.trim()), sense);
    }

    log::info!("loaded sense catalogue for {} checkpoints", catalogue.len());
    Ok(catalogue)
}
