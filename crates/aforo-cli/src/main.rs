//! `aforo` — turn OD person-trip tables observed at traffic checkpoints
//! into vehicle-trip tables.
//!
//! One invocation processes any number of OD CSV files against a shared
//! road network, zone boundaries, and capacity table.  Each input file
//! belongs to one checkpoint (identified by its filename) and yields one
//! output file with the same rows in the same order.
//!
//! Exit codes: 0 on success; 1 when any construction input is missing or
//! unreadable.  Conditions confined to single OD rows (unknown zone, no
//! path, missing capacity direction) never fail the run — they surface as
//! all-zero vehicle rows.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use aforo_capacity::{CapacityIndex, SenseCatalogue};
use aforo_io::{
    checkpoint_id_from_path, load_capacity_csv, load_catalogue_csv, load_checkpoint_binding,
    load_network_geojson, load_od_csv, load_zone_bindings, write_vehicle_csv, LoadError,
};
use aforo_pipeline::Pipeline;

// ── Arguments ─────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "aforo", version, about = "OD person trips → vehicle trips, per checkpoint")]
struct Args {
    /// Road network (GeoJSON, projected metric CRS).
    #[arg(long, required_unless_present = "general")]
    network: Option<PathBuf>,

    /// Zone boundaries (GeoJSON polygons with an id property).
    #[arg(long, required_unless_present = "general")]
    zones: Option<PathBuf>,

    /// Checkpoint boundaries (GeoJSON polygons with an id property).
    #[arg(long, required_unless_present = "general")]
    checkpoints: Option<PathBuf>,

    /// Capacity table (CSV).
    #[arg(long, required_unless_present = "general")]
    capacity: Option<PathBuf>,

    /// Optional catalogue of permitted sense codes (CSV).
    #[arg(long)]
    catalogue: Option<PathBuf>,

    /// Output directory for the vehicle tables.
    #[arg(long, default_value = "out")]
    out_dir: PathBuf,

    /// Filename prefix stripped when lifting the checkpoint id
    /// (e.g. `checkpoint2003.csv` → `2003`).
    #[arg(long, default_value = "checkpoint")]
    prefix: String,

    /// General-type query: no checkpoint, no routing; every vehicle column
    /// is written as zero.
    #[arg(long)]
    general: bool,

    /// OD input CSV files, one per checkpoint.
    #[arg(required = true)]
    od: Vec<PathBuf>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("aforo: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), LoadError> {
    std::fs::create_dir_all(&args.out_dir)?;

    if args.general {
        return run_general(args);
    }

    // ── Construction: everything here is fatal on failure ─────────────────
    //
    // clap already enforces presence of these unless --general; the binding
    // below keeps run() total without unwrapping.
    let (Some(network_path), Some(zones_path), Some(checkpoints_path), Some(capacity_path)) = (
        args.network.as_ref(),
        args.zones.as_ref(),
        args.checkpoints.as_ref(),
        args.capacity.as_ref(),
    ) else {
        return Err(LoadError::Parse(
            "--network, --zones, --checkpoints and --capacity are required unless --general".into(),
        ));
    };

    let graph = load_network_geojson(network_path)?;
    let zones = load_zone_bindings(zones_path, &graph)?;
    let capacity: CapacityIndex = load_capacity_csv(capacity_path)?;
    let catalogue = match &args.catalogue {
        Some(path) => load_catalogue_csv(path)?,
        None => SenseCatalogue::empty(),
    };

    // ── Per-file processing ───────────────────────────────────────────────
    for od_path in &args.od {
        let checkpoint_id = checkpoint_id_from_path(od_path, &args.prefix).ok_or_else(|| {
            LoadError::Parse(format!(
                "cannot lift a checkpoint id from {}",
                od_path.display()
            ))
        })?;
        let binding = load_checkpoint_binding(checkpoints_path, &graph, &checkpoint_id)?;

        let mut rows = load_od_csv(od_path)?;
        let pipeline = Pipeline::new(&graph, &zones, binding, &capacity, &catalogue);
        pipeline.process(&mut rows);

        let out_path = output_path(args, od_path);
        write_vehicle_csv(&out_path, &rows)?;
        log::info!(
            "checkpoint {checkpoint_id}: {} rows → {}",
            rows.len(),
            out_path.display()
        );
    }

    Ok(())
}

/// General-type queries skip routing and capacity entirely.
fn run_general(args: &Args) -> Result<(), LoadError> {
    for od_path in &args.od {
        let mut rows = load_od_csv(od_path)?;
        Pipeline::process_general(&mut rows);
        let out_path = output_path(args, od_path);
        write_vehicle_csv(&out_path, &rows)?;
        log::info!("general query: {} rows → {}", rows.len(), out_path.display());
    }
    Ok(())
}

fn output_path(args: &Args, od_path: &Path) -> PathBuf {
    let stem = od_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("table");
    args.out_dir.join(format!("{stem}_veh.csv"))
}
