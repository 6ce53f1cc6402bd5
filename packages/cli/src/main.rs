#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Demo CLI for the farm map engine.
//!
//! Loads a `GeoJSON` dataset (or generates a seeded mock one), applies
//! filter criteria from the command line, and prints the projected
//! visible set as an ASCII map plus the stat cards the web view shows
//! under the map. Stands in for the rendering collaborator during
//! development.

mod render;

use std::str::FromStr;

use clap::Parser;
use farm_map_engine::{FarmStore, MapSession};
use farm_map_farm_models::{HealthStatus, LivestockCategory};
use farm_map_generate::MockConfig;
use farm_map_geography::{BoundingBox, Projector};
use farm_map_ingest::records_from_geojson;

/// Render an interactive-map snapshot of a farm dataset.
#[derive(Debug, Parser)]
#[command(name = "farm-map", version, about)]
struct Args {
    /// GeoJSON FeatureCollection file to load instead of mock data.
    #[arg(long)]
    input: Option<std::path::PathBuf>,

    /// Number of mock records to generate when no input is given.
    #[arg(long, default_value_t = 50)]
    count: usize,

    /// Seed for mock data generation.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Restrict to one livestock category (e.g. "cattle").
    #[arg(long, value_parser = parse_category)]
    category: Option<LivestockCategory>,

    /// Restrict to one health status (e.g. "critical").
    #[arg(long, value_parser = parse_status)]
    status: Option<HealthStatus>,

    /// Inclusive herd-size floor.
    #[arg(long, default_value_t = 0)]
    min_herd_size: i64,

    /// Free-text search over names and ids.
    #[arg(long, default_value = "")]
    search: String,

    /// Select a record by id and print its detail panel.
    #[arg(long)]
    select: Option<String>,

    /// Emit the visible set as a GeoJSON FeatureCollection instead of
    /// the ASCII view.
    #[arg(long)]
    json: bool,
}

fn parse_category(raw: &str) -> Result<LivestockCategory, String> {
    LivestockCategory::from_str(&raw.to_uppercase())
        .map_err(|_| format!("unknown livestock category {raw:?}"))
}

fn parse_status(raw: &str) -> Result<HealthStatus, String> {
    HealthStatus::from_str(&raw.to_uppercase())
        .map_err(|_| format!("unknown health status {raw:?}"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let args = Args::parse();

    let records = match &args.input {
        Some(path) => {
            let document = std::fs::read_to_string(path)?;
            records_from_geojson(&document)?
        }
        None => MockConfig::default().generate(args.count, args.seed)?,
    };
    log::info!("Loaded {} farm records", records.len());

    let mut session = MapSession::new(FarmStore::new(records));
    session.set_category(args.category);
    session.set_health_status(args.status);
    session.set_min_herd_size(args.min_herd_size)?;
    session.set_search_text(args.search.clone());
    if let Some(id) = &args.select {
        session.select(id);
    }

    if args.json {
        let visible: Vec<_> = session.visible().cloned().collect();
        println!("{}", farm_map_ingest::records_to_geojson(&visible)?);
        return Ok(());
    }

    let projector = Projector::new(BoundingBox::demo_region())?;
    print!("{}", render::map_view(&session, &projector));

    if let Some(record) = session.selected_record() {
        print!("{}", render::detail_panel(record));
    }
    if !args.search.is_empty() {
        print!("{}", render::suggestion_list(&session.suggestions()));
    }

    Ok(())
}
