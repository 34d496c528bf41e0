//! Basic usage example for plotcover-core
//!
//! This example demonstrates how to:
//! - Parse a plot polygon from GeoJSON
//! - Run a coverage query against a county dataset
//! - Handle the error taxonomy

use plotcover_core::{plot_from_geojson, CoverageError, DatasetStore};

fn main() -> plotcover_core::Result<()> {
    println!("=== plotcover-core Basic Usage Example ===\n");

    // A block in downtown San Francisco.
    let plot = plot_from_geojson(
        r#"{
            "type": "Polygon",
            "coordinates": [[
                [-122.40870237350462, 37.78318894806247],
                [-122.39876747131348, 37.78318894806247],
                [-122.39876747131348, 37.78836966314214],
                [-122.40870237350462, 37.78836966314214],
                [-122.40870237350462, 37.78318894806247]
            ]]
        }"#,
    )?;

    // Point this at your local extract of the county shapefiles, e.g.
    // DatasetStore::new("/data/footprints").
    let store = DatasetStore::default();

    match store.query(&plot, "06075") {
        Ok(summary) => {
            println!("Buildings intersecting the plot: {}", summary.n_buildings);
            println!(
                "Total footprint: {:.1} m²",
                summary.total_building_footprint
            );
            println!(
                "Plot coverage: {:.1}%",
                summary.building_proportion * 100.0
            );
        }
        Err(CoverageError::DatasetNotFound(msg)) => {
            eprintln!("✗ Dataset missing: {msg}");
            eprintln!("  Download a county extract and pass its directory to DatasetStore::new.");
        }
        Err(e) => return Err(e),
    }

    Ok(())
}
