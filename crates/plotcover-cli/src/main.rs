//! plotcover-cli — Command-line interface for plotcover-core
//!
//! This binary answers coverage questions about a land plot from your
//! terminal: how many building footprints intersect it, how many square
//! meters of it they cover, and what fraction of the plot that is.
//!
//! Usage examples
//! --------------
//!
//! - Coverage statistics for a plot in San Francisco county
//!   $ plotcover-cli query --plot plot.geojson 06075
//!
//! - List the intersecting buildings
//!   $ plotcover-cli buildings --plot plot.geojson 06075
//!
//! - Export the intersecting subset for inspection in a GIS tool
//!   $ plotcover-cli buildings --plot plot.geojson 06075 --export subset.shp
//!
//! Data source
//! -----------
//!
//! The CLI expects one shapefile per county, named `{FIPS}.shp`, in the
//! data directory. Use `--data-dir <path>` to point at your local extract
//! of the US building footprints dataset.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use plotcover_core::{export_subset, plot_from_geojson, DatasetStore};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let store = match args.data_dir {
        Some(dir) => DatasetStore::new(dir),
        None => DatasetStore::default(),
    };

    match args.command {
        Commands::Query { plot, region } => {
            let plot = plot_from_geojson(&std::fs::read_to_string(&plot)?)?;
            let summary = store.query(&plot, &region)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }

        Commands::Buildings {
            plot,
            region,
            export,
        } => {
            let plot = plot_from_geojson(&std::fs::read_to_string(&plot)?)?;
            let retrieved = store.retrieve(&plot, &region)?;

            if retrieved.is_empty() {
                println!("No buildings intersect the plot in region {region}");
            } else {
                println!("{} intersecting buildings:", retrieved.len());
                for record in &retrieved.records {
                    let fields: Vec<String> = record
                        .attributes
                        .clone()
                        .into_iter()
                        .map(|(name, value)| format!("{name}={value:?}"))
                        .collect();
                    println!("- {}", fields.join(", "));
                }
            }

            if let Some(out_path) = export {
                let count = retrieved.len();
                export_subset(&out_path, &retrieved.records, retrieved.meta)?;
                println!("Exported {count} records to {out_path}");
            }
        }
    }

    Ok(())
}
