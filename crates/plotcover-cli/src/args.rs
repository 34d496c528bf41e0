use clap::{Parser, Subcommand};

/// CLI arguments for plotcover-cli
#[derive(Debug, Parser)]
#[command(
    name = "plotcover",
    version,
    about = "Query building footprint coverage for a land plot"
)]
pub struct CliArgs {
    /// Directory holding the per-county footprint shapefiles
    /// (default: the data directory bundled with plotcover-core)
    #[arg(short = 'd', long = "data-dir", global = true)]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute coverage statistics for a plot
    Query {
        /// Path to a GeoJSON file with the plot polygon (EPSG:4326)
        #[arg(short = 'p', long = "plot")]
        plot: String,

        /// County FIPS code, e.g. 06075
        region: String,
    },

    /// List the buildings intersecting a plot
    Buildings {
        /// Path to a GeoJSON file with the plot polygon (EPSG:4326)
        #[arg(short = 'p', long = "plot")]
        plot: String,

        /// County FIPS code, e.g. 06075
        region: String,

        /// Write the intersecting subset to a new shapefile at this path
        #[arg(short = 'e', long = "export")]
        export: Option<String>,
    },
}
