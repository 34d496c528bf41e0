// crates/plotcover-core/src/lib.rs

//! # plotcover-core
//!
//! Answers one narrow geospatial question: given a land plot polygon and a
//! county identifier, which building footprints intersect the plot and how
//! much of the plot do they cover?
//!
//! The pipeline is two stages composed in sequence:
//!
//! 1. **Candidate retrieval** ([`loader`]) — open the county's shapefile,
//!    keep records whose stored bounding box overlaps the plot's (coarse
//!    filter), then keep those whose parsed footprint actually intersects
//!    the plot (exact filter).
//! 2. **Coverage aggregation** ([`coverage`]) — reproject plot and
//!    footprints into an equal-area CRS, sum the pairwise plot∩footprint
//!    areas, and divide by the plot's projected area.
//!
//! ```no_run
//! use plotcover_core::{plot_from_geojson, DatasetStore};
//!
//! # fn main() -> plotcover_core::Result<()> {
//! let plot = plot_from_geojson(r#"{"type": "Polygon", "coordinates": [[
//!     [-122.4087, 37.7831], [-122.3987, 37.7831], [-122.3987, 37.7883],
//!     [-122.4087, 37.7883], [-122.4087, 37.7831]]]}"#)?;
//!
//! let summary = DatasetStore::default().query(&plot, "06075")?;
//! println!("{} buildings, {:.1}% covered",
//!     summary.n_buildings, summary.building_proportion * 100.0);
//! # Ok(())
//! # }
//! ```
//!
//! Inputs and outputs are EPSG:4326; projected coordinates never leave the
//! crate. Everything is synchronous and per-invocation — no caching across
//! calls apart from the fixed projection pair.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod coverage;
pub mod error;
pub mod export;
pub mod geometry;
pub mod loader;
pub mod model;
pub mod projection;

// Re-exports
pub use crate::coverage::{aggregate, query};
pub use crate::error::{CoverageError, Result};
pub use crate::export::export_subset;
pub use crate::geometry::plot_from_geojson;
pub use crate::loader::{DatasetStore, FOOTPRINTS_DATA_URL};
pub use crate::model::{BuildingRecord, DatasetMeta, FeatureSummary, RetrievedBuildings};
