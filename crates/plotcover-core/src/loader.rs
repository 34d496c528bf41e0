// crates/plotcover-core/src/loader.rs

//! # Dataset loader
//!
//! Handles the physical layer: resolving the per-county dataset path and
//! reading candidate building records out of it. Filtering is two-staged —
//! a coarse bounding-box overlap on the bbox stored with each record, then
//! an exact geometric intersection test on the parsed footprint.

use crate::error::{CoverageError, Result};
use crate::geometry::{bbox_overlaps, multi_polygon_from_shape};
use crate::model::{BuildingRecord, DatasetMeta, RetrievedBuildings};
use geo::{BoundingRect, Intersects, Polygon};
use shapefile::Shape;
use std::path::{Path, PathBuf};

/// Upstream source of the per-county footprint shapefiles.
pub const FOOTPRINTS_DATA_URL: &str = "https://github.com/microsoft/USBuildingFootprints";

/// Resolves and reads per-county building footprint datasets.
///
/// Datasets live under one base directory, one shapefile per county:
/// `{base_dir}/{region_id}.shp`. That template is the only storage
/// parameterization there is.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    base_dir: PathBuf,
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self::new(Self::default_data_dir())
    }
}

impl DatasetStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    /// Path of the dataset holding `region_id`'s building footprints.
    pub fn dataset_path(&self, region_id: &str) -> PathBuf {
        self.base_dir.join(format!("{region_id}.shp"))
    }

    /// Retrieves every building record whose footprint intersects `plot`.
    ///
    /// The dataset handle lives strictly inside this call: it is opened,
    /// drained, consumed for its schema metadata, and released on both the
    /// success and error paths. Record order is preserved.
    ///
    /// # Errors
    ///
    /// [`CoverageError::DatasetNotFound`] when `region_id` is empty or does
    /// not resolve to a readable dataset; [`CoverageError::MalformedGeometry`]
    /// when a record's geometry cannot be parsed. Neither is retried.
    pub fn retrieve(&self, plot: &Polygon<f64>, region_id: &str) -> Result<RetrievedBuildings> {
        if region_id.is_empty() {
            return Err(CoverageError::DatasetNotFound(
                "empty region identifier".to_string(),
            ));
        }

        let path = self.dataset_path(region_id);
        let mut reader = open_dataset(&path)?;

        let plot_bbox = plot.bounding_rect().ok_or_else(|| {
            CoverageError::MalformedGeometry("plot has no bounding box".to_string())
        })?;

        let mut records = Vec::new();
        let mut geometries = Vec::new();

        for shape_record in reader.iter_shapes_and_records() {
            let (shape, attributes) = shape_record?;

            let shape = match shape {
                Shape::Polygon(p) => p,
                Shape::NullShape => continue,
                other => {
                    return Err(CoverageError::MalformedGeometry(format!(
                        "expected polygon record, got {}",
                        other.shapetype()
                    )))
                }
            };

            // Coarse filter on the bbox stored with the record.
            if !bbox_overlaps(shape.bbox(), &plot_bbox) {
                continue;
            }

            // Exact filter on the parsed footprint.
            let geometry = multi_polygon_from_shape(&shape)?;
            if geometry.intersects(plot) {
                records.push(BuildingRecord { shape, attributes });
                geometries.push(geometry);
            }
        }

        let meta = DatasetMeta {
            table_info: reader.into_table_info(),
        };

        Ok(RetrievedBuildings {
            records,
            geometries,
            meta,
        })
    }
}

type DatasetReader =
    shapefile::Reader<std::io::BufReader<std::fs::File>, std::io::BufReader<std::fs::File>>;

fn open_dataset(path: &Path) -> Result<DatasetReader> {
    if !path.exists() {
        return Err(CoverageError::DatasetNotFound(format!(
            "no dataset at {}",
            path.display()
        )));
    }

    shapefile::Reader::from_path(path).map_err(|e| {
        CoverageError::DatasetNotFound(format!("cannot open {}: {e}", path.display()))
    })
}
