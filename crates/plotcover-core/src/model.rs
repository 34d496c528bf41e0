// crates/plotcover-core/src/model.rs

use geo::MultiPolygon;
use serde::{Deserialize, Serialize};
use shapefile::dbase;
use std::fmt;

/// A building footprint as stored in the regional dataset.
///
/// The raw shape and its attribute record are kept untouched so that a
/// filtered subset can be re-exported with the original schema (see
/// [`crate::export`]). The parsed [`geo`] geometry lives in
/// [`RetrievedBuildings::geometries`], in parallel, to avoid re-parsing.
#[derive(Debug)]
pub struct BuildingRecord {
    /// The footprint exactly as read from the shapefile.
    pub shape: shapefile::Polygon,
    /// Attribute mapping from the companion dBase table.
    pub attributes: dbase::Record,
}

/// Structural metadata of the source dataset.
///
/// Passed through unchanged; only needed when re-exporting a subset of the
/// records while preserving the original field schema.
pub struct DatasetMeta {
    pub table_info: dbase::TableInfo,
}

/// Result of candidate retrieval for one plot.
///
/// `records` and `geometries` run in parallel: `geometries[i]` is the parsed
/// form of `records[i].shape`. Every entry intersects the queried plot; the
/// aggregation stage relies on that and does not re-verify it.
pub struct RetrievedBuildings {
    pub records: Vec<BuildingRecord>,
    pub geometries: Vec<MultiPolygon<f64>>,
    pub meta: DatasetMeta,
}

// Manual impl: `dbase::TableInfo` in `meta` is not `Debug`.
impl fmt::Debug for RetrievedBuildings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetrievedBuildings")
            .field("records", &self.records)
            .field("geometries", &self.geometries)
            .finish_non_exhaustive()
    }
}

impl RetrievedBuildings {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Coverage statistics for one plot.
///
/// Serialized field names are part of the public output contract.
///
/// `building_proportion` is the summed footprint area divided by the plot
/// area, both measured in the equal-area projection. Each footprint is
/// clipped to the plot before its area is summed, but footprints are not
/// unioned against each other, so buildings overlapping one another can push
/// the proportion above 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureSummary {
    /// Total intersected footprint area in square meters.
    pub total_building_footprint: f64,
    /// Fraction of the plot covered by footprints.
    pub building_proportion: f64,
    /// Number of intersecting buildings.
    pub n_buildings: usize,
}
