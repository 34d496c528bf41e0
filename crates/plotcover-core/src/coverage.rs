// crates/plotcover-core/src/coverage.rs

//! # Coverage aggregation
//!
//! Folds a set of intersecting building footprints into a
//! [`FeatureSummary`]: total intersected area, plot coverage proportion,
//! and building count. All area arithmetic happens in the equal-area
//! projection (see [`crate::projection`]).

use crate::error::{CoverageError, Result};
use crate::loader::DatasetStore;
use crate::model::FeatureSummary;
use crate::projection::to_equal_area;
use geo::{Area, BooleanOps, MultiPolygon, Polygon};

/// Aggregates coverage statistics for `plot` over `geometries`.
///
/// Every geometry is assumed to already intersect the plot — that is the
/// retrieval stage's invariant and it is not re-verified here. Each
/// footprint is clipped to the plot before its area is counted, so a
/// building extending past the plot boundary contributes only the
/// overlapping region.
///
/// # Errors
///
/// [`CoverageError::Reprojection`] when the coordinate transform cannot be
/// applied; [`CoverageError::DegeneratePlot`] when the plot has
/// zero projected area (the proportion would be a division by zero).
pub fn aggregate(plot: &Polygon<f64>, geometries: &[MultiPolygon<f64>]) -> Result<FeatureSummary> {
    let plot_projected = MultiPolygon(vec![to_equal_area(plot)?]);

    let plot_area = plot_projected.unsigned_area();
    if plot_area == 0.0 {
        return Err(CoverageError::DegeneratePlot);
    }

    // Lazy projection, consumed exactly once by the fold below.
    let projected = geometries.iter().map(to_equal_area::<MultiPolygon<f64>>);

    let mut total_building_footprint = 0.0;
    for building in projected {
        total_building_footprint += plot_projected
            .intersection(&building?)
            .unsigned_area();
    }

    Ok(FeatureSummary {
        total_building_footprint,
        building_proportion: total_building_footprint / plot_area,
        n_buildings: geometries.len(),
    })
}

impl DatasetStore {
    /// Retrieves `region_id`'s buildings intersecting `plot` and aggregates
    /// them into a [`FeatureSummary`]. Dataset metadata is discarded.
    pub fn query(&self, plot: &Polygon<f64>, region_id: &str) -> Result<FeatureSummary> {
        let retrieved = self.retrieve(plot, region_id)?;
        aggregate(plot, &retrieved.geometries)
    }
}

/// [`DatasetStore::query`] against the default data directory.
pub fn query(plot: &Polygon<f64>, region_id: &str) -> Result<FeatureSummary> {
    DatasetStore::default().query(plot, region_id)
}
