// crates/plotcover-core/src/export.rs

//! Schema-preserving re-export of a filtered record subset.
//!
//! Debugging aid only — the core query never writes anything. The exported
//! dataset reuses the source dataset's field schema ([`DatasetMeta`]), so
//! the subset opens in any GIS tool exactly like the original.

use crate::error::Result;
use crate::model::{BuildingRecord, DatasetMeta};
use std::path::Path;

/// Writes `records` to a new shapefile at `path` with the original schema.
///
/// `meta` must come from the dataset the records were retrieved from;
/// records carrying fields unknown to that schema fail the write.
pub fn export_subset(
    path: impl AsRef<Path>,
    records: &[BuildingRecord],
    meta: DatasetMeta,
) -> Result<()> {
    let mut writer = shapefile::Writer::from_path_with_info(path.as_ref(), meta.table_info)?;

    for record in records {
        writer.write_shape_and_record(&record.shape, &record.attributes)?;
    }

    Ok(())
}
