// crates/plotcover-core/src/error.rs

use thiserror::Error;

/// Error type for every fallible operation in this crate.
///
/// The first four variants form the query-level taxonomy: they tell the
/// caller which stage failed (retrieval vs aggregation) and which condition
/// triggered it. The remaining variants wrap collaborator failures that
/// surface during dataset I/O.
#[derive(Debug, Error)]
pub enum CoverageError {
    /// The regional dataset could not be resolved or opened.
    #[error("dataset not found: {0}")]
    DatasetNotFound(String),

    /// A plot or building geometry could not be parsed.
    #[error("malformed geometry: {0}")]
    MalformedGeometry(String),

    /// The coordinate transform could not be applied to a coordinate.
    #[error("reprojection failed: {0}")]
    Reprojection(String),

    /// The plot has zero area after projection; a coverage proportion
    /// would be a division by zero.
    #[error("plot has zero projected area")]
    DegeneratePlot,

    /// Error reading or writing a shapefile record.
    #[error("shapefile error: {0}")]
    Shapefile(#[from] shapefile::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoverageError>;
