// crates/plotcover-core/src/geometry.rs

//! # Geometry I/O
//!
//! Conversions between the exchange formats (GeoJSON plot input, shapefile
//! record shapes) and the internal [`geo`] representation, plus the cheap
//! bounding-box overlap predicate used as the coarse retrieval filter.

use crate::error::{CoverageError, Result};
use geo::{Coord, LineString, MultiPolygon, Polygon, Rect};
use shapefile::record::GenericBBox;
use shapefile::{Point, PolygonRing};

/// Parses a plot polygon from GeoJSON text.
///
/// Accepts either a bare `Polygon` geometry object or a `Feature` wrapping
/// one. Coordinates are taken as-is and are expected to be EPSG:4326
/// longitude/latitude.
pub fn plot_from_geojson(text: &str) -> Result<Polygon<f64>> {
    let geojson: geojson::GeoJson = text
        .parse()
        .map_err(|e: geojson::Error| CoverageError::MalformedGeometry(e.to_string()))?;

    let geometry = match geojson {
        geojson::GeoJson::Geometry(g) => g,
        geojson::GeoJson::Feature(f) => f.geometry.ok_or_else(|| {
            CoverageError::MalformedGeometry("feature has no geometry".to_string())
        })?,
        geojson::GeoJson::FeatureCollection(_) => {
            return Err(CoverageError::MalformedGeometry(
                "expected a single polygon, got a feature collection".to_string(),
            ))
        }
    };

    Polygon::<f64>::try_from(geometry)
        .map_err(|e| CoverageError::MalformedGeometry(e.to_string()))
}

/// Converts a shapefile polygon record into a [`MultiPolygon`].
///
/// Ring roles come from the file (shapefiles encode them via winding order,
/// the reader has already classified them). An interior ring is attached to
/// the most recent exterior ring; an interior ring arriving before any
/// exterior ring means the record is malformed.
pub fn multi_polygon_from_shape(shape: &shapefile::Polygon) -> Result<MultiPolygon<f64>> {
    let mut parts: Vec<(LineString<f64>, Vec<LineString<f64>>)> = Vec::new();

    for ring in shape.rings() {
        match ring {
            PolygonRing::Outer(points) => parts.push((line_string(points), Vec::new())),
            PolygonRing::Inner(points) => match parts.last_mut() {
                Some((_, interiors)) => interiors.push(line_string(points)),
                None => {
                    return Err(CoverageError::MalformedGeometry(
                        "interior ring before any exterior ring".to_string(),
                    ))
                }
            },
        }
    }

    Ok(MultiPolygon(
        parts
            .into_iter()
            .map(|(exterior, interiors)| Polygon::new(exterior, interiors))
            .collect(),
    ))
}

/// Overlap test between a record's stored bounding box and the plot's.
///
/// This is the coarse filter: it runs on the bbox the shapefile stores per
/// record, so non-candidates are rejected before ring conversion.
pub(crate) fn bbox_overlaps(bbox: &GenericBBox<Point>, rect: &Rect<f64>) -> bool {
    bbox.min.x <= rect.max().x
        && bbox.max.x >= rect.min().x
        && bbox.min.y <= rect.max().y
        && bbox.max.y >= rect.min().y
}

fn line_string(points: &[Point]) -> LineString<f64> {
    points.iter().map(|p| Coord { x: p.x, y: p.y }).collect()
}
