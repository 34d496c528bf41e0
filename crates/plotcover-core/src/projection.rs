// crates/plotcover-core/src/projection.rs

//! # Equal-area reprojection
//!
//! Metric area arithmetic needs planar coordinates in meters, so plot and
//! footprint geometries are moved from EPSG:4326 (WGS84 geographic) into
//! EPSG:2163 (US National Atlas Equal Area) before any area is computed.
//! EPSG:2163 is a Lambert azimuthal equal-area projection on a sphere:
//!
//! ```text
//! +proj=laea +lat_0=45 +lon_0=-100 +x_0=0 +y_0=0
//! +a=6370997 +b=6370997 +units=m +no_defs
//! ```
//!
//! The transforms are computed in-crate with the spherical Snyder formulas
//! (Map Projections — A Working Manual, eqs. 24-2..24-4 and 20-14..20-18);
//! the published pure-Rust transform crates misgroup the y term of the
//! oblique LAEA forward, which breaks the round-trip guarantee and skews
//! areas. Forward and inverse share the same fixed parameters, so units
//! stay consistent across every geometry of a query.

use crate::error::{CoverageError, Result};
use geo::{Coord, MapCoords};

/// Authalic sphere radius of the US National Atlas, in meters.
const EARTH_RADIUS_M: f64 = 6_370_997.0;

/// Projection center: 100°W, 45°N.
const CENTER_LON_DEG: f64 = -100.0;
const CENTER_LAT_DEG: f64 = 45.0;

/// Reprojects a geometry from EPSG:4326 into EPSG:2163.
///
/// Output coordinates are planar meters. Works on any [`geo`] geometry type
/// via [`MapCoords`].
pub fn to_equal_area<G: MapCoords<f64, f64>>(geometry: &G) -> Result<G::Output> {
    geometry.try_map_coords(forward)
}

/// Inverse of [`to_equal_area`]: EPSG:2163 meters back to EPSG:4326 degrees.
///
/// The query pipeline never hands projected coordinates back to callers;
/// this exists for round-trip verification and debugging.
pub fn to_geographic<G: MapCoords<f64, f64>>(geometry: &G) -> Result<G::Output> {
    geometry.try_map_coords(inverse)
}

/// Snyder 24-2..24-4, oblique aspect on the sphere.
fn forward(c: Coord<f64>) -> Result<Coord<f64>> {
    let (sin_b1, cos_b1) = CENTER_LAT_DEG.to_radians().sin_cos();
    let lam = (c.x - CENTER_LON_DEG).to_radians();
    let phi = c.y.to_radians();
    let (sin_phi, cos_phi) = phi.sin_cos();
    let cos_lam = lam.cos();

    let denom = 1.0 + sin_b1 * sin_phi + cos_b1 * cos_phi * cos_lam;
    if denom < 1e-12 {
        // Antipode of the projection center maps to infinity.
        return Err(CoverageError::Reprojection(format!(
            "({}, {}) is antipodal to the projection center",
            c.x, c.y
        )));
    }
    let k = EARTH_RADIUS_M * (2.0 / denom).sqrt();

    Ok(Coord {
        x: k * cos_phi * lam.sin(),
        y: k * (cos_b1 * sin_phi - sin_b1 * cos_phi * cos_lam),
    })
}

/// Snyder 20-14..20-18 with 24-16, oblique aspect on the sphere.
fn inverse(c: Coord<f64>) -> Result<Coord<f64>> {
    let (sin_b1, cos_b1) = CENTER_LAT_DEG.to_radians().sin_cos();

    let rho = c.x.hypot(c.y);
    if rho == 0.0 {
        return Ok(Coord {
            x: CENTER_LON_DEG,
            y: CENTER_LAT_DEG,
        });
    }

    let sin_half_c = rho / (2.0 * EARTH_RADIUS_M);
    if sin_half_c > 1.0 {
        return Err(CoverageError::Reprojection(format!(
            "({}, {}) lies outside the projection domain",
            c.x, c.y
        )));
    }
    let (sin_c, cos_c) = (2.0 * sin_half_c.asin()).sin_cos();

    let phi = (cos_c * sin_b1 + c.y * sin_c * cos_b1 / rho)
        .clamp(-1.0, 1.0)
        .asin();
    let lam = (c.x * sin_c).atan2(rho * cos_b1 * cos_c - c.y * sin_b1 * sin_c);

    Ok(Coord {
        x: CENTER_LON_DEG + lam.to_degrees(),
        y: phi.to_degrees(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geo::{polygon, Area, Point, Polygon};

    #[test]
    fn center_maps_to_origin() {
        let origin: Point<f64> =
            to_equal_area(&Point::new(CENTER_LON_DEG, CENTER_LAT_DEG)).unwrap();
        assert_relative_eq!(origin.x(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(origin.y(), 0.0, epsilon = 1e-9);

        let back: Point<f64> = to_geographic(&origin).unwrap();
        assert_relative_eq!(back.x(), CENTER_LON_DEG, epsilon = 1e-9);
        assert_relative_eq!(back.y(), CENTER_LAT_DEG, epsilon = 1e-9);
    }

    #[test]
    fn round_trip_preserves_coordinates() {
        // Downtown San Francisco.
        let original = Point::new(-122.4087, 37.7831);
        let projected: Point<f64> = to_equal_area(&original).unwrap();
        let back: Point<f64> = to_geographic(&projected).unwrap();

        assert_relative_eq!(back.x(), original.x(), epsilon = 1e-6);
        assert_relative_eq!(back.y(), original.y(), epsilon = 1e-6);
    }

    #[test]
    fn projected_coordinates_are_planar_meters() {
        // San Francisco sits roughly 2000 km west-southwest of the
        // projection origin (100°W, 45°N).
        let projected: Point<f64> = to_equal_area(&Point::new(-122.4087, 37.7831)).unwrap();
        assert!(projected.x() < -1_500_000.0);
        assert!(projected.y() < 0.0);
    }

    #[test]
    fn equal_area_projection_yields_metric_area() {
        // ~0.01° x ~0.01° cell near SF: about 1.11 km tall in latitude and
        // 0.88 km wide in longitude, so just under 1e6 m².
        let cell: Polygon<f64> = polygon![
            (x: -122.41, y: 37.78),
            (x: -122.40, y: 37.78),
            (x: -122.40, y: 37.79),
            (x: -122.41, y: 37.79),
            (x: -122.41, y: 37.78),
        ];
        let area = to_equal_area(&cell).unwrap().unsigned_area();
        assert_relative_eq!(area, 0.977e6, max_relative = 0.01);
    }

    #[test]
    fn antipode_of_center_is_rejected() {
        let err = to_equal_area(&Point::new(80.0, -45.0)).unwrap_err();
        assert!(matches!(err, CoverageError::Reprojection(_)));
    }
}
