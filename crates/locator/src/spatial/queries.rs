//! Distance math for stop lookups.
//!
//! Distances are great-circle kilometers via the haversine formula. The
//! formula is written out (instead of going through `geo`'s trait) because
//! the rest of the app, backend included, assumes the mean Earth radius of
//! exactly 6371 km.

use geo::Point;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points, in kilometers.
///
/// Inputs are decimal degrees (x = longitude, y = latitude). Symmetric and
/// zero for identical points. Latitude in [-90, 90] and longitude in
/// [-180, 180] is a caller precondition; out-of-range values yield
/// unspecified distances.
pub fn haversine_km(a: Point, b: Point) -> f64 {
    let lat_a = a.y().to_radians();
    let lat_b = b.y().to_radians();
    let d_lat = (b.y() - a.y()).to_radians();
    let d_lon = (b.x() - a.x()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Convert kilometers to degrees at the equator (for bounding-box queries).
pub fn km_to_degrees_approx(km: f64) -> f64 {
    km / 111.32 // kilometers per degree at the equator
}

/// Convert degrees to approximate kilometers at the equator.
pub fn degrees_to_km_approx(degrees: f64) -> f64 {
    degrees * 111.32
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_haversine_known_distance() {
        // NYC to LA is approximately 3,936 km
        let nyc = Point::new(-74.0060, 40.7128);
        let la = Point::new(-118.2437, 34.0522);

        let dist = haversine_km(nyc, la);
        assert!((dist - 3_936.0).abs() < 50.0); // within 50 km
    }

    #[test]
    fn test_haversine_symmetry_and_identity() {
        let a = Point::new(15.2101, 52.7901);
        let b = Point::new(14.00, 53.50);

        assert_relative_eq!(haversine_km(a, b), haversine_km(b, a));
        assert_eq!(haversine_km(a, a), 0.0);
        assert_eq!(haversine_km(b, b), 0.0);
    }

    #[test]
    fn test_haversine_street_scale() {
        // Opposite-direction stops across a street: tens of meters.
        let side_a = Point::new(15.2103, 52.7902);
        let side_b = Point::new(15.2099, 52.7899);

        let dist = haversine_km(side_a, side_b);
        assert!(dist > 0.0 && dist < 0.1, "got {dist} km");
    }

    #[test]
    fn test_haversine_regional_scale() {
        // Kłodawa area to Kraków area: roughly 300 km.
        let reference = Point::new(15.215, 52.788);
        let faraway = Point::new(20.00, 50.00);

        let dist = haversine_km(reference, faraway);
        assert!(dist > 250.0 && dist < 450.0, "got {dist} km");
    }

    #[test]
    fn test_degree_conversions_roundtrip() {
        assert_relative_eq!(degrees_to_km_approx(km_to_degrees_approx(0.5)), 0.5);
        assert_relative_eq!(km_to_degrees_approx(111.32), 1.0);
    }
}
