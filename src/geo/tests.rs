//! Distance Function Tests

#[cfg(test)]
mod tests {
    use crate::geo::{distance, EARTH_RADIUS_KM};
    use std::f64::consts::PI;

    #[test]
    fn test_distance_same_point_is_zero() {
        let points = [(0.0, 0.0), (52.52, 13.40), (-33.86, 151.2), (89.9, -179.9)];
        for (lat, lon) in points {
            assert_eq!(distance(lat, lon, lat, lon), 0.0);
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [
            ((1.1, 1.1), (60.17, 24.94)),
            ((-33.86, 151.2), (40.71, -74.0)),
            ((0.0, 179.0), (0.0, -179.0)),
        ];
        for ((a, b), (c, d)) in pairs {
            assert_eq!(distance(a, b, c, d), distance(c, d, a, b));
        }
    }

    #[test]
    fn test_distance_one_degree_on_equator() {
        // 1 degree of arc = R * pi / 180
        let expected = EARTH_RADIUS_KM * PI / 180.0;
        let dist = distance(0.0, 0.0, 0.0, 1.0);
        assert!((dist - expected).abs() < 1e-9, "got {}", dist);
    }

    #[test]
    fn test_distance_known_city_pair() {
        // Helsinki -> Frankfurt is roughly 1530 km
        let dist = distance(60.17, 24.94, 50.11, 8.68);
        assert!((dist - 1530.0).abs() < 20.0, "got {}", dist);
    }

    #[test]
    fn test_distance_antipodes_is_half_circumference() {
        let dist = distance(0.0, 0.0, 0.0, 180.0);
        assert!((dist - EARTH_RADIUS_KM * PI).abs() < 1e-6);
    }

    #[test]
    fn test_distance_crosses_antimeridian() {
        // 2 degrees apart across the 180th meridian, not 358
        let dist = distance(0.0, 179.0, 0.0, -179.0);
        assert!(dist < 250.0, "got {}", dist);
    }

    #[test]
    fn test_distance_nan_propagates() {
        assert!(distance(f64::NAN, 0.0, 0.0, 0.0).is_nan());
    }
}
