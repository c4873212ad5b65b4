//! Great-circle distance in miles and the splitting-plane bounds used for pruning.

use crate::coordinate::{Axis, Coordinate};
use std::f64::consts::FRAC_PI_2;

/// Mean Earth radius used by [`haversine`].
pub const EARTH_RADIUS_MILES: f64 = 3961.0;

/// Initial upper bound for nearest-neighbor search. Exceeds the antipodal
/// distance `π · EARTH_RADIUS_MILES` (about 12444 miles).
pub const MAX_DISTANCE: f64 = 13000.0;

/// Relative amount shaved off every lower bound so rounding in the bound
/// never exceeds the matching `haversine` value.
const BOUND_SLACK: f64 = 1e-12;

/// Haversine distance between two coordinates in miles.
///
/// ```
/// use geokd::distance::haversine;
/// use geokd::Coordinate;
///
/// let a = Coordinate::new(0.0, 0.0);
/// let b = Coordinate::new(0.0, 90.0);
/// let quarter = std::f64::consts::FRAC_PI_2 * 3961.0;
/// assert!((haversine(a, b) - quarter).abs() < 1e-6);
/// ```
#[inline]
pub fn haversine(a: Coordinate, b: Coordinate) -> f64 {
    haversine_with_radius(a, b, EARTH_RADIUS_MILES)
}

/// Haversine distance on a sphere of the given radius.
pub fn haversine_with_radius(a: Coordinate, b: Coordinate, radius: f64) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let sin_lat = (d_lat / 2.0).sin();
    let sin_lon = (d_lon / 2.0).sin();
    let h = sin_lat * sin_lat
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * sin_lon * sin_lon;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    radius * c
}

/// One side of a splitting plane: `{axis <= v}` or `{axis >= v}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Below,
    Above,
}

/// Lower bound on the great-circle distance from `query` to any canonical
/// coordinate on the given side of the plane `axis == split`.
///
/// Zero when the query itself lies on that side. A longitude half-space can
/// also be entered across the antimeridian, so the bound is the smaller of
/// the distances to both meridians that enclose it.
pub fn half_space_distance(
    query: Coordinate,
    axis: Axis,
    split: f64,
    side: Side,
    radius: f64,
) -> f64 {
    let q = query.axis_value(axis);
    let inside = match side {
        Side::Below => q <= split,
        Side::Above => q >= split,
    };
    if inside {
        return 0.0;
    }

    let angle = match axis {
        Axis::Latitude => (q - split).abs().to_radians(),
        Axis::Longitude => meridian_angle(query, split).min(meridian_angle(query, 180.0)),
    };

    angle * radius * (1.0 - BOUND_SLACK)
}

/// Angular distance from `query` to the half great circle at longitude `lon`.
fn meridian_angle(query: Coordinate, lon: f64) -> f64 {
    let mut d_lon = (query.lon - lon).abs() % 360.0;
    if d_lon > 180.0 {
        d_lon = 360.0 - d_lon;
    }

    let lat = query.lat.to_radians();
    if d_lon >= 90.0 {
        // Closest point of the meridian is the nearer pole.
        FRAC_PI_2 - lat.abs()
    } else {
        (d_lon.to_radians().sin() * lat.cos()).clamp(-1.0, 1.0).asin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Distance, Haversine};
    use std::f64::consts::PI;

    #[test]
    fn test_zero_for_identical_points() {
        let p = Coordinate::new(40.7128, -74.0060);
        assert_eq!(haversine(p, p), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let nyc = Coordinate::new(40.7128, -74.0060);
        let la = Coordinate::new(34.0522, -118.2437);
        assert_eq!(haversine(nyc, la), haversine(la, nyc));
    }

    #[test]
    fn test_quarter_great_circle() {
        let d = haversine(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 90.0));
        assert!((d - FRAC_PI_2 * EARTH_RADIUS_MILES).abs() < 1e-6);
        assert!((d - 6222.0).abs() < 1.0);
    }

    #[test]
    fn test_antipodal_bound() {
        let d = haversine(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0));
        assert!((d - PI * EARTH_RADIUS_MILES).abs() < 1e-6);
        assert!(d < MAX_DISTANCE);
    }

    #[test]
    fn test_nyc_la() {
        let nyc = Coordinate::new(40.7128, -74.0060);
        let la = Coordinate::new(34.0522, -118.2437);
        let d = haversine(nyc, la);
        // ~2445 miles on a 3961 mile sphere
        assert!(d > 2400.0 && d < 2500.0);
    }

    #[test]
    fn test_agrees_with_geo_haversine() {
        // geo measures meters on its own sphere, so only the ratio is fixed.
        let pairs = [
            (Coordinate::new(51.5074, -0.1278), Coordinate::new(48.8566, 2.3522)),
            (Coordinate::new(40.7128, -74.0060), Coordinate::new(34.0522, -118.2437)),
            (Coordinate::new(-33.8688, 151.2093), Coordinate::new(35.6762, 139.6503)),
        ];

        let ratios: Vec<f64> = pairs
            .iter()
            .map(|&(a, b)| {
                haversine(a, b) / Haversine.distance(geo::Point::from(a), geo::Point::from(b))
            })
            .collect();
        for ratio in &ratios[1..] {
            assert!((ratio / ratios[0] - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_latitude_half_space() {
        let q = Coordinate::new(10.0, 0.0);
        assert_eq!(
            half_space_distance(q, Axis::Latitude, 20.0, Side::Below, EARTH_RADIUS_MILES),
            0.0
        );

        let bound = half_space_distance(q, Axis::Latitude, 20.0, Side::Above, EARTH_RADIUS_MILES);
        let actual = haversine(q, Coordinate::new(20.0, 0.0));
        assert!(bound <= actual);
        assert!((bound - actual).abs() < 1e-6);
    }

    #[test]
    fn test_longitude_half_space_on_equator() {
        let q = Coordinate::new(0.0, 0.0);
        let bound = half_space_distance(q, Axis::Longitude, 10.0, Side::Above, EARTH_RADIUS_MILES);
        let actual = haversine(q, Coordinate::new(0.0, 10.0));
        assert!(bound <= actual);
        assert!((bound - actual).abs() < 1e-6);
    }

    #[test]
    fn test_longitude_half_space_shrinks_toward_poles() {
        let equator = half_space_distance(
            Coordinate::new(0.0, 0.0),
            Axis::Longitude,
            10.0,
            Side::Above,
            EARTH_RADIUS_MILES,
        );
        let north = half_space_distance(
            Coordinate::new(80.0, 0.0),
            Axis::Longitude,
            10.0,
            Side::Above,
            EARTH_RADIUS_MILES,
        );
        assert!(north < equator);
    }

    #[test]
    fn test_longitude_half_space_wraps_antimeridian() {
        // {lon <= -170} is only 10 degrees away across the antimeridian.
        let q = Coordinate::new(0.0, 170.0);
        let bound = half_space_distance(q, Axis::Longitude, -170.0, Side::Below, EARTH_RADIUS_MILES);
        let across = haversine(q, Coordinate::new(0.0, -175.0));
        assert!(bound <= across);
    }

    #[test]
    fn test_meridian_beyond_quarter_turn_uses_pole() {
        let q = Coordinate::new(60.0, 0.0);
        let angle = meridian_angle(q, 120.0);
        assert!((angle - 30.0_f64.to_radians()).abs() < 1e-12);
    }
}
