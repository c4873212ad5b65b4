//! Geographic coordinates and the splitting axes of the tree.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A latitude/longitude pair in degrees.
///
/// Equality is an exact match on both components, made total so that
/// coordinates can key a hash set: `-0.0` equals `0.0` and NaN equals NaN.
///
/// ```
/// use geokd::Coordinate;
///
/// let nyc = Coordinate::new(40.7128, -74.0060);
/// assert_eq!(nyc, Coordinate::from((40.7128, -74.0060)));
/// assert_eq!(Coordinate::new(0.0, -0.0), Coordinate::new(-0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Component along the given splitting axis.
    #[inline]
    pub fn axis_value(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Latitude => self.lat,
            Axis::Longitude => self.lon,
        }
    }

    /// Finite, with latitude in [-90, 90] and longitude in [-180, 180].
    pub fn is_canonical(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    fn key_bits(&self) -> (u64, u64) {
        (canonical_bits(self.lat), canonical_bits(self.lon))
    }
}

#[inline]
fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        // Folds -0.0 into 0.0.
        (value + 0.0).to_bits()
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.key_bits() == other.key_bits()
    }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key_bits().hash(state);
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(c: Coordinate) -> Self {
        (c.lat, c.lon)
    }
}

impl From<geo::Point> for Coordinate {
    fn from(point: geo::Point) -> Self {
        Self::new(point.y(), point.x())
    }
}

impl From<Coordinate> for geo::Point {
    fn from(c: Coordinate) -> Self {
        geo::Point::new(c.lon, c.lat)
    }
}

/// Splitting axis of a tree level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Axis used at `depth`: latitude on even levels, longitude on odd ones.
    #[inline]
    pub fn for_depth(depth: usize) -> Self {
        if depth % 2 == 0 {
            Axis::Latitude
        } else {
            Axis::Longitude
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_axis_alternates() {
        assert_eq!(Axis::for_depth(0), Axis::Latitude);
        assert_eq!(Axis::for_depth(1), Axis::Longitude);
        assert_eq!(Axis::for_depth(2), Axis::Latitude);
        assert_eq!(Axis::for_depth(7), Axis::Longitude);
    }

    #[test]
    fn test_axis_value() {
        let c = Coordinate::new(41.8, -87.6);
        assert_eq!(c.axis_value(Axis::Latitude), 41.8);
        assert_eq!(c.axis_value(Axis::Longitude), -87.6);
    }

    #[test]
    fn test_equality_is_exact() {
        assert_eq!(Coordinate::new(1.0, 2.0), Coordinate::new(1.0, 2.0));
        assert_ne!(Coordinate::new(1.0, 2.0), Coordinate::new(1.0, 2.000_000_000_1));
        assert_ne!(Coordinate::new(1.0, 2.0), Coordinate::new(2.0, 1.0));
    }

    #[test]
    fn test_equality_is_total() {
        let nan = Coordinate::new(f64::NAN, 0.0);
        assert_eq!(nan, nan);
        assert_eq!(Coordinate::new(-0.0, 5.0), Coordinate::new(0.0, 5.0));
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        let mut set = FxHashSet::default();
        set.insert(Coordinate::new(0.0, 1.0));
        set.insert(Coordinate::new(-0.0, 1.0));
        set.insert(Coordinate::new(0.0, 1.0));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_geo_point_conversion() {
        let point = geo::Point::new(-74.0060, 40.7128);
        let c = Coordinate::from(point);
        assert_eq!(c.lat, 40.7128);
        assert_eq!(c.lon, -74.0060);

        let back: geo::Point = c.into();
        assert_eq!(back, point);
    }

    #[test]
    fn test_is_canonical() {
        assert!(Coordinate::new(90.0, -180.0).is_canonical());
        assert!(Coordinate::new(-90.0, 180.0).is_canonical());
        assert!(!Coordinate::new(95.0, 0.0).is_canonical());
        assert!(!Coordinate::new(0.0, 200.0).is_canonical());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_canonical());
        assert!(!Coordinate::new(0.0, f64::INFINITY).is_canonical());
    }
}
