//! Validation for geographic coordinates.
//!
//! The index itself accepts any value; these checks back the opt-in
//! `validate_coordinates` setting.

use crate::coordinate::Coordinate;
use crate::error::{IndexError, Result};

/// Validates a coordinate has a finite, in-range latitude and longitude.
///
/// Latitude: [-90.0, 90.0], Longitude: [-180.0, 180.0]
///
/// # Examples
///
/// ```
/// use geokd::validation::validate_coordinate;
/// use geokd::Coordinate;
///
/// assert!(validate_coordinate(&Coordinate::new(40.7128, -74.0060)).is_ok());
/// assert!(validate_coordinate(&Coordinate::new(95.0, -74.0)).is_err());
/// assert!(validate_coordinate(&Coordinate::new(40.0, 200.0)).is_err());
/// ```
pub fn validate_coordinate(coord: &Coordinate) -> Result<()> {
    let (lat, lon) = (coord.lat, coord.lon);

    if !lat.is_finite() {
        return Err(IndexError::InvalidInput(format!(
            "Latitude must be finite, got: {}",
            lat
        )));
    }

    if !lon.is_finite() {
        return Err(IndexError::InvalidInput(format!(
            "Longitude must be finite, got: {}",
            lon
        )));
    }

    if !(-90.0..=90.0).contains(&lat) {
        return Err(IndexError::InvalidInput(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            lat
        )));
    }

    if !(-180.0..=180.0).contains(&lon) {
        return Err(IndexError::InvalidInput(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            lon
        )));
    }

    Ok(())
}

/// Validates every coordinate, reporting the first failure with its position.
pub fn validate_coordinates(coords: &[Coordinate]) -> Result<()> {
    for (idx, coord) in coords.iter().enumerate() {
        validate_coordinate(coord)
            .map_err(|e| IndexError::InvalidInput(format!("Point at index {}: {}", idx, e)))?;
    }
    Ok(())
}

/// Validates a search radius: finite and non-negative.
pub fn validate_radius(radius: f64) -> Result<()> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(IndexError::InvalidInput(format!(
            "Radius must be a non-negative finite number, got: {}",
            radius
        )));
    }
    Ok(())
}
