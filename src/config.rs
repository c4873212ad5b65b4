//! Index configuration.
use crate::distance::{EARTH_RADIUS_MILES, MAX_DISTANCE};
use crate::error::{IndexError, Result};
use std::f64::consts::PI;
#[cfg(feature = "toml")]
use std::path::Path;

/// Settings that shape construction and search.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndexConfig {
    /// Sphere radius used for every distance. Distances and search radii
    /// are reported in the same unit, miles by default.
    #[serde(default = "IndexConfig::default_earth_radius")]
    pub earth_radius: f64,

    /// Initial upper bound of nearest-neighbor search. Must exceed the
    /// antipodal distance for `earth_radius`.
    #[serde(default = "IndexConfig::default_max_distance")]
    pub max_distance: f64,

    /// Skip subtrees that lie wholly beyond the search radius.
    #[serde(default = "IndexConfig::default_range_pruning")]
    pub range_pruning: bool,

    /// Reject coordinates outside [-90, 90] x [-180, 180] at build time.
    #[serde(default)]
    pub validate_coordinates: bool,
}

impl IndexConfig {
    const fn default_earth_radius() -> f64 {
        EARTH_RADIUS_MILES
    }

    const fn default_max_distance() -> f64 {
        MAX_DISTANCE
    }

    const fn default_range_pruning() -> bool {
        true
    }

    pub fn with_earth_radius(mut self, radius: f64) -> Self {
        self.earth_radius = radius;
        self
    }

    pub fn with_max_distance(mut self, max_distance: f64) -> Self {
        self.max_distance = max_distance;
        self
    }

    pub fn with_range_pruning(mut self, enabled: bool) -> Self {
        self.range_pruning = enabled;
        self
    }

    pub fn with_validation(mut self, enabled: bool) -> Self {
        self.validate_coordinates = enabled;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.earth_radius.is_finite() || self.earth_radius <= 0.0 {
            return Err(IndexError::InvalidConfig(format!(
                "Earth radius must be a positive finite number, got: {}",
                self.earth_radius
            )));
        }

        let antipodal = PI * self.earth_radius;
        if self.max_distance.is_nan() || self.max_distance <= antipodal {
            return Err(IndexError::InvalidConfig(format!(
                "Max distance ({}) must exceed the antipodal distance ({:.1})",
                self.max_distance, antipodal
            )));
        }

        if self.max_distance > antipodal * 1_000.0 {
            log::warn!(
                "Max distance {} is far above the antipodal distance {:.1}; \
                nearest-neighbor results are unaffected but the value looks like a unit mistake",
                self.max_distance,
                antipodal
            );
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: IndexConfig =
            serde_json::from_str(json).map_err(|e| IndexError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| IndexError::ConfigParse(e.to_string()))
    }

    #[cfg(feature = "toml")]
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: IndexConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| IndexError::ConfigParse(e.to_string()))
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            earth_radius: Self::default_earth_radius(),
            max_distance: Self::default_max_distance(),
            range_pruning: Self::default_range_pruning(),
            validate_coordinates: false,
        }
    }
}
