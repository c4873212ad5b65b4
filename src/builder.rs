//! Index builder for configuration-driven construction
//!
//! [`SpatialIndex::build`] covers the common case. The builder adds a custom
//! [`IndexConfig`] and opt-in validation of the input coordinates.

use crate::config::IndexConfig;
use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::index::SpatialIndex;
use crate::validation::validate_coordinates;

/// Builder for an index with custom settings.
#[derive(Debug, Clone, Default)]
pub struct IndexBuilder {
    config: IndexConfig,
}

impl IndexBuilder {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the index configuration.
    pub fn config(mut self, config: IndexConfig) -> Self {
        self.config = config;
        self
    }

    /// Reject out-of-range coordinates at build time.
    pub fn validate(mut self, enabled: bool) -> Self {
        self.config = self.config.with_validation(enabled);
        self
    }

    /// Enable or disable splitting-plane pruning in range search.
    pub fn range_pruning(mut self, enabled: bool) -> Self {
        self.config = self.config.with_range_pruning(enabled);
        self
    }

    /// Build the index from a complete point set.
    ///
    /// Fails only on an inconsistent configuration, or, with validation
    /// enabled, on the first out-of-range coordinate.
    pub fn build<I, C>(self, points: I) -> Result<SpatialIndex>
    where
        I: IntoIterator<Item = C>,
        C: Into<Coordinate>,
    {
        self.config.validate()?;

        let points: Vec<Coordinate> = points.into_iter().map(Into::into).collect();
        if self.config.validate_coordinates {
            validate_coordinates(&points)?;
        }

        Ok(SpatialIndex::from_points(points, self.config))
    }
}
