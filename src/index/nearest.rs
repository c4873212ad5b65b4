use super::{Node, SearchStats, SpatialIndex};
use crate::coordinate::{Axis, Coordinate};
use crate::distance::{Side, half_space_distance, haversine_with_radius};
use crate::error::Result;
use crate::validation::validate_coordinate;

/// Closest indexed point to a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub coordinate: Coordinate,
    /// Great-circle distance from the query, in the configured unit.
    pub distance: f64,
}

impl SpatialIndex {
    /// Find the closest indexed point that is not exactly equal to `query`.
    ///
    /// Returns `None` for an empty index, or when every indexed point equals
    /// the query.
    pub fn nearest_neighbor(&self, query: Coordinate) -> Option<Neighbor> {
        self.nearest_neighbor_with_stats(query).0
    }

    /// Like [`nearest_neighbor`](Self::nearest_neighbor), also reporting
    /// how much of the tree was traversed.
    pub fn nearest_neighbor_with_stats(&self, query: Coordinate) -> (Option<Neighbor>, SearchStats) {
        let Some(root) = self.root() else {
            return (None, SearchStats::default());
        };

        let mut search = NearestSearch {
            query,
            radius: self.config.earth_radius,
            prune: self.can_prune(query),
            best: None,
            best_distance: self.config.max_distance,
            stats: SearchStats::default(),
        };
        search.visit(root, 0);

        let neighbor = search.best.map(|coordinate| Neighbor {
            coordinate,
            distance: search.best_distance,
        });
        (neighbor, search.stats)
    }

    /// Nearest-neighbor search that rejects an out-of-range query when the
    /// index was configured with coordinate validation.
    pub fn try_nearest_neighbor(&self, query: Coordinate) -> Result<Option<Neighbor>> {
        if self.config.validate_coordinates {
            validate_coordinate(&query)?;
        }
        Ok(self.nearest_neighbor(query))
    }
}

struct NearestSearch {
    query: Coordinate,
    radius: f64,
    prune: bool,
    best: Option<Coordinate>,
    best_distance: f64,
    stats: SearchStats,
}

impl NearestSearch {
    fn visit(&mut self, node: &Node, depth: usize) {
        self.stats.nodes_visited += 1;

        let distance = haversine_with_radius(self.query, node.location, self.radius);
        if distance < self.best_distance && node.location != self.query {
            self.best = Some(node.location);
            self.best_distance = distance;
        }

        let axis = Axis::for_depth(depth);
        let split = node.location.axis_value(axis);
        let (near, far, far_side) = if self.query.axis_value(axis) < split {
            (node.left(), node.right(), Side::Above)
        } else {
            (node.right(), node.left(), Side::Below)
        };

        // The far side is tested against the bound from before the near
        // descent, not the possibly tighter one found inside it.
        let bound = self.best_distance;

        if let Some(near) = near {
            self.visit(near, depth + 1);
        }

        if let Some(far) = far {
            if self.prune
                && half_space_distance(self.query, axis, split, far_side, self.radius) > bound
            {
                self.stats.subtrees_pruned += 1;
            } else {
                self.visit(far, depth + 1);
            }
        }
    }
}
