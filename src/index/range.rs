use super::{Node, SearchStats, SpatialIndex};
use crate::coordinate::{Axis, Coordinate};
use crate::distance::{Side, half_space_distance, haversine_with_radius};
use crate::error::Result;
use crate::validation::{validate_coordinate, validate_radius};
use rustc_hash::FxHashSet;

impl SpatialIndex {
    /// Every distinct indexed point strictly closer than `radius` to `query`,
    /// excluding the query itself.
    ///
    /// A point indexed more than once is reported once.
    pub fn range_search(&self, query: Coordinate, radius: f64) -> FxHashSet<Coordinate> {
        self.range_search_with_stats(query, radius).0
    }

    pub fn range_search_with_stats(
        &self,
        query: Coordinate,
        radius: f64,
    ) -> (FxHashSet<Coordinate>, SearchStats) {
        let mut search = RangeSearch {
            query,
            radius,
            earth_radius: self.config.earth_radius,
            prune: self.config.range_pruning && self.can_prune(query),
            results: FxHashSet::default(),
            stats: SearchStats::default(),
        };

        if let Some(root) = self.root() {
            search.visit(root, 0);
        }

        (search.results, search.stats)
    }

    /// Range search that rejects a negative or non-finite radius, and an
    /// out-of-range query when coordinate validation is configured.
    pub fn try_range_search(
        &self,
        query: Coordinate,
        radius: f64,
    ) -> Result<FxHashSet<Coordinate>> {
        validate_radius(radius)?;
        if self.config.validate_coordinates {
            validate_coordinate(&query)?;
        }
        Ok(self.range_search(query, radius))
    }

    /// Range search results ordered by distance from the query, nearest first.
    pub fn range_search_sorted(&self, query: Coordinate, radius: f64) -> Vec<(Coordinate, f64)> {
        let mut results: Vec<(Coordinate, f64)> = self
            .range_search(query, radius)
            .into_iter()
            .map(|c| (c, haversine_with_radius(query, c, self.config.earth_radius)))
            .collect();
        results.sort_by(|a, b| a.1.total_cmp(&b.1));
        results
    }
}

struct RangeSearch {
    query: Coordinate,
    radius: f64,
    earth_radius: f64,
    prune: bool,
    results: FxHashSet<Coordinate>,
    stats: SearchStats,
}

impl RangeSearch {
    fn visit(&mut self, node: &Node, depth: usize) {
        self.stats.nodes_visited += 1;

        let distance = haversine_with_radius(self.query, node.location, self.earth_radius);
        if distance < self.radius && node.location != self.query {
            self.results.insert(node.location);
        }

        let axis = Axis::for_depth(depth);
        let split = node.location.axis_value(axis);

        for (child, side) in [(node.left(), Side::Below), (node.right(), Side::Above)] {
            let Some(child) = child else { continue };
            if self.prune
                && half_space_distance(self.query, axis, split, side, self.earth_radius)
                    >= self.radius
            {
                self.stats.subtrees_pruned += 1;
                continue;
            }
            self.visit(child, depth + 1);
        }
    }
}
