//! Static 2-D k-d tree over geographic coordinates.
//!
//! The tree is built once from a complete point set by median splits on an
//! alternating axis (latitude on even depths, longitude on odd ones) and is
//! never mutated afterwards. Searches are read-only traversals, so a built
//! [`SpatialIndex`] can be queried from any number of threads at once.
//!
//! ```rust
//! use geokd::{Coordinate, SpatialIndex};
//!
//! let index = SpatialIndex::build(vec![(40.0, -75.0), (34.0, -118.0), (41.8, -87.6)]);
//!
//! let nearest = index.nearest_neighbor(Coordinate::new(40.7, -74.0)).unwrap();
//! assert_eq!(nearest.coordinate, Coordinate::new(40.0, -75.0));
//!
//! let nearby = index.range_search(Coordinate::new(40.7, -74.0), 800.0);
//! assert_eq!(nearby.len(), 2);
//! ```

mod build;
mod nearest;
mod range;

use crate::config::IndexConfig;
use crate::coordinate::Coordinate;
use smallvec::SmallVec;

pub use nearest::Neighbor;

/// A tree node. Each node exclusively owns its children.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) location: Coordinate,
    pub(crate) left: Option<Box<Node>>,
    pub(crate) right: Option<Box<Node>>,
}

impl Node {
    pub(crate) fn leaf(location: Coordinate) -> Self {
        Self {
            location,
            left: None,
            right: None,
        }
    }

    pub fn location(&self) -> Coordinate {
        self.location
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    fn height(&self) -> usize {
        let left = self.left().map_or(0, Node::height);
        let right = self.right().map_or(0, Node::height);
        1 + left.max(right)
    }
}

/// Traversal counters for a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose location was measured against the query.
    pub nodes_visited: usize,
    /// Child subtrees skipped by the splitting-plane bound.
    pub subtrees_pruned: usize,
}

/// Immutable balanced k-d tree of coordinates.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    root: Option<Box<Node>>,
    len: usize,
    /// Every indexed coordinate is finite and within lat/lon range, which
    /// is what makes splitting-plane pruning sound.
    canonical: bool,
    config: IndexConfig,
}

impl SpatialIndex {
    /// Build an index from a complete point set with the default configuration.
    ///
    /// Never fails: any finite sequence, including an empty one, produces a
    /// valid index. Duplicates become separate nodes.
    pub fn build<I, C>(points: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Coordinate>,
    {
        let points = points.into_iter().map(Into::into).collect();
        Self::from_points(points, IndexConfig::default())
    }

    /// Build without validating; callers that need validation go through
    /// [`crate::IndexBuilder`].
    pub(crate) fn from_points(mut points: Vec<Coordinate>, config: IndexConfig) -> Self {
        let len = points.len();
        let canonical = points.iter().all(Coordinate::is_canonical);
        let root = build::build_subtree(&mut points, 0);

        let index = Self {
            root,
            len,
            canonical,
            config,
        };
        log::debug!(
            "Built k-d tree with {} points, depth {}{}",
            index.len,
            index.depth(),
            if canonical {
                ""
            } else {
                " (non-canonical coordinates, pruning disabled)"
            }
        );
        index
    }

    /// An index with no points.
    pub fn empty() -> Self {
        Self::from_points(Vec::new(), IndexConfig::default())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels; 0 for an empty index, 1 for a single leaf.
    pub fn depth(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Coordinates in preorder (node, left subtree, right subtree).
    pub fn iter(&self) -> Iter<'_> {
        let mut stack = SmallVec::new();
        if let Some(root) = self.root() {
            stack.push(root);
        }
        Iter { stack }
    }

    /// Whether splitting-plane bounds are valid for this query.
    fn can_prune(&self, query: Coordinate) -> bool {
        self.canonical && query.is_canonical()
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<Coordinate> for SpatialIndex {
    fn from_iter<T: IntoIterator<Item = Coordinate>>(iter: T) -> Self {
        Self::build(iter)
    }
}

impl<'a> IntoIterator for &'a SpatialIndex {
    type Item = Coordinate;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Preorder iterator over indexed coordinates.
pub struct Iter<'a> {
    stack: SmallVec<[&'a Node; 32]>,
}

impl Iterator for Iter<'_> {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(right) = node.right() {
            self.stack.push(right);
        }
        if let Some(left) = node.left() {
            self.stack.push(left);
        }
        Some(node.location)
    }
}
