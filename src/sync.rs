//! Thread-safe handle for publishing and querying an index.
//!
//! A [`SpatialIndex`] never changes once built, so queries need no locking.
//! What does need care is replacing it: `SharedIndex` builds the new tree
//! with no lock held, then swaps an `Arc` under a write guard that lasts
//! only for the pointer store. Readers clone the current `Arc` and run their
//! query on that snapshot, so they never see a partially built tree and a
//! rebuild never waits on a long-running search.
//!
//! ```rust
//! use geokd::{Coordinate, SharedIndex};
//! use std::thread;
//!
//! let shared = SharedIndex::build(vec![(40.0, -75.0), (34.0, -118.0)]);
//!
//! let reader = shared.clone();
//! let handle = thread::spawn(move || reader.nearest_neighbor(Coordinate::new(40.7, -74.0)));
//!
//! shared.rebuild(vec![(41.8, -87.6)]).unwrap();
//! assert!(handle.join().unwrap().is_some());
//! assert_eq!(shared.len(), 1);
//! ```

use crate::builder::IndexBuilder;
use crate::config::IndexConfig;
use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::index::{Neighbor, SpatialIndex};
use parking_lot::RwLock;
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Cloneable, thread-safe handle to the current index.
///
/// - Implements `Clone` for sharing between threads
/// - Queries run on a snapshot and never block each other
/// - `rebuild` holds the write lock only while swapping the pointer
#[derive(Clone, Default)]
pub struct SharedIndex {
    inner: Arc<RwLock<Arc<SpatialIndex>>>,
}

impl SharedIndex {
    /// Wrap an already built index.
    pub fn new(index: SpatialIndex) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(index))),
        }
    }

    /// Build and publish an index with the default configuration.
    pub fn build<I, C>(points: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Coordinate>,
    {
        Self::new(SpatialIndex::build(points))
    }

    /// The index currently published. Stays valid after later rebuilds.
    pub fn snapshot(&self) -> Arc<SpatialIndex> {
        Arc::clone(&self.inner.read())
    }

    /// Replace the published index.
    pub fn publish(&self, index: SpatialIndex) {
        let index = Arc::new(index);
        let previous = std::mem::replace(&mut *self.inner.write(), index);
        log::debug!(
            "Published index with {} points (replaced {})",
            self.len(),
            previous.len()
        );
    }

    /// Build a new index from `points` with the current configuration and
    /// publish it. Validation configured on the current index applies; on
    /// error the current index stays in place.
    pub fn rebuild<I, C>(&self, points: I) -> Result<()>
    where
        I: IntoIterator<Item = C>,
        C: Into<Coordinate>,
    {
        let config = self.snapshot().config().clone();
        self.rebuild_with_config(points, config)
    }

    /// Build with an explicit configuration and publish on success. On
    /// error the current index stays in place.
    pub fn rebuild_with_config<I, C>(&self, points: I, config: IndexConfig) -> Result<()>
    where
        I: IntoIterator<Item = C>,
        C: Into<Coordinate>,
    {
        let index = IndexBuilder::new().config(config).build(points)?;
        self.publish(index);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn nearest_neighbor(&self, query: Coordinate) -> Option<Neighbor> {
        self.snapshot().nearest_neighbor(query)
    }

    pub fn range_search(&self, query: Coordinate, radius: f64) -> FxHashSet<Coordinate> {
        self.snapshot().range_search(query, radius)
    }
}

impl From<SpatialIndex> for SharedIndex {
    fn from(index: SpatialIndex) -> Self {
        Self::new(index)
    }
}
