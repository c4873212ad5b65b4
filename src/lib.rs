//! Static k-d tree over latitude/longitude points with great-circle
//! nearest-neighbor and radius queries.
//!
//! ```rust
//! use geokd::{Coordinate, SpatialIndex};
//!
//! let index = SpatialIndex::build(vec![(40.0, -75.0), (34.0, -118.0), (41.8, -87.6)]);
//!
//! let here = Coordinate::new(40.7, -74.0);
//! let nearest = index.nearest_neighbor(here).unwrap();
//! assert_eq!(nearest.coordinate, Coordinate::new(40.0, -75.0));
//!
//! let within_100_miles = index.range_search(here, 100.0);
//! assert!(within_100_miles.contains(&Coordinate::new(40.0, -75.0)));
//! ```

pub mod builder;
pub mod config;
pub mod coordinate;
pub mod distance;
pub mod error;
pub mod index;
pub mod sync;
pub mod validation;

pub use builder::IndexBuilder;
pub use config::IndexConfig;
pub use coordinate::{Axis, Coordinate};
pub use distance::{EARTH_RADIUS_MILES, MAX_DISTANCE, haversine};
pub use error::{IndexError, Result};
pub use index::{Neighbor, Node, SearchStats, SpatialIndex};
pub use sync::SharedIndex;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{
        Coordinate, IndexBuilder, IndexConfig, IndexError, Neighbor, Result, SharedIndex,
        SpatialIndex, haversine,
    };
}
