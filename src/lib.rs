//! # octranspo-transit
//!
//! The data core of an OC Transpo schedule client: feed normalization and
//! route-geometry decoding, with no networking or UI of its own.
//!
//! ## Features
//!
//! - **Schedule aggregation**: Flatten the nested `GetNextTripsForStop`
//!   payload into a stable route-number → trips mapping
//! - **Polyline decoding**: Decode compact route geometry strings and
//!   measure path length
//! - **Nearest stop**: Haversine nearest-neighbor over stop sets, linear or
//!   R-tree indexed
//! - **Pure data-in/data-out**: The application shell owns all fetching and
//!   rendering; every function here is synchronous and side-effect free
//!
//! ## Example
//!
//! ```
//! use octranspo_transit::prelude::*;
//! use geo::Point;
//!
//! let stops = vec![
//!     Stop {
//!         id: StopIdentifier::new("AF940"),
//!         code: "3017".into(),
//!         name: "Hurdman A".into(),
//!         location: Point::new(-75.6652, 45.4119),
//!     },
//!     Stop {
//!         id: StopIdentifier::new("AF990"),
//!         code: "3018".into(),
//!         name: "Hurdman B".into(),
//!         location: Point::new(-75.6640, 45.4125),
//!     },
//! ];
//!
//! // Where is the user's closest stop?
//! let here = Point::new(-75.6651, 45.4120);
//! let closest = nearest_stop(here, &stops).unwrap();
//! assert_eq!(closest.id.as_str(), "AF940");
//!
//! // Decode a route geometry and measure it.
//! let route = DecodedRoute::new(decode_polyline("_p~iF~ps|U_ulLnnqC").unwrap());
//! assert_eq!(route.points.len(), 2);
//! assert!(route.total_distance_meters > 0.0);
//! ```

pub mod feed;
pub mod identifiers;
pub mod models;
pub mod polyline;
pub mod schedule;
pub mod spatial;

// Re-exports for convenience
pub mod prelude {
    pub use crate::feed::{
        directions::DirectionsResponse, next_trips::NextTripsResponse, stops::StopsResponse,
    };
    pub use crate::identifiers::*;
    pub use crate::models::types::*;
    pub use crate::polyline::{decode as decode_polyline, path_distance_meters};
    pub use crate::schedule::aggregate;
    pub use crate::spatial::index::StopIndex;
    pub use crate::spatial::queries::{haversine_distance, nearest_stop};
}

pub use prelude::*;
