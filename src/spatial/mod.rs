//! Spatial indexing and query utilities.

pub mod index;
pub mod queries;

pub use index::StopIndex;
pub use queries::{haversine_distance, nearest_stop};
