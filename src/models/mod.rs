//! Core transit data types.

pub mod types;

// Re-exports for convenience
pub use types::{DecodedRoute, Result, ScheduleByRoute, Stop, TransitError, TripRecord};
