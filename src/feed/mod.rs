//! Serde wire models for the upstream payloads.
//!
//! The application shell owns the HTTP fetch and the `serde_json` call;
//! these types describe the shapes it decodes into. Field names mirror the
//! upstream JSON casing via `rename`, so structural invalidity surfaces at
//! the decode boundary and never inside the conversion functions.

pub mod directions;
pub mod next_trips;
pub mod stops;

pub use directions::DirectionsResponse;
pub use next_trips::NextTripsResponse;
pub use stops::StopsResponse;
