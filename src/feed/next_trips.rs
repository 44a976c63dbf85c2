//! Wire model for the `GetNextTripsForStop` response body.
//!
//! The feed wraps everything in a single result object and nests trips two
//! levels deep (`Route.RouteDirection[].Trips.Trip[]`). Direction-level
//! fields are always present; trip-level fields are omitted inconsistently
//! and stay `Option` here — the defaulting policy lives in
//! [`schedule::aggregate`](crate::schedule::aggregate), not in the wire
//! shape.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct NextTripsResponse {
    #[serde(rename = "GetNextTripsForStopResult")]
    pub result: NextTripsResult,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NextTripsResult {
    #[serde(rename = "StopNo")]
    pub stop_no: String,
    #[serde(rename = "StopLabel")]
    pub stop_label: String,
    #[serde(rename = "Error", default)]
    pub error: String,
    #[serde(rename = "Route")]
    pub route: RouteBlock,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RouteBlock {
    #[serde(rename = "RouteDirection", default)]
    pub directions: Vec<RouteDirection>,
}

/// One directional variant of a route, with its own trip list.
#[derive(Clone, Debug, Deserialize)]
pub struct RouteDirection {
    #[serde(rename = "RouteNo")]
    pub route_no: String,
    #[serde(rename = "RouteLabel", default)]
    pub route_label: String,
    #[serde(rename = "Direction", default)]
    pub direction: String,
    #[serde(rename = "Error", default)]
    pub error: String,
    #[serde(rename = "RequestProcessingTime", default)]
    pub request_processing_time: String,
    #[serde(rename = "Trips")]
    pub trips: TripBlock,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TripBlock {
    #[serde(rename = "Trip", default)]
    pub trip: Vec<TripEntry>,
}

/// One predicted trip as the feed reports it. Any field may be missing.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TripEntry {
    #[serde(rename = "RouteNo")]
    pub route_no: Option<String>,
    #[serde(rename = "TripDestination")]
    pub trip_destination: Option<String>,
    #[serde(rename = "AdjustedScheduleTime")]
    pub adjusted_schedule_time: Option<String>,
    #[serde(rename = "StopNo")]
    pub stop_no: Option<String>,
    #[serde(rename = "BusType")]
    pub bus_type: Option<String>,
    #[serde(rename = "Longitude")]
    pub longitude: Option<String>,
    #[serde(rename = "Latitude")]
    pub latitude: Option<String>,
}
