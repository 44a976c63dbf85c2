//! Aggregation of a next-trips response into a schedule keyed by route
//! number.
//!
//! This is the single place where the feed's inconsistent optional fields
//! are resolved to defaults, so every consumer sees total records.

use std::sync::Arc;

use tracing::debug;

use crate::feed::next_trips::{NextTripsResponse, TripEntry};
use crate::identifiers::RouteNumber;
use crate::models::types::{ScheduleByRoute, TripRecord};

/// Flatten a parsed next-trips response into route-number → trips.
///
/// Directions are walked in response order and trips within a direction in
/// response order; that order is the feed's arrival order and is preserved
/// as-is. Directions sharing a route number (the two directions of the same
/// route, typically) concatenate into one list. Missing trip fields never
/// fail — they resolve to `"N/A"` (destination, arrival time) or
/// `"Unknown"` (bus type, coordinates).
pub fn aggregate(response: &NextTripsResponse) -> ScheduleByRoute {
    let mut schedule = ScheduleByRoute::new();

    for direction in &response.result.route.directions {
        let route_number = RouteNumber::new(&direction.route_no);
        for trip in &direction.trips.trip {
            schedule
                .entry(route_number.clone())
                .or_default()
                .push(trip_record(route_number.clone(), trip));
        }
    }

    debug!(
        routes = schedule.len(),
        trips = schedule.values().map(Vec::len).sum::<usize>(),
        "aggregated schedule"
    );
    schedule
}

fn trip_record(route_number: RouteNumber, trip: &TripEntry) -> TripRecord {
    TripRecord {
        route_number,
        destination: or_default(&trip.trip_destination, "N/A"),
        arrival_time: or_default(&trip.adjusted_schedule_time, "N/A"),
        bus_type: or_default(&trip.bus_type, "Unknown"),
        longitude: or_default(&trip.longitude, "Unknown"),
        latitude: or_default(&trip.latitude, "Unknown"),
    }
}

fn or_default(field: &Option<String>, default: &str) -> Arc<str> {
    field.as_deref().unwrap_or(default).into()
}
