//! Core data types for normalized transit data.

use std::collections::HashMap;
use std::sync::Arc;

use geo::Point;

use crate::identifiers::*;

// ============================================================================
// Data Structures
// ============================================================================

/// One predicted arrival for one route at one stop.
///
/// Every field is a total, already-defaulted display string. The upstream
/// feed omits trip fields inconsistently; the substitution to "N/A" /
/// "Unknown" happens once, at aggregation, so downstream consumers never
/// see an absent value. Longitude/latitude stay opaque strings because the
/// feed sometimes returns non-numeric placeholders in them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TripRecord {
    /// Grouping key; never empty.
    pub route_number: RouteNumber,
    pub destination: Arc<str>,
    /// Adjusted schedule time, kept as the feed's display string.
    pub arrival_time: Arc<str>,
    pub bus_type: Arc<str>,
    pub longitude: Arc<str>,
    pub latitude: Arc<str>,
}

/// Mapping from route number to that route's predicted trips, in feed order.
///
/// Trip order within a list is the feed's arrival order and is never
/// re-sorted. Rebuilt wholesale on every fetch.
pub type ScheduleByRoute = HashMap<RouteNumber, Vec<TripRecord>>;

/// A physical transit stop.
///
/// `id` is the stable feed-assigned key; `code` is the rider-facing stop
/// number printed on the sign.
#[derive(Clone, Debug)]
pub struct Stop {
    pub id: StopIdentifier,
    pub code: Arc<str>,
    pub name: Arc<str>,
    /// x = longitude, y = latitude, degrees.
    pub location: Point,
}

/// A decoded route geometry with its cumulative path length.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedRoute {
    /// Decoded coordinates in travel order.
    pub points: Vec<Point>,
    pub total_distance_meters: f64,
}

impl DecodedRoute {
    /// Build a route from decoded points, deriving the path length.
    pub fn new(points: Vec<Point>) -> Self {
        let total_distance_meters = crate::polyline::path_distance_meters(&points);
        Self {
            points,
            total_distance_meters,
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TransitError {
    #[error("polyline ends mid-component at byte {offset}")]
    MalformedEncoding { offset: usize },

    #[error("polyline byte {byte:#04x} at offset {offset} is outside the encoding alphabet")]
    InvalidEncodingByte { byte: u8, offset: usize },
}

pub type Result<T> = std::result::Result<T, TransitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoded_route_distance() {
        // Two points roughly 111km apart along a meridian
        let route = DecodedRoute::new(vec![
            Point::new(-75.0, 45.0),
            Point::new(-75.0, 46.0),
        ]);
        assert!((route.total_distance_meters - 111_000.0).abs() < 1_000.0);
    }

    #[test]
    fn test_decoded_route_empty() {
        let route = DecodedRoute::new(vec![]);
        assert!(route.points.is_empty());
        assert_eq!(route.total_distance_meters, 0.0);
    }
}
