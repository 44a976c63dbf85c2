//! Spatial query utilities for distance calculations.
//!
//! Uses Haversine formula for accurate distances on Earth's surface.

use geo::{HaversineDistance, Point};

use crate::models::types::Stop;

/// Calculate Haversine distance between two points in meters
pub fn haversine_distance(p1: Point, p2: Point) -> f64 {
    p1.haversine_distance(&p2)
}

/// Find the candidate stop closest to `from` by Haversine distance.
///
/// Returns `None` for an empty candidate list. On an exact distance tie the
/// earliest candidate in input order wins.
pub fn nearest_stop(from: Point, candidates: &[Stop]) -> Option<&Stop> {
    let mut best: Option<(&Stop, f64)> = None;

    for stop in candidates {
        let distance = haversine_distance(from, stop.location);
        match best {
            Some((_, best_distance)) if best_distance <= distance => {}
            _ => best = Some((stop, distance)),
        }
    }

    best.map(|(stop, _)| stop)
}
