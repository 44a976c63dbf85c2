//! Wire model for the GTFS stop-list payload and its conversion to
//! [`Stop`] records.

use geo::Point;
use serde::Deserialize;
use tracing::debug;

use crate::identifiers::StopIdentifier;
use crate::models::types::Stop;

#[derive(Clone, Debug, Deserialize)]
pub struct StopsResponse {
    #[serde(rename = "Gtfs", default)]
    pub records: Vec<StopRecord>,
}

/// One stop as the feed reports it. Coordinates arrive as strings.
#[derive(Clone, Debug, Deserialize)]
pub struct StopRecord {
    pub stop_id: String,
    pub stop_code: String,
    pub stop_name: String,
    pub stop_lat: String,
    pub stop_lon: String,
}

impl StopRecord {
    /// Convert to a [`Stop`], falling back to 0.0 for coordinate strings
    /// that fail to parse.
    pub fn to_stop(&self) -> Stop {
        Stop {
            id: StopIdentifier::new(&self.stop_id),
            code: self.stop_code.as_str().into(),
            name: self.stop_name.as_str().into(),
            location: Point::new(
                self.stop_lon.parse().unwrap_or(0.0),
                self.stop_lat.parse().unwrap_or(0.0),
            ),
        }
    }
}

impl StopsResponse {
    pub fn stops(&self) -> Vec<Stop> {
        let stops: Vec<Stop> = self.records.iter().map(StopRecord::to_stop).collect();
        debug!(count = stops.len(), "converted stop list");
        stops
    }
}
