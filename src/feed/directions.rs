//! Wire model for the directions response and the flattening of its
//! per-step geometry into one [`DecodedRoute`].

use serde::Deserialize;
use tracing::debug;

use crate::models::types::{DecodedRoute, Result};
use crate::polyline;

#[derive(Clone, Debug, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DirectionsRoute {
    #[serde(default)]
    pub legs: Vec<DirectionsLeg>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DirectionsLeg {
    #[serde(default)]
    pub steps: Vec<DirectionsStep>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DirectionsStep {
    pub polyline: EncodedPolyline,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EncodedPolyline {
    pub points: String,
}

impl DirectionsRoute {
    /// Decode every step polyline in leg-then-step order and concatenate
    /// the coordinates into one path with its cumulative length.
    ///
    /// Fails if any step geometry is malformed.
    pub fn decoded_route(&self) -> Result<DecodedRoute> {
        let mut points = Vec::new();
        for leg in &self.legs {
            for step in &leg.steps {
                points.extend(polyline::decode(&step.polyline.points)?);
            }
        }
        debug!(points = points.len(), "decoded route geometry");
        Ok(DecodedRoute::new(points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use crate::models::types::TransitError;

    fn route_with_steps(steps: &[&str]) -> DirectionsRoute {
        DirectionsRoute {
            legs: vec![DirectionsLeg {
                steps: steps
                    .iter()
                    .map(|points| DirectionsStep {
                        polyline: EncodedPolyline {
                            points: (*points).into(),
                        },
                    })
                    .collect(),
            }],
        }
    }

    #[test]
    fn test_parse_directions_body() {
        let body = r#"{
            "routes": [
                {"legs": [{"steps": [{"polyline": {"points": "_p~iF~ps|U"}}]}]}
            ]
        }"#;

        let response: DirectionsResponse = serde_json::from_str(body).unwrap();
        let route = response.routes[0].decoded_route().unwrap();
        assert_eq!(route.points.len(), 1);
    }

    #[test]
    fn test_steps_concatenate_in_order() {
        let route = route_with_steps(&["_p~iF~ps|U_ulLnnqC", "_p~iF~ps|U"])
            .decoded_route()
            .unwrap();

        assert_eq!(route.points.len(), 3);
        assert_abs_diff_eq!(route.points[0].y(), 38.5, epsilon = 1e-5);
        assert_abs_diff_eq!(route.points[1].y(), 40.7, epsilon = 1e-5);
        // Each step restarts its delta chain from zero.
        assert_abs_diff_eq!(route.points[2].y(), 38.5, epsilon = 1e-5);
        assert!(route.total_distance_meters > 0.0);
    }

    #[test]
    fn test_empty_route() {
        let route = DirectionsRoute { legs: vec![] }.decoded_route().unwrap();
        assert!(route.points.is_empty());
        assert_eq!(route.total_distance_meters, 0.0);
    }

    #[test]
    fn test_malformed_step_fails() {
        let err = route_with_steps(&["_p~iF~ps|U", "_"])
            .decoded_route()
            .unwrap_err();
        assert!(matches!(err, TransitError::MalformedEncoding { .. }));
    }
}
