//! R-tree index over stops for viewport-scale queries.
//!
//! The linear scan in [`queries`](crate::spatial::queries) is the contract
//! for small candidate sets; this index covers the full-city stop list the
//! application shell keeps around for the map view.
//!
//! ## Two-Stage Filtering
//!
//! Radius queries filter in two stages:
//! 1. **R-tree filter**: Euclidean distance in degrees for fast approximate
//!    candidate selection
//! 2. **Haversine filter**: accurate geodesic distance on the filtered
//!    results
//!
//! Euclidean distance on geographic coordinates grows inaccurate over large
//! spans, so the precise check always has the last word.

use std::sync::Arc;

use geo::Point;
use rstar::{PointDistance, RTree, RTreeObject, AABB};

use crate::models::types::Stop;
use crate::spatial::queries::haversine_distance;

#[derive(Clone)]
pub struct StopNode {
    pub stop: Arc<Stop>,
    point: [f64; 2],
}

impl StopNode {
    pub fn new(stop: Arc<Stop>) -> Self {
        let point = [stop.location.x(), stop.location.y()];
        Self { stop, point }
    }
}

impl RTreeObject for StopNode {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for StopNode {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

/// Spatially indexed stop collection.
///
/// Cheap to clone; stops are shared through `Arc`.
#[derive(Clone)]
pub struct StopIndex {
    tree: RTree<StopNode>,
}

impl StopIndex {
    /// Bulk-load an index from a stop list.
    pub fn from_stops(stops: Vec<Stop>) -> Self {
        let tree = RTree::bulk_load(
            stops
                .into_iter()
                .map(|stop| StopNode::new(Arc::new(stop)))
                .collect(),
        );
        Self { tree }
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// The stop nearest to `point`, or `None` for an empty index.
    pub fn nearest(&self, point: Point) -> Option<Arc<Stop>> {
        self.tree
            .nearest_neighbor(&[point.x(), point.y()])
            .map(|node| node.stop.clone())
    }

    /// All stops within `radius_m` meters of `point`.
    pub fn within_radius(&self, point: Point, radius_m: f64) -> Vec<Arc<Stop>> {
        // Validate radius is positive
        if radius_m <= 0.0 || !radius_m.is_finite() {
            return Vec::new();
        }

        self.tree
            .locate_within_distance([point.x(), point.y()], radius_m)
            .filter(|node| haversine_distance(point, node.stop.location) <= radius_m)
            .map(|node| node.stop.clone())
            .collect()
    }
}
