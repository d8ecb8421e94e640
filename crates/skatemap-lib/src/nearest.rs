use crate::error::{Error, Result};
use crate::geometry::distance;
use crate::graph::{Graph, NodeId};

/// Snap a coordinate to the closest graph node by scanning every node.
///
/// Nodes are visited in ascending id order and only a strictly smaller
/// distance replaces the current best, so ties resolve to the lowest id.
/// O(n) per call; see [`crate::spatial::SpatialIndex`] for large graphs.
pub fn nearest_node(graph: &Graph, lat: f64, lng: f64) -> Result<NodeId> {
    let mut closest: Option<(NodeId, f64)> = None;

    for node in graph.nodes() {
        let dist = distance(lat, lng, node.lat, node.lng);
        match closest {
            Some((_, best)) if dist >= best => {}
            _ => closest = Some((node.id, dist)),
        }
    }

    closest.map(|(id, _)| id).ok_or(Error::EmptyGraph)
}
