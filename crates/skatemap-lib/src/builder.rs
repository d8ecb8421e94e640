//! Build a terrain-weighted [`Graph`] from a raw street network.
//!
//! The raw network is the output of an upstream extraction step (OSM
//! download and simplification): intersections with coordinates, and road
//! segments carrying their `surface` and `highway` tags. Each segment becomes
//! an undirected edge weighted by `distance * terrain_penalty`.
//!
//! The expected JSON layout:
//!
//! ```json
//! {
//!   "nodes": [{"id": 1, "lat": 40.60, "lng": -74.01}],
//!   "edges": [{"u": 1, "v": 2, "surface": "asphalt", "highway": ["footway", "steps"]}]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cost::{terrain_penalty, TagValue};
use crate::error::{Error, Result};
use crate::geometry::distance;
use crate::graph::{Graph, NodeId};

/// Raw intersection from the upstream network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawNode {
    pub id: NodeId,
    pub lat: f64,
    pub lng: f64,
}

/// Raw road segment with its unprocessed tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEdge {
    pub u: NodeId,
    pub v: NodeId,
    #[serde(default)]
    pub surface: TagValue,
    #[serde(default)]
    pub highway: TagValue,
}

/// Street network as delivered by the extraction step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawNetwork {
    #[serde(default)]
    pub nodes: Vec<RawNode>,
    #[serde(default)]
    pub edges: Vec<RawEdge>,
}

/// Result of building a graph, with counts of discarded input.
#[derive(Debug, Clone)]
pub struct GraphBuild {
    pub graph: Graph,
    /// Segments dropped because an endpoint was missing or they looped.
    pub skipped_edges: usize,
}

/// Read and parse a raw network JSON file.
pub fn load_network(path: &Path) -> Result<RawNetwork> {
    debug!(path = %path.display(), "reading raw network");
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| Error::NetworkLoad {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Build the weighted routing graph.
pub fn build_graph(network: &RawNetwork) -> Result<GraphBuild> {
    let mut graph = Graph::new();
    for node in &network.nodes {
        graph.add_node(node.id, node.lat, node.lng);
    }

    let mut skipped_edges = 0;
    for edge in &network.edges {
        if edge.u == edge.v {
            skipped_edges += 1;
            continue;
        }
        let (Some(a), Some(b)) = (graph.node(edge.u).copied(), graph.node(edge.v).copied())
        else {
            warn!(u = edge.u, v = edge.v, "skipping edge with unknown endpoint");
            skipped_edges += 1;
            continue;
        };

        let length_km = distance(a.lat, a.lng, b.lat, b.lng);
        let weight = length_km * terrain_penalty(&edge.surface, &edge.highway);
        graph.add_edge(edge.u, edge.v, weight)?;
    }

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        skipped = skipped_edges,
        "built routing graph"
    );

    Ok(GraphBuild {
        graph,
        skipped_edges,
    })
}

/// Load a raw network file and build its graph in one step.
pub fn load_graph(path: &Path) -> Result<GraphBuild> {
    let network = load_network(path)?;
    build_graph(&network)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_loops_are_skipped() {
        let network = RawNetwork {
            nodes: vec![RawNode {
                id: 1,
                lat: 0.0,
                lng: 0.0,
            }],
            edges: vec![RawEdge {
                u: 1,
                v: 1,
                surface: TagValue::Absent,
                highway: TagValue::Absent,
            }],
        };
        let build = build_graph(&network).unwrap();
        assert_eq!(build.skipped_edges, 1);
        assert_eq!(build.graph.edge_count(), 0);
    }

    #[test]
    fn missing_tags_default_to_absent() {
        let edge: RawEdge = serde_json::from_str(r#"{"u":1,"v":2}"#).unwrap();
        assert_eq!(edge.surface, TagValue::Absent);
        assert_eq!(edge.highway, TagValue::Absent);
    }
}
