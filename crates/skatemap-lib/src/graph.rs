use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// Opaque node identifier assigned by the graph builder.
pub type NodeId = i64;

/// A single point in the routing graph, usually an intersection or dead end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub lat: f64,
    pub lng: f64,
}

/// Adjacency entry: the neighbouring node and the cost of reaching it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: NodeId,
    pub weight: f64,
}

/// Undirected weighted graph used by the pathfinder.
///
/// The graph is populated once by a builder and then treated as read-only.
/// Nodes are kept in ascending id order so iteration (and therefore
/// nearest-node tie-breaking) is stable.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: BTreeMap<NodeId, Node>,
    adjacency: HashMap<NodeId, Vec<Edge>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node. Re-inserting an existing id is a no-op; the first
    /// insertion wins.
    pub fn add_node(&mut self, id: NodeId, lat: f64, lng: f64) {
        if self.nodes.contains_key(&id) {
            return;
        }
        self.nodes.insert(id, Node { id, lat, lng });
        self.adjacency.entry(id).or_default();
    }

    /// Add an undirected edge, stored symmetrically on both endpoints.
    ///
    /// Endpoints are not required to exist as nodes; readers treat missing
    /// ids as isolated.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, weight: f64) -> Result<()> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::invalid(format!(
                "edge {u}-{v} has weight {weight}; weights must be finite and non-negative"
            )));
        }

        self.adjacency
            .entry(u)
            .or_default()
            .push(Edge { target: v, weight });
        self.adjacency
            .entry(v)
            .or_default()
            .push(Edge { target: u, weight });
        Ok(())
    }

    /// Return the neighbours for a given node, or an empty slice if unknown.
    pub fn neighbours(&self, id: NodeId) -> &[Edge] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Weight of the edge between `u` and `v`, or infinity when absent.
    pub fn edge_weight(&self, u: NodeId, v: NodeId) -> f64 {
        self.neighbours(u)
            .iter()
            .find(|edge| edge.target == v)
            .map(|edge| edge.weight)
            .unwrap_or(f64::INFINITY)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Iterate nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges (each is stored twice internally).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate every stored adjacency entry as `(source, edge)`, ordered by
    /// source id.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, &Edge)> {
        let mut sources: Vec<&NodeId> = self.adjacency.keys().collect();
        sources.sort_unstable();
        sources.into_iter().flat_map(move |source| {
            self.adjacency[source]
                .iter()
                .map(move |edge| (*source, edge))
        })
    }

    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            nodes: self.node_count(),
            edges: self.edge_count(),
        }
    }
}

/// Node and edge totals for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub nodes: usize,
    pub edges: usize,
}

impl fmt::Display for GraphSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nodes: {}\nEdges: {}", self.nodes, self.edges)
    }
}
