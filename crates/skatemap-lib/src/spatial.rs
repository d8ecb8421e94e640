//! KD-tree spatial index for nearest-node snapping.
//!
//! A drop-in replacement for the linear scan in [`crate::nearest`] when graphs
//! grow large. Nodes are projected onto the unit sphere as 3D Cartesian
//! points; straight-line (chord) distance between unit vectors grows
//! monotonically with great-circle distance, so the Euclidean nearest
//! neighbour in the tree is also the haversine nearest neighbour.
//!
//! # Example
//!
//! ```
//! use skatemap_lib::{Graph, SpatialIndex};
//!
//! let mut graph = Graph::new();
//! graph.add_node(1, 40.60, -74.01);
//! graph.add_node(2, 40.61, -74.00);
//!
//! let index = SpatialIndex::build(&graph);
//! assert_eq!(index.nearest(40.609, -74.001).unwrap(), 2);
//! ```

use std::collections::HashMap;

use kiddo::float::kdtree::KdTree;
use kiddo::SquaredEuclidean;
use tracing::info;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};

/// KD-tree bucket size (kiddo default).
const BUCKET_SIZE: usize = 32;

/// Precomputed spatial index over the nodes of a [`Graph`].
pub struct SpatialIndex {
    /// KD-tree over unit-sphere coordinates. Items index into `nodes`.
    tree: KdTree<f64, usize, 3, BUCKET_SIZE, u32>,
    /// Node ids in insertion order.
    nodes: Vec<NodeId>,
}

impl SpatialIndex {
    /// Build an index from every node in the graph.
    ///
    /// Nodes sharing an exact coordinate collapse to the lowest id, which
    /// keeps kiddo buckets from overflowing on stacked points. Near-ties
    /// between distinct coordinates may resolve differently from the linear
    /// scan, since chord and haversine distances round differently.
    pub fn build(graph: &Graph) -> Self {
        let mut nodes = Vec::new();
        let mut seen: HashMap<(u64, u64), NodeId> = HashMap::new();
        let mut tree: KdTree<f64, usize, 3, BUCKET_SIZE, u32> = KdTree::new();

        for node in graph.nodes() {
            let key = (node.lat.to_bits(), node.lng.to_bits());
            if seen.contains_key(&key) {
                continue;
            }
            seen.insert(key, node.id);

            let index = nodes.len();
            tree.add(&to_unit_sphere(node.lat, node.lng), index);
            nodes.push(node.id);
        }

        info!(
            node_count = graph.node_count(),
            indexed = nodes.len(),
            "built spatial index"
        );

        Self { tree, nodes }
    }

    /// Number of indexed positions.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Closest node to a coordinate. Fails with [`Error::EmptyGraph`] when
    /// nothing was indexed.
    pub fn nearest(&self, lat: f64, lng: f64) -> Result<NodeId> {
        if self.nodes.is_empty() {
            return Err(Error::EmptyGraph);
        }
        let neighbour = self
            .tree
            .nearest_one::<SquaredEuclidean>(&to_unit_sphere(lat, lng));
        Ok(self.nodes[neighbour.item])
    }
}

impl std::fmt::Debug for SpatialIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpatialIndex")
            .field("node_count", &self.nodes.len())
            .finish()
    }
}

fn to_unit_sphere(lat: f64, lng: f64) -> [f64; 3] {
    let phi = lat.to_radians();
    let lambda = lng.to_radians();
    [
        phi.cos() * lambda.cos(),
        phi.cos() * lambda.sin(),
        phi.sin(),
    ]
}
