//! Route computation entry point.
//!
//! [`RoutingService`] owns the graph for the lifetime of the process and turns
//! a pair of coordinates into a [`Route`]:
//!
//! ```text
//! coordinates ──snap──▶ node ids ──A*──▶ node path ──geometry──▶ Route
//! ```
//!
//! The graph is published once through [`RoutingService::initialize`] and is
//! read-only afterwards, so a single service can be shared across threads
//! behind an `Arc` without locking.
//!
//! # Example
//!
//! ```
//! use skatemap_lib::{Graph, RoutingService};
//!
//! let mut graph = Graph::new();
//! graph.add_node(1, 0.0, 0.0);
//! graph.add_node(2, 0.0, 0.01);
//! graph.add_edge(1, 2, 1.0).unwrap();
//!
//! let service = RoutingService::new();
//! service.initialize(graph).unwrap();
//! let route = service.compute_route(0.0, 0.0, 0.0, 0.01).unwrap();
//! assert_eq!(route.geometry.len(), 2);
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::{
    estimate_time_minutes, path_distance, path_to_coordinates, round_to, validate_coordinate,
};
use crate::graph::{Graph, NodeId};
use crate::nearest::nearest_node;
use crate::path::{find_route, Heuristic};
use crate::spatial::SpatialIndex;

/// Assumed average skating speed.
pub const DEFAULT_AVG_SPEED_KMH: f64 = 10.0;

/// How endpoints are snapped onto the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnapStrategy {
    /// Scan every node. O(n), no extra memory.
    #[default]
    Linear,
    /// Query a KD-tree built at initialization. O(log n).
    KdTree,
}

impl fmt::Display for SnapStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SnapStrategy::Linear => "linear",
            SnapStrategy::KdTree => "kd-tree",
        };
        f.write_str(value)
    }
}

impl FromStr for SnapStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(SnapStrategy::Linear),
            "kd-tree" | "kdtree" => Ok(SnapStrategy::KdTree),
            other => Err(Error::invalid(format!("unknown snap strategy '{other}'"))),
        }
    }
}

/// Tunables for route computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutingOptions {
    pub avg_speed_kmh: f64,
    pub heuristic: Heuristic,
    pub snap: SnapStrategy,
}

impl Default for RoutingOptions {
    fn default() -> Self {
        Self {
            avg_speed_kmh: DEFAULT_AVG_SPEED_KMH,
            heuristic: Heuristic::default(),
            snap: SnapStrategy::default(),
        }
    }
}

/// Computed route summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Geographic length in kilometres, rounded to two decimals.
    pub distance_km: f64,
    /// Estimated skating time in minutes, rounded to one decimal.
    pub skate_time_min: f64,
    /// `[lat, lng]` pairs along the path.
    pub geometry: Vec<[f64; 2]>,
    /// Node ids along the path.
    #[serde(skip)]
    pub nodes: Vec<NodeId>,
}

struct Loaded {
    graph: Graph,
    index: Option<SpatialIndex>,
}

/// Holds the routing graph and answers route requests.
pub struct RoutingService {
    options: RoutingOptions,
    loaded: OnceLock<Loaded>,
}

impl RoutingService {
    pub fn new() -> Self {
        Self::with_options(RoutingOptions::default())
    }

    pub fn with_options(options: RoutingOptions) -> Self {
        Self {
            options,
            loaded: OnceLock::new(),
        }
    }

    pub fn options(&self) -> &RoutingOptions {
        &self.options
    }

    /// Publish the graph. Must be called exactly once before routing; a
    /// second call fails with [`Error::AlreadyInitialized`] and keeps the
    /// first graph.
    pub fn initialize(&self, graph: Graph) -> Result<()> {
        if self.loaded.get().is_some() {
            return Err(Error::AlreadyInitialized);
        }
        let index = match self.options.snap {
            SnapStrategy::Linear => None,
            SnapStrategy::KdTree => Some(SpatialIndex::build(&graph)),
        };
        self.loaded
            .set(Loaded { graph, index })
            .map_err(|_| Error::AlreadyInitialized)
    }

    pub fn is_initialized(&self) -> bool {
        self.loaded.get().is_some()
    }

    /// The published graph, if any.
    pub fn graph(&self) -> Option<&Graph> {
        self.loaded.get().map(|loaded| &loaded.graph)
    }

    /// Snap a coordinate to a node using the configured strategy.
    pub fn snap(&self, lat: f64, lng: f64) -> Result<NodeId> {
        let loaded = self.loaded.get().ok_or(Error::NotInitialized)?;
        match &loaded.index {
            Some(index) => index.nearest(lat, lng),
            None => nearest_node(&loaded.graph, lat, lng),
        }
    }

    /// Compute a route between two coordinates.
    pub fn compute_route(
        &self,
        start_lat: f64,
        start_lng: f64,
        end_lat: f64,
        end_lng: f64,
    ) -> Result<Route> {
        let loaded = self.loaded.get().ok_or(Error::NotInitialized)?;
        validate_coordinate(start_lat, start_lng)?;
        validate_coordinate(end_lat, end_lng)?;

        let start = self.snap(start_lat, start_lng)?;
        let goal = self.snap(end_lat, end_lng)?;

        let path = find_route(&loaded.graph, start, goal, self.options.heuristic)?;
        let coordinates = path_to_coordinates(&loaded.graph, &path)?;

        let distance_km = round_to(path_distance(&coordinates), 2);
        let skate_time_min = estimate_time_minutes(&coordinates, self.options.avg_speed_kmh)?;

        Ok(Route {
            distance_km,
            skate_time_min,
            geometry: coordinates.iter().map(|&(lat, lng)| [lat, lng]).collect(),
            nodes: path,
        })
    }
}

impl Default for RoutingService {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RoutingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutingService")
            .field("options", &self.options)
            .field("node_count", &self.graph().map(Graph::node_count))
            .finish()
    }
}
