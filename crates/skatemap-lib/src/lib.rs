//! Skatemap library entry points.
//!
//! This crate builds a terrain-weighted street graph, snaps coordinates onto
//! it, and runs A* to produce skating routes. Higher-level consumers (CLI,
//! HTTP service) should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod builder;
pub mod cost;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod nearest;
pub mod path;
pub mod routing;
pub mod spatial;

pub use builder::{build_graph, load_graph, load_network, GraphBuild, RawEdge, RawNetwork, RawNode};
pub use cost::{penalty, terrain_penalty, TagValue, MIN_PENALTY};
pub use error::{Error, Result};
pub use geometry::{distance, estimate_time_minutes, path_distance, path_to_coordinates, Coordinate};
pub use graph::{Edge, Graph, GraphSummary, Node, NodeId};
pub use nearest::nearest_node;
pub use path::{find_route, path_cost, Heuristic};
pub use routing::{Route, RoutingOptions, RoutingService, SnapStrategy, DEFAULT_AVG_SPEED_KMH};
pub use spatial::SpatialIndex;
